//! Configuration for delimited-text parsing.
//!
//! [`Config`] is a fully resolved configuration: every field is concrete and
//! carries a documented default. There is no process-wide mutable state; a
//! host application that wants overridable defaults holds its own `Config`
//! value and merges per-call [`Options`] over it with [`Options::over`].
//! Later changes to the host's defaults affect only calls made afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{DelimTextError, Result};

/// Resolved parsing configuration.
///
/// Character-set fields (`field_delimiters`, `quote_chars`,
/// `line_delimiters`) treat each character of the string as one member of
/// the set. The three sets must not overlap; [`Config::validate`] rejects
/// configurations where they do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Characters that separate fields within a line. Default: `","`.
    pub field_delimiters: String,

    /// Characters that may open and close a quoted field. Empty means no
    /// quoting is recognized. Default: `"\""`.
    pub quote_chars: String,

    /// Characters that separate lines. A run of consecutive line-delimiter
    /// characters acts as a single separator. Default: `"\r\n"`.
    pub line_delimiters: String,

    /// First line index to return. Default: `0`.
    pub start_line: usize,

    /// Exclusive upper line bound. `None` reads to the end of the input;
    /// values beyond the actual line count are clamped. Default: `None`.
    pub end_line: Option<usize>,

    /// Zero-based column indices removed from table output.
    ///
    /// Indices are applied in the order given against the progressively
    /// shortened row, so `[1, 2]` removes original columns 1 and 3 while
    /// `[2, 1]` removes original columns 2 and 1. Out-of-range indices are
    /// ignored. Default: empty.
    pub excluded_columns: Vec<usize>,

    /// Column names used for record output instead of deriving them from
    /// the first row. Default: empty (derive from first row).
    pub custom_headers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_delimiters: ",".to_string(),
            quote_chars: "\"".to_string(),
            line_delimiters: "\r\n".to_string(),
            start_line: 0,
            end_line: None,
            excluded_columns: Vec::new(),
            custom_headers: Vec::new(),
        }
    }
}

impl Config {
    /// Set the field delimiter character set
    pub fn with_field_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.field_delimiters = delimiters.into();
        self
    }

    /// Set the quote character set
    pub fn with_quote_chars(mut self, quotes: impl Into<String>) -> Self {
        self.quote_chars = quotes.into();
        self
    }

    /// Disable quote handling entirely (faster, but embedded delimiters
    /// inside quoted fields will split)
    pub fn without_quoting(mut self) -> Self {
        self.quote_chars.clear();
        self
    }

    /// Set the line delimiter character set
    pub fn with_line_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.line_delimiters = delimiters.into();
        self
    }

    /// Set the first line index to return
    pub fn with_start_line(mut self, line: usize) -> Self {
        self.start_line = line;
        self
    }

    /// Set the exclusive upper line bound
    pub fn with_end_line(mut self, line: usize) -> Self {
        self.end_line = Some(line);
        self
    }

    /// Set the excluded column indices
    pub fn with_excluded_columns(mut self, columns: Vec<usize>) -> Self {
        self.excluded_columns = columns;
        self
    }

    /// Set caller-supplied column names for record output
    pub fn with_custom_headers(mut self, headers: Vec<String>) -> Self {
        self.custom_headers = headers;
        self
    }

    /// Validate the caller contract for character sets.
    ///
    /// Field and line delimiter sets must be non-empty, and no character may
    /// appear in more than one of the field, quote, and line sets.
    pub fn validate(&self) -> Result<()> {
        if self.field_delimiters.is_empty() {
            return Err(DelimTextError::configuration(
                "field delimiter set must not be empty",
            ));
        }
        if self.line_delimiters.is_empty() {
            return Err(DelimTextError::configuration(
                "line delimiter set must not be empty",
            ));
        }

        for c in self.field_delimiters.chars() {
            if self.quote_chars.contains(c) {
                return Err(DelimTextError::configuration(format!(
                    "character {c:?} is both a field delimiter and a quote character"
                )));
            }
            if self.line_delimiters.contains(c) {
                return Err(DelimTextError::configuration(format!(
                    "character {c:?} is both a field delimiter and a line delimiter"
                )));
            }
        }
        for c in self.quote_chars.chars() {
            if self.line_delimiters.contains(c) {
                return Err(DelimTextError::configuration(format!(
                    "character {c:?} is both a quote character and a line delimiter"
                )));
            }
        }

        Ok(())
    }
}

/// Per-call overrides merged over a caller-held default [`Config`].
///
/// Every field mirrors one `Config` field; `None` inherits the default.
/// `end_line` is doubly optional so an overlay can force "read to end"
/// (`Some(None)`, via [`Options::to_end`]) as well as inherit (`None`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub field_delimiters: Option<String>,
    pub quote_chars: Option<String>,
    pub line_delimiters: Option<String>,
    pub start_line: Option<usize>,
    pub end_line: Option<Option<usize>>,
    pub excluded_columns: Option<Vec<usize>>,
    pub custom_headers: Option<Vec<String>>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.field_delimiters = Some(delimiters.into());
        self
    }

    pub fn quote_chars(mut self, quotes: impl Into<String>) -> Self {
        self.quote_chars = Some(quotes.into());
        self
    }

    /// Override to no quote handling
    pub fn without_quoting(mut self) -> Self {
        self.quote_chars = Some(String::new());
        self
    }

    pub fn line_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.line_delimiters = Some(delimiters.into());
        self
    }

    pub fn start_line(mut self, line: usize) -> Self {
        self.start_line = Some(line);
        self
    }

    pub fn end_line(mut self, line: usize) -> Self {
        self.end_line = Some(Some(line));
        self
    }

    /// Override to reading until the last line
    pub fn to_end(mut self) -> Self {
        self.end_line = Some(None);
        self
    }

    pub fn excluded_columns(mut self, columns: Vec<usize>) -> Self {
        self.excluded_columns = Some(columns);
        self
    }

    pub fn custom_headers(mut self, headers: Vec<String>) -> Self {
        self.custom_headers = Some(headers);
        self
    }

    /// Merge these overrides over `defaults`, field by field. Set fields
    /// win; unset fields inherit.
    pub fn over(&self, defaults: &Config) -> Config {
        Config {
            field_delimiters: self
                .field_delimiters
                .clone()
                .unwrap_or_else(|| defaults.field_delimiters.clone()),
            quote_chars: self
                .quote_chars
                .clone()
                .unwrap_or_else(|| defaults.quote_chars.clone()),
            line_delimiters: self
                .line_delimiters
                .clone()
                .unwrap_or_else(|| defaults.line_delimiters.clone()),
            start_line: self.start_line.unwrap_or(defaults.start_line),
            end_line: self.end_line.unwrap_or(defaults.end_line),
            excluded_columns: self
                .excluded_columns
                .clone()
                .unwrap_or_else(|| defaults.excluded_columns.clone()),
            custom_headers: self
                .custom_headers
                .clone()
                .unwrap_or_else(|| defaults.custom_headers.clone()),
        }
    }
}
