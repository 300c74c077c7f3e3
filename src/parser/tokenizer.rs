//! Tokenizer compilation from a parsing configuration.
//!
//! A [`Tokenizer`] bundles the matchers every other component consumes: a
//! trailing line-delimiter-run matcher anchored at the end of the input, a
//! line-delimiter-run matcher used to split the input into logical lines,
//! and the field-splitting rules (quote-aware when the configuration has
//! quote characters, plain otherwise). Compilation is pure, so a tokenizer
//! may be compiled once per distinct configuration and reused across calls.

use regex::Regex;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;

/// Compiled matchers for one parsing configuration.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Matches the line-delimiter run at the very end of the input.
    pub(crate) trailing: Regex,
    /// Matches an interior line-delimiter run.
    pub(crate) line_run: Regex,
    /// Field-splitting rules selected from the quote configuration.
    pub(crate) fields: FieldRules,
}

/// Field-splitting mode, fixed at compile time.
#[derive(Debug, Clone)]
pub(crate) enum FieldRules {
    /// Split on every delimiter character; adjacent delimiters produce
    /// empty fields.
    Simple { delimiters: Regex },
    /// As `Simple`, then rejoin quote-opened spans into single fields.
    Quoted {
        delimiters: Regex,
        quotes: String,
        /// Character used to rejoin the pieces of a quoted span. The field
        /// delimiter that split the span is not recorded, so the first
        /// configured delimiter stands in for all of them.
        join: char,
    },
}

impl Tokenizer {
    /// Compile matchers for `config`.
    ///
    /// Validates the configuration contract first and fails with
    /// [`DelimTextError::Configuration`](crate::DelimTextError::Configuration)
    /// if the character sets are empty where they must not be, or overlap.
    pub fn compile(config: &Config) -> Result<Self> {
        config.validate()?;

        let line_class = character_class(&config.line_delimiters);
        let field_class = character_class(&config.field_delimiters);

        let trailing = Regex::new(&format!("[{line_class}]+$"))?;
        let line_run = Regex::new(&format!("[{line_class}]+"))?;
        let delimiters = Regex::new(&format!("[{field_class}]"))?;

        let fields = if config.quote_chars.is_empty() {
            FieldRules::Simple { delimiters }
        } else {
            FieldRules::Quoted {
                delimiters,
                quotes: config.quote_chars.clone(),
                // Non-empty after validation
                join: config.field_delimiters.chars().next().unwrap_or(','),
            }
        };

        debug!(
            field_delimiters = ?config.field_delimiters,
            quote_chars = ?config.quote_chars,
            line_delimiters = ?config.line_delimiters,
            "Compiled tokenizer"
        );

        Ok(Self {
            trailing,
            line_run,
            fields,
        })
    }
}

/// Escape each character of `set` for use inside a regex character class.
fn character_class(set: &str) -> String {
    set.chars()
        .map(|c| regex::escape(&c.to_string()))
        .collect()
}
