//! delimtext
//!
//! A lightweight, quote-aware parser for delimited text (CSV/TSV-style)
//! that turns already-decoded text into a 2D table of strings or a sequence
//! of header-keyed records, without pulling in a full CSV library.
//!
//! This library provides tools for:
//! - Splitting text into logical lines and quote-aware fields
//! - Assembling tables with line windowing and column exclusion
//! - Assembling records keyed by derived or caller-supplied headers
//! - Guessing the field delimiter of unknown input
//! - Guessing whether a first row is a header
//!
//! Parsing is tolerant by design: unterminated quotes, out-of-range line
//! bounds, and invalid excluded-column indices never fail. The only error
//! is a configuration-contract violation (empty or overlapping delimiter
//! and quote character sets).
//!
//! ## Usage
//!
//! ```rust
//! use delimtext::{Config, Options, to_array, to_records};
//!
//! # fn example() -> delimtext::Result<()> {
//! // Host-held defaults, merged with per-call overrides
//! let defaults = Config::default();
//! let rows = to_array("a,\"b,c\",d", &defaults)?;
//! assert_eq!(rows, vec![vec!["a", "b,c", "d"]]);
//!
//! let tsv = Options::new().field_delimiters("\t").over(&defaults);
//! let records = to_records("name\tage\nalice\t30", &tsv)?;
//! assert_eq!(records[0]["age"], "30");
//! # Ok(())
//! # }
//! ```
//!
//! There is no process-wide mutable configuration: hold your own default
//! [`Config`] and merge [`Options`] over it at call boundaries. Mutating
//! that value concurrently with an in-flight call is a caller
//! responsibility to avoid, exactly as with any shared value.

pub mod config;
pub mod detect;
pub mod error;
pub mod header;
pub mod parser;

// Re-export commonly used types and operations
pub use config::{Config, Options};
pub use detect::detect_delimiter;
pub use error::{DelimTextError, Result};
pub use header::is_header_row;
pub use parser::{Record, Tokenizer, to_array, to_records};
