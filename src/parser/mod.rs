//! Delimited-text parsing pipeline.
//!
//! The pipeline is organized into logical components:
//! - [`tokenizer`] - Matcher compilation from a configuration
//! - [`lines`] - Splitting raw text into logical lines
//! - [`fields`] - Splitting one line into field values, quote-aware
//! - [`table`] - Assembling the final 2D table
//! - [`records`] - Assembling header-keyed records
//!
//! Raw text flows through the tokenizer's line and field splitters and is
//! assembled by the table or record builder; delimiter inference and the
//! header heuristic (in the crate root modules) are independent utilities
//! layered on the same tokenizer.

pub mod fields;
pub mod lines;
pub mod records;
pub mod table;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use records::{Record, to_records};
pub use table::to_array;
pub use tokenizer::Tokenizer;
