//! Assembling header-keyed records from delimited text.

use std::collections::HashMap;

use super::table::resolve_bounds;
use super::tokenizer::Tokenizer;
use crate::config::Config;
use crate::error::Result;

/// One output row keyed by header name.
pub type Record = HashMap<String, String>;

/// Parse `text` into a sequence of records, one per data row.
///
/// The header comes from [`Config::custom_headers`] when non-empty,
/// otherwise from the first logical line. When the header is derived from
/// the first line and the configured start line is 0, the effective start
/// line advances to 1 so the header row is not also returned as data; any
/// other start line is used as given.
///
/// Only the first `header.len()` fields of a data row are used: extra
/// fields are dropped, and header entries beyond the row's width are simply
/// absent from that record. Excluded column indices are skipped without
/// shifting the remaining indices.
///
/// # Errors
///
/// Fails only when `config` violates the character-set contract.
pub fn to_records(text: &str, config: &Config) -> Result<Vec<Record>> {
    let tokenizer = Tokenizer::compile(config)?;
    let lines = tokenizer.split_lines(text);

    let header: Vec<String> = if config.custom_headers.is_empty() {
        // split_lines never returns an empty sequence
        tokenizer.split_fields(lines[0])
    } else {
        config.custom_headers.clone()
    };

    let (mut start, end) = resolve_bounds(config, lines.len());
    if config.custom_headers.is_empty() && start == 0 {
        start = 1;
    }

    let mut records = Vec::with_capacity(end.saturating_sub(start));
    for line in &lines[start.min(end)..end] {
        let fields = tokenizer.split_fields(line);

        let mut record = Record::with_capacity(header.len());
        for (column, name) in header.iter().enumerate() {
            if config.excluded_columns.contains(&column) {
                continue;
            }
            if let Some(value) = fields.get(column) {
                record.insert(name.clone(), value.clone());
            }
        }
        records.push(record);
    }

    Ok(records)
}
