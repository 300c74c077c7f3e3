//! Assembling a two-dimensional table from delimited text.

use tracing::debug;

use super::tokenizer::Tokenizer;
use crate::config::Config;
use crate::error::Result;

/// Parse `text` into an ordered sequence of rows of field values.
///
/// Lines in `[start_line, end_line)` are returned, with `end_line: None`
/// meaning "to the end" and any configured bound clamped to the actual line
/// count. A start line at or beyond the end bound yields an empty table,
/// never an error.
///
/// Excluded columns are removed per row in the order given, each index
/// applied against the row as already shortened by the previous removals.
/// Callers excluding several columns must order the indices with that
/// shifting in mind; see [`Config::excluded_columns`]. Out-of-range indices
/// are ignored.
///
/// # Errors
///
/// Fails only when `config` violates the character-set contract.
pub fn to_array(text: &str, config: &Config) -> Result<Vec<Vec<String>>> {
    let tokenizer = Tokenizer::compile(config)?;
    let lines = tokenizer.split_lines(text);

    let (start, end) = resolve_bounds(config, lines.len());
    debug!(lines = lines.len(), start, end, "Building table");

    let mut rows = Vec::with_capacity(end.saturating_sub(start));
    for line in &lines[start.min(end)..end] {
        let mut fields = tokenizer.split_fields(line);
        for &index in &config.excluded_columns {
            if index < fields.len() {
                fields.remove(index);
            }
        }
        rows.push(fields);
    }

    Ok(rows)
}

/// Resolve the configured line window against the actual line count.
pub(crate) fn resolve_bounds(config: &Config, line_count: usize) -> (usize, usize) {
    let end = match config.end_line {
        Some(end) => end.min(line_count),
        None => line_count,
    };
    (config.start_line, end)
}
