//! Splitting raw text into logical lines.
//!
//! A run of consecutive line-delimiter characters acts as a single
//! separator, so blank lines between doubled separators are not preserved.
//! This is deliberately asymmetric with field splitting, where every
//! delimiter character is its own split point: columns may legitimately be
//! empty, rows may not.

use super::tokenizer::Tokenizer;

impl Tokenizer {
    /// Split `text` into logical lines.
    ///
    /// A delimiter run at the very end of the text is stripped first, so a
    /// terminal newline does not produce a trailing empty line. Empty input
    /// yields a single empty line, never an empty sequence.
    pub fn split_lines<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let body = match self.trailing.find(text) {
            Some(m) => &text[..m.start()],
            None => text,
        };

        self.line_run.split(body).collect()
    }
}
