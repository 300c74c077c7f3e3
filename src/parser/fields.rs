//! Splitting one logical line into field values.
//!
//! Two modes, fixed when the tokenizer is compiled:
//!
//! - **Simple**: split on every delimiter character. Two adjacent
//!   delimiters produce an empty field.
//! - **Quoted**: split as in simple mode, then rejoin pieces that form a
//!   quoted span back into a single field. A span opens at a piece whose
//!   first character is a configured quote character and closes at the next
//!   piece whose last character is that same quote character; an
//!   unterminated span closes at the last piece of the line. Doubled quote
//!   characters inside the span are the escape sequence for a literal quote.
//!
//! Malformed quoting is tolerated, never an error.

use super::tokenizer::{FieldRules, Tokenizer};

impl Tokenizer {
    /// Split one logical line into its field values.
    pub fn split_fields(&self, line: &str) -> Vec<String> {
        match &self.fields {
            FieldRules::Simple { delimiters } => {
                delimiters.split(line).map(str::to_string).collect()
            }
            FieldRules::Quoted {
                delimiters,
                quotes,
                join,
            } => {
                let pieces: Vec<&str> = delimiters.split(line).collect();
                let mut out = Vec::with_capacity(pieces.len());

                let mut i = 0;
                while i < pieces.len() {
                    let opening = pieces[i].chars().next().filter(|c| quotes.contains(*c));
                    match opening {
                        Some(quote) => {
                            // Scan forward for the piece that closes the span.
                            // The opening piece itself may close it (e.g. "a").
                            let close = pieces[i..]
                                .iter()
                                .position(|piece| piece.chars().last() == Some(quote))
                                .map(|offset| i + offset)
                                .unwrap_or(pieces.len() - 1);

                            let span = pieces[i..=close].join(&join.to_string());
                            out.push(unquote(&span, quote));
                            i = close + 1;
                        }
                        None => {
                            out.push(pieces[i].to_string());
                            i += 1;
                        }
                    }
                }

                out
            }
        }
    }
}

/// Collapse doubled quotes in a quoted span, then strip its first and last
/// character.
///
/// The strip is positional rather than conditional on the character being a
/// quote: an unterminated span closes at the last piece of the line, whose
/// final character is treated as the closing quote whatever it is.
fn unquote(span: &str, quote: char) -> String {
    let doubled: String = [quote, quote].iter().collect();
    let collapsed = span.replace(&doubled, &quote.to_string());

    let mut chars = collapsed.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}
