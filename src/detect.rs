//! Field-delimiter inference.
//!
//! Samples the leading lines of the input and reports which candidate
//! delimiter splits them into a consistent number of fields. Intended as a
//! guess to be confirmed by the user, not as ground truth.

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::parser::Tokenizer;

/// Candidate delimiters, in priority order. The first valid candidate wins.
const CANDIDATES: [char; 6] = [';', ',', '\t', '-', ':', ' '];

/// How many leading lines are sampled.
const SAMPLE_LINES: usize = 7;

/// Guess the field delimiter of `text`.
///
/// Each candidate is probed by re-splitting the first `min(7, lineCount)`
/// lines with the candidate as the field delimiter, keeping the caller's
/// quote and line-delimiter context. A candidate is valid when every
/// checked line splits into more than one field and the field count matches
/// across checked lines. Lines shorter than two characters end the check
/// for that candidate without invalidating it.
///
/// Returns the winning delimiter as a one-character string, or the empty
/// string when no candidate is valid. Candidates that collide with the
/// configured quote or line-delimiter characters are skipped.
///
/// # Errors
///
/// Fails only when `config` itself violates the character-set contract.
pub fn detect_delimiter(text: &str, config: &Config) -> Result<String> {
    let tokenizer = Tokenizer::compile(config)?;
    let lines = tokenizer.split_lines(text);
    let sample = &lines[..lines.len().min(SAMPLE_LINES)];

    for candidate in CANDIDATES {
        let probe_config = config.clone().with_field_delimiters(candidate.to_string());
        let Ok(probe) = Tokenizer::compile(&probe_config) else {
            // Candidate collides with the caller's quote or line set
            continue;
        };

        if candidate_is_consistent(&probe, sample) {
            debug!(delimiter = ?candidate, "Detected field delimiter");
            return Ok(candidate.to_string());
        }
    }

    debug!("No candidate delimiter produced consistent field counts");
    Ok(String::new())
}

/// Check one candidate against the sampled lines.
fn candidate_is_consistent(probe: &Tokenizer, sample: &[&str]) -> bool {
    let mut previous = None;

    for line in sample {
        if line.chars().count() < 2 {
            // Too short to be a data line; stop checking, candidate stands
            break;
        }

        let count = probe.split_fields(line).len();
        if count <= 1 {
            return false;
        }
        if previous.is_some_and(|p| p != count) {
            return false;
        }
        previous = Some(count);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_semicolon_over_comma() {
        let text = "a;b;c\nd;e;f\ng;h;i\nj;k;l\nm;n;o";

        let delimiter = detect_delimiter(text, &Config::default()).unwrap();
        assert_eq!(delimiter, ";");
    }

    #[test]
    fn test_detects_comma() {
        let text = "name,age,city\nalice,30,london\nbob,41,leeds";

        let delimiter = detect_delimiter(text, &Config::default()).unwrap();
        assert_eq!(delimiter, ",");
    }

    #[test]
    fn test_detects_tab() {
        let text = "name\tage\nalice\t30\nbob\t41";

        let delimiter = detect_delimiter(text, &Config::default()).unwrap();
        assert_eq!(delimiter, "\t");
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        // Both ";" and "," split every line into the same count; the
        // earlier-listed candidate wins.
        let text = "a;b,c\nd;e,f\ng;h,i";

        let delimiter = detect_delimiter(text, &Config::default()).unwrap();
        assert_eq!(delimiter, ";");
    }

    #[test]
    fn test_inconsistent_counts_rejected() {
        // Comma counts differ between lines; no other candidate appears
        let text = "a,b,c\nd,e\nf,g,h";

        let delimiter = detect_delimiter(text, &Config::default()).unwrap();
        assert_eq!(delimiter, "");
    }

    #[test]
    fn test_undelimited_text_yields_empty() {
        let text = "alpha\nbravo\ncharlie";

        let delimiter = detect_delimiter(text, &Config::default()).unwrap();
        assert_eq!(delimiter, "");
    }

    #[test]
    fn test_short_line_stops_checking_without_failing() {
        // The third line is a single character, so only the first two lines
        // are checked for every candidate; the later inconsistency on line
        // four is never seen.
        let text = "a;b\nc;d\nx\ne;f;g";

        let delimiter = detect_delimiter(text, &Config::default()).unwrap();
        assert_eq!(delimiter, ";");
    }

    #[test]
    fn test_degenerate_input_resolves_to_first_candidate() {
        // Empty text is one empty line, which is shorter than two
        // characters; every candidate passes vacuously and the first wins.
        // Callers are expected to confirm the guess with the user.
        let delimiter = detect_delimiter("", &Config::default()).unwrap();
        assert_eq!(delimiter, ";");
    }

    #[test]
    fn test_quoted_delimiters_do_not_count() {
        // Quote-aware probing: the embedded commas are field content, so
        // comma splits these lines into 2 fields, not 3.
        let text = "\"a,x\",b\n\"c,y\",d\n\"e,z\",f";

        let delimiter = detect_delimiter(text, &Config::default()).unwrap();
        assert_eq!(delimiter, ",");
    }

    #[test]
    fn test_only_eight_or_more_lines_ignored() {
        // Lines past the seventh are not sampled; an inconsistency there
        // does not disqualify the candidate.
        let text = "a,b\nc,d\ne,f\ng,h\ni,j\nk,l\nm,n\nbroken";

        let delimiter = detect_delimiter(text, &Config::default()).unwrap();
        assert_eq!(delimiter, ",");
    }
}
