//! Heuristic check for whether a row plausibly is a header.

/// Report whether `row` looks like a header row.
///
/// The guess is based on three assumptions, checked column by column from
/// first to last, each short-circuiting to `false`:
///
/// 1. no value is empty,
/// 2. no value is numeric — a value whose leading integer is non-zero, so
///    `"3abc"` disqualifies while `"0"` and `"0.5"` do not,
/// 3. all values are unique.
///
/// Pure predicate; repeated calls with the same row return the same result.
pub fn is_header_row<S: AsRef<str>>(row: &[S]) -> bool {
    let mut seen: Vec<&str> = Vec::with_capacity(row.len());

    for value in row {
        let value = value.as_ref();

        if value.is_empty() {
            return false;
        }
        if has_leading_integer(value) {
            return false;
        }
        if seen.contains(&value) {
            return false;
        }

        seen.push(value);
    }

    true
}

/// True when the value starts (after optional whitespace and sign) with
/// digits that form a non-zero integer. A `0x`/`0X` prefix switches to hex
/// digits, so `"0x1A"` is numeric.
fn has_leading_integer(value: &str) -> bool {
    let rest = value.trim_start();
    let rest = rest.strip_prefix(['+', '-']).unwrap_or(rest);

    let (rest, hex) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(stripped) => (stripped, true),
        None => (rest, false),
    };

    let mut any_digit = false;
    let mut non_zero = false;
    for c in rest.chars() {
        let is_digit = if hex {
            c.is_ascii_hexdigit()
        } else {
            c.is_ascii_digit()
        };
        if !is_digit {
            break;
        }
        any_digit = true;
        if c != '0' {
            non_zero = true;
        }
    }

    any_digit && non_zero
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_header_accepted() {
        assert!(is_header_row(&["Name", "Age", "City"]));
    }

    #[test]
    fn test_numeric_values_rejected() {
        assert!(!is_header_row(&["1", "2", "3"]));
        assert!(!is_header_row(&["Name", "Age", "42"]));
    }

    #[test]
    fn test_leading_integer_counts_as_numeric() {
        assert!(!is_header_row(&["3abc", "def"]));
        assert!(!is_header_row(&["  -7 units", "def"]));
    }

    #[test]
    fn test_hex_prefix_counts_as_numeric() {
        assert!(!is_header_row(&["0x1A", "def"]));
        assert!(!is_header_row(&["-0Xff", "def"]));
    }

    #[test]
    fn test_bare_and_zero_hex_prefixes_are_not_numeric() {
        // "0x" has no digits and "0x0" parses to zero; neither disqualifies
        assert!(is_header_row(&["0x", "0x0", "other"]));
    }

    #[test]
    fn test_zero_and_fractional_prefixes_are_not_numeric() {
        // Leading-integer parse of "0" and "0.5" yields zero, which does
        // not disqualify.
        assert!(is_header_row(&["0", "0.5", "zero"]));
    }

    #[test]
    fn test_empty_value_rejected() {
        assert!(!is_header_row(&["Name", "", "City"]));
    }

    #[test]
    fn test_duplicate_values_rejected() {
        assert!(!is_header_row(&["a", "a"]));
        assert!(!is_header_row(&["a", "b", "a"]));
    }

    #[test]
    fn test_empty_row_is_a_header() {
        // Vacuously true; no column violates any rule
        let row: [&str; 0] = [];
        assert!(is_header_row(&row));
    }

    #[test]
    fn test_predicate_is_idempotent() {
        let row = ["Name", "Age", "City"];
        assert_eq!(is_header_row(&row), is_header_row(&row));

        let numeric = ["1", "2"];
        assert_eq!(is_header_row(&numeric), is_header_row(&numeric));
    }
}
