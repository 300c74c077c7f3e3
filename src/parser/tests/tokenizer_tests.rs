//! Tests for tokenizer compilation and configuration validation

use crate::config::Config;
use crate::error::DelimTextError;
use crate::parser::Tokenizer;

#[test]
fn test_compile_default_config() {
    assert!(Tokenizer::compile(&Config::default()).is_ok());
}

#[test]
fn test_compile_rejects_overlapping_sets() {
    let config = Config::default().with_quote_chars(",");

    let err = Tokenizer::compile(&config).unwrap_err();
    match err {
        DelimTextError::Configuration { message } => {
            assert!(message.contains("field delimiter"));
            assert!(message.contains("quote"));
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_compile_rejects_empty_line_delimiters() {
    let config = Config::default().with_line_delimiters("");
    assert!(Tokenizer::compile(&config).is_err());
}

#[test]
fn test_regex_metacharacters_are_literal_delimiters() {
    // '-' and '^' are regex metacharacters inside character classes and
    // must be escaped during compilation
    let config = Config::default().with_field_delimiters("-^");
    let tokenizer = Tokenizer::compile(&config).unwrap();

    assert_eq!(tokenizer.split_fields("a-b^c"), vec!["a", "b", "c"]);
    assert_eq!(tokenizer.split_fields("abc"), vec!["abc"]);
}

#[test]
fn test_tokenizer_is_reusable_across_calls() {
    let tokenizer = Tokenizer::compile(&Config::default()).unwrap();

    assert_eq!(tokenizer.split_fields("a,b"), vec!["a", "b"]);
    assert_eq!(tokenizer.split_fields("c,d"), vec!["c", "d"]);
    assert_eq!(tokenizer.split_lines("x\ny").len(), 2);
}

#[test]
fn test_quote_mode_selected_by_quote_set() {
    let quoted = Tokenizer::compile(&Config::default()).unwrap();
    assert_eq!(quoted.split_fields("\"a,b\""), vec!["a,b"]);

    let simple = Tokenizer::compile(&Config::default().without_quoting()).unwrap();
    assert_eq!(simple.split_fields("\"a,b\""), vec!["\"a", "b\""]);
}
