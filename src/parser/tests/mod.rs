//! Test utilities shared across the parser test modules.

use crate::config::Config;
use crate::parser::Tokenizer;

mod tokenizer_tests;

/// Tokenizer compiled from the default configuration
pub fn default_tokenizer() -> Tokenizer {
    Tokenizer::compile(&Config::default()).unwrap()
}

/// Tokenizer compiled from the given configuration
pub fn tokenizer_for(config: &Config) -> Tokenizer {
    Tokenizer::compile(config).unwrap()
}

/// Sample comma-delimited content with a header row and a quoted field
pub fn sample_csv() -> &'static str {
    "name,role,note\r\nalice,admin,\"likes tabs, oddly\"\r\nbob,user,plain\r\n"
}
