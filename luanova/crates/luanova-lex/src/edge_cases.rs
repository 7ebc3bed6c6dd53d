//! Edge case tests for luanova-lex
