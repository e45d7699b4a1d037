//! Integration tests for script-hygiene

mod scanner_tests;
mod splitter_tests;
