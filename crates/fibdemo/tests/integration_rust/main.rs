mod cli_tests;
mod common;
