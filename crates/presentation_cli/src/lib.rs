//! Link command-line front end
//!
//! Argument definitions and output formatting for the `link-cli` binary.

pub mod cli;
pub mod output;
