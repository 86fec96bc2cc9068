// ABOUTME: Library root for docker-facts - resolves container engine facts.
// ABOUTME: The command-line front end is in main.rs.

pub mod compose;
pub mod config;
pub mod correlate;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod model;
pub mod output;
pub mod parse;
pub mod resolve;
pub mod runner;
pub mod types;
