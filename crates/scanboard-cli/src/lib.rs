//! # scanboard-cli
//!
//! Command-line interface for the scanboard findings dashboard.
//!
//! ## Commands
//!
//! - **serve**: run the dashboard server (HTTP API + refresh loop)
//! - **summary**: load findings once and print the aggregates as tables
//!   or JSON

pub mod cli;
pub mod output;

pub use cli::run;
