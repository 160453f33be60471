//! # cte-cli
//!
//! Command-line front end for the `cte` converter.

pub mod cli;

pub use cli::{render, run, Args};
