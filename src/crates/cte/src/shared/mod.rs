//! Shared utilities for encoding and decoding

pub mod string_utils;
pub mod validation;

pub use string_utils::*;
pub use validation::*;
