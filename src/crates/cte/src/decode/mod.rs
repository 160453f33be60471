//! Reading assignment streams back into pairs

pub mod assignments;

pub use assignments::*;
