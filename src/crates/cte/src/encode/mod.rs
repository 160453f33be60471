//! Flattening and rendering of value trees

pub mod flatten;
pub mod keys;
pub mod primitives;
pub mod writer;

pub use flatten::*;
pub use keys::*;
pub use primitives::*;
pub use writer::*;
