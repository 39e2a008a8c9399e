//! SI (International System of Units) Units
//!
//! The five tracked base units, gram, and the named derived units.

pub mod base;
pub mod derived;

pub use base::*;
pub use derived::*;
