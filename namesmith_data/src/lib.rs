//! Shared data model for page field sources.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_page};
