//! Field resolution --
//!
//! One submodule per addressing mode. Every resolver returns
//! `Option<String>`: `None` uniformly means "field missing or value
//! blank", which the name assembler escalates to a creation failure.

pub mod dynamic;
pub mod structured;
pub mod wired;

pub use dynamic::resolve_dynamic;
pub use structured::resolve_structured;
pub use wired::resolve_wired;
