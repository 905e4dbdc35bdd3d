//! # aff-parser
//!
//! A low-level parser for Hunspell `.aff` affix-rule directive files.
//! Each significant line is indexed as `COMMAND [PARAMETER_LINE]`; commands
//! are stored uppercase and parameter lines are kept verbatim, in file order.
//!
//! **Note:** This crate only builds the directive index. Interpreting or
//! applying affix rules is left to higher layers.
pub mod aff;

// Re-export the main types for convenience
pub use aff::{AffError, AffParser, Result};
