//! Core `.aff` directive parsing module

pub mod error;
mod line;
mod parser;

pub use error::{AffError, Result};
pub use parser::AffParser;
