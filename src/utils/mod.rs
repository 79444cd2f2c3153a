// src/utils/mod.rs
pub mod error;
pub mod logging;
pub mod report_debug;

pub use error::{AppError, ParseError, Section}; // Re-export main error types for convenience
