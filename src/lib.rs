// src/lib.rs
//! Converts biometric iris analysis reports (free-form text from the imaging
//! stage) into structured records.

pub mod extractors;
pub mod parser;
pub mod report;
pub mod storage;
pub mod utils;

pub use parser::{parse, parse_batch, ReportParser};
pub use report::StructuredReportRecord;
pub use utils::error::{AppError, ParseError, Section};
