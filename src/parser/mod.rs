// src/parser/mod.rs
use crate::extractors::{
    extract_collarette, extract_interpretation, extract_sectors, extract_structural,
};
use crate::report::models::StructuredReportRecord;
use crate::utils::error::{AppError, ParseError};

/// Runs the four section extractors over one report text and assembles the record.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportParser;

impl ReportParser {
    pub fn new() -> Self {
        Self {}
    }

    /// Parses a report. Missing structural or collarette sections abort the
    /// parse (structural is checked first); sectors and interpretation may be empty.
    pub fn parse(&self, text: &str) -> Result<StructuredReportRecord, ParseError> {
        tracing::debug!("Parsing report ({} bytes)", text.len());

        let structural = extract_structural(text)?;
        let collarette = extract_collarette(text)?;
        let sectors: Vec<_> = extract_sectors(text).collect();
        let interpretation = extract_interpretation(text);

        tracing::info!(
            "Parsed report: {} sector(s), {} interpretation entr{}",
            sectors.len(),
            interpretation.len(),
            if interpretation.len() == 1 { "y" } else { "ies" }
        );

        Ok(StructuredReportRecord {
            structural,
            sectors,
            collarette,
            interpretation,
        })
    }
}

/// Convenience wrapper around [`ReportParser::parse`].
pub fn parse(text: &str) -> Result<StructuredReportRecord, ParseError> {
    ReportParser::new().parse(text)
}

/// Parses named reports concurrently on blocking workers.
/// Results come back in input order; one failing report does not affect the others.
pub async fn parse_batch(
    reports: Vec<(String, String)>,
) -> Result<Vec<(String, Result<StructuredReportRecord, ParseError>)>, AppError> {
    let handles: Vec<_> = reports
        .into_iter()
        .map(|(name, text)| {
            tokio::task::spawn_blocking(move || {
                let result = parse(&text);
                (name, result)
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let outcome = handle
            .await
            .map_err(|e| AppError::Processing(format!("Parser worker failed: {}", e)))?;
        results.push(outcome);
    }
    Ok(results)
}
