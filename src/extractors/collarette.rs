// src/extractors/collarette.rs
use crate::extractors::grammar::{parse_float, COLLARETTE_RE};
use crate::report::models::CollaretteMetrics;
use crate::utils::error::{ParseError, Section};

/// Finds the collarette block; first occurrence wins.
pub fn extract_collarette(text: &str) -> Result<CollaretteMetrics, ParseError> {
    let metrics = COLLARETTE_RE.captures(text).and_then(|caps| {
        Some(CollaretteMetrics {
            regularity: parse_float(&caps[1])?,
            circularity: parse_float(&caps[2])?,
        })
    });

    match metrics {
        Some(metrics) => {
            tracing::debug!(
                "Collarette block: regularity={} circularity={}",
                metrics.regularity,
                metrics.circularity
            );
            Ok(metrics)
        }
        None => {
            tracing::debug!("No collarette block found");
            Err(ParseError::MissingSection(Section::Collarette))
        }
    }
}
