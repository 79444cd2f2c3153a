// src/extractors/interpretation.rs
use crate::extractors::grammar::{normalize_key, INTERPRETATION_RE};
use crate::report::models::Interpretation;

/// Collects every `• <Label>: <text>` bullet anywhere in the report.
/// Duplicate keys after normalization: the later bullet overwrites.
pub fn extract_interpretation(text: &str) -> Interpretation {
    let mut interpretation = Interpretation::new();

    for caps in INTERPRETATION_RE.captures_iter(text) {
        let key = normalize_key(&caps[1]);
        let value = caps[2].to_string();
        if let Some(previous) = interpretation.insert(key.clone(), value) {
            tracing::debug!("Interpretation key '{}' repeated, replacing '{}'", key, previous);
        }
    }

    tracing::debug!("Collected {} interpretation entries", interpretation.len());
    interpretation
}
