// src/extractors/sector.rs
use crate::extractors::grammar::{parse_float, parse_int, SECTOR_RE};
use crate::report::models::SectorAnalysis;
use regex::Captures;

/// Lazily yields every well-formed `setor_<N>:` block in text order.
///
/// A block needs both numeric lines and at least one `  * ` bullet; anything
/// less is skipped without error. A missing second bullet leaves a single
/// observation. The iterator borrows `text` and is consumed once.
pub fn extract_sectors(text: &str) -> impl Iterator<Item = SectorAnalysis> + '_ {
    SECTOR_RE.captures_iter(text).filter_map(|caps| {
        let sector = decode(&caps);
        match &sector {
            Some(s) => tracing::trace!(
                "Sector {} matched with {} observation(s)",
                s.index,
                s.observations.len()
            ),
            None => tracing::debug!("Skipping sector block with out-of-range number"),
        }
        sector
    })
}

fn decode(caps: &Captures) -> Option<SectorAnalysis> {
    let mut observations = vec![caps[4].to_string()];
    if let Some(second) = caps.get(5) {
        observations.push(second.as_str().to_string());
    }

    Some(SectorAnalysis {
        index: parse_int(&caps[1])?,
        contrast: parse_float(&caps[2])?,
        homogeneity: parse_float(&caps[3])?,
        observations,
    })
}
