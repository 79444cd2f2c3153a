// src/extractors/structural.rs
use crate::extractors::grammar::{parse_int, STRUCTURAL_RE};
use crate::report::models::{Circle, StructuralMeasurements};
use crate::utils::error::{ParseError, Section};
use regex::Captures;

/// Finds the pupil/iris header. The leftmost well-formed occurrence wins;
/// any later ones are ignored.
pub fn extract_structural(text: &str) -> Result<StructuralMeasurements, ParseError> {
    for caps in STRUCTURAL_RE.captures_iter(text) {
        match decode(&caps) {
            Some(measurements) => {
                tracing::debug!(
                    "Structural header at byte {}: pupil r={} iris r={}",
                    caps.get(0).map_or(0, |m| m.start()),
                    measurements.pupil.radius,
                    measurements.iris.radius
                );
                return Ok(measurements);
            }
            None => tracing::debug!("Skipping structural candidate with out-of-range integer"),
        }
    }

    tracing::debug!("No structural header found");
    Err(ParseError::MissingSection(Section::Structural))
}

fn decode(caps: &Captures) -> Option<StructuralMeasurements> {
    let circle = |first: usize| -> Option<Circle> {
        Some(Circle {
            center: (parse_int(&caps[first])?, parse_int(&caps[first + 1])?),
            radius: parse_int(&caps[first + 2])?,
        })
    };

    Some(StructuralMeasurements {
        pupil: circle(1)?,
        iris: circle(4)?,
    })
}
