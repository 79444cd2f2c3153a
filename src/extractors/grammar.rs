// src/extractors/grammar.rs
//
// Shapes of a well-formed report. Every field is validated by its pattern
// before conversion, so conversion helpers only fail on overflow.

use once_cell::sync::Lazy;
use regex::Regex;

// --- Field Shapes ---
// ASCII digits only: `\d` would accept any Unicode digit.
const INT: &str = r"[0-9]+";
const FLOAT: &str = r"[0-9]+(?:\.[0-9]+)?";

// --- Section Patterns ---
// Two contiguous lines, pupil first. Six integer groups: px, py, pr, ix, iy, ir.
pub static STRUCTURAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"Pupila: Centro \(({INT}), ({INT})\), Raio ({INT})px\nIris: Centro \(({INT}), ({INT})\), Raio ({INT})px"
    ))
    .expect("Failed to compile STRUCTURAL_RE")
});

// Groups: index, contrast, homogeneity, first bullet, optional second bullet.
pub static SECTOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"setor_({INT}):\n- Contraste: ({FLOAT})\n- Homogeneidade: ({FLOAT})\n  \* ([^\n]+)(?:\n  \* ([^\n]+))?"
    ))
    .expect("Failed to compile SECTOR_RE")
});

pub static COLLARETTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"Regularidade: ({FLOAT})\n- Circularidade: ({FLOAT})"))
        .expect("Failed to compile COLLARETTE_RE")
});

// Label is greedy: it runs up to the last ": " on the line.
pub static INTERPRETATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"• ([^\n]+): ([^\n]+)").expect("Failed to compile INTERPRETATION_RE")
});

/// `(section kind, pattern)` pairs, in report order. Used by the debug annotator.
pub fn grammar_patterns() -> [(&'static str, &'static Regex); 4] {
    [
        ("structural", &*STRUCTURAL_RE),
        ("sector", &*SECTOR_RE),
        ("collarette", &*COLLARETTE_RE),
        ("interpretation", &*INTERPRETATION_RE),
    ]
}

// --- Conversions ---

/// Converts an already shape-checked integer field. `None` only above `u64::MAX`.
pub fn parse_int(field: &str) -> Option<u64> {
    field.parse().ok()
}

/// Converts an already shape-checked float field.
/// Digit strings too long for `f64` would become infinity, which JSON cannot hold.
pub fn parse_float(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Interpretation keys: trimmed, lowercased, spaces to underscores.
/// Accents and punctuation are kept as-is.
pub fn normalize_key(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}
