// src/report/mod.rs
pub mod models;
pub mod source;

pub use models::{
    Circle,
    CollaretteMetrics,
    Interpretation,
    SectorAnalysis,
    StructuralMeasurements,
    StructuredReportRecord,
};
