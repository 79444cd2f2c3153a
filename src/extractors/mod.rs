// src/extractors/mod.rs
pub mod collarette;
pub mod grammar;
pub mod interpretation;
pub mod sector;
pub mod structural;

// Re-export the section extractors for convenience
pub use collarette::extract_collarette;
pub use interpretation::extract_interpretation;
pub use sector::extract_sectors;
pub use structural::extract_structural;
