// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::report::models::StructuredReportRecord;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", name))
    }

    /// Saves the structured record as pretty JSON: `<base>/<name>.json`
    pub fn save_record(
        &self,
        name: &str,
        record: &StructuredReportRecord,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.record_path(name);

        let json = record.to_json_pretty()
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, json)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved record to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves a summary of the record: `<base>/<name>_meta.json`
    pub fn save_record_metadata(
        &self,
        name: &str,
        record: &StructuredReportRecord,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_meta.json", name));

        let metadata = serde_json::json!({
            "report_name": name,
            "sector_count": record.sectors.len(),
            "sector_indices": record.sectors.iter().map(|s| s.index).collect::<Vec<_>>(),
            "interpretation_keys": record.interpretation.keys().collect::<Vec<_>>(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }

    /// Reads back a record written by [`save_record`](Self::save_record).
    pub fn load_record(&self, name: &str) -> Result<StructuredReportRecord, StorageError> {
        let content = fs::read_to_string(self.record_path(name))
            .map_err(StorageError::IoError)?;

        serde_json::from_str(&content)
            .map_err(|e| StorageError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const REPORT: &str = "\
Pupila: Centro (100, 100), Raio 30px
Iris: Centro (100, 100), Raio 50px
setor_4:
- Contraste: 0.5
- Homogeneidade: 0.8
  * ok
Regularidade: 350
- Circularidade: 0.85
• Collarette: Regular.
";

    #[test]
    fn test_new_creates_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        let storage = StorageManager::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(storage.base_dir(), nested.as_path());
    }

    #[test]
    fn test_save_and_load_record() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(tmp.path()).unwrap();
        let record = parse(REPORT).unwrap();

        let path = storage.save_record("exam", &record).unwrap();
        assert_eq!(path, tmp.path().join("exam.json"));

        let loaded = storage.load_record("exam").unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_save_metadata_summarizes_record() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(tmp.path()).unwrap();
        let record = parse(REPORT).unwrap();

        let path = storage.save_record_metadata("exam", &record).unwrap();
        let meta: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(meta["report_name"], "exam");
        assert_eq!(meta["sector_count"], 1);
        assert_eq!(meta["sector_indices"], serde_json::json!([4]));
        assert_eq!(meta["interpretation_keys"], serde_json::json!(["collarette"]));
        assert!(meta["extraction_timestamp"].is_string());
    }

    #[test]
    fn test_large_values_reload_intact() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(tmp.path()).unwrap();
        let report = REPORT
            .replace("Raio 30px", "Raio 4294967296px")
            .replace("Regularidade: 350", &format!("Regularidade: 1{}", "0".repeat(300)));
        let record = parse(&report).unwrap();
        assert!(record.collarette.regularity.is_finite());

        storage.save_record("big", &record).unwrap();
        let loaded = storage.load_record("big").unwrap();
        assert_eq!(loaded.structural.pupil.radius, 4_294_967_296);
        let expected = record.collarette.regularity;
        assert!((loaded.collarette.regularity - expected).abs() <= expected * 1e-12);
    }

    #[test]
    fn test_unrepresentable_float_never_reaches_storage() {
        let huge = format!("Regularidade: {}", "9".repeat(400));
        let report = REPORT.replace("Regularidade: 350", &huge);
        assert!(parse(&report).is_err());
    }

    #[test]
    fn test_load_missing_record_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(tmp.path()).unwrap();
        assert!(matches!(storage.load_record("absent"), Err(StorageError::IoError(_))));
    }
}
