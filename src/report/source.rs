// src/report/source.rs
use crate::utils::error::SourceError;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Path argument that selects standard input instead of a file.
pub const STDIN_MARKER: &str = "-";

/// A report text together with the name used for logging and storage.
#[derive(Debug, Clone)]
pub struct LoadedReport {
    pub name: String,
    pub text: String,
}

/// Loads a report from `path`, or from stdin when `path` is `-`.
pub async fn load_report(path: &str) -> Result<LoadedReport, SourceError> {
    let (name, text) = if path == STDIN_MARKER {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        tracing::debug!("Read {} bytes from stdin", text.len());
        ("stdin".to_string(), text)
    } else {
        let file_path = Path::new(path);
        if !tokio::fs::try_exists(file_path).await? {
            tracing::warn!("Report file does not exist: {}", path);
            return Err(SourceError::NotFound(path.to_string()));
        }
        let text = tokio::fs::read_to_string(file_path).await?;
        tracing::debug!("Read {} bytes from {}", text.len(), path);
        (report_name(file_path), text)
    };

    if text.trim().is_empty() {
        return Err(SourceError::Empty(name));
    }

    Ok(LoadedReport { name, text })
}

/// Derives a storage-friendly name from the file stem.
pub fn report_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "report".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_report_name_uses_file_stem() {
        assert_eq!(report_name(Path::new("/tmp/exam_42.txt")), "exam_42");
        assert_eq!(report_name(Path::new("relatorio")), "relatorio");
        assert_eq!(report_name(Path::new("/")), "report");
    }

    #[test]
    fn test_load_report_from_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "Regularidade: 350").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let loaded = tokio_test::block_on(load_report(&path)).unwrap();
        assert_eq!(loaded.text, "Regularidade: 350\n");
        assert_eq!(loaded.name, report_name(file.path()));
    }

    #[tokio::test]
    async fn test_load_report_missing_file() {
        let result = load_report("/definitely/not/here/report.txt").await;
        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_load_report_rejects_blank_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  \n\t\n").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let result = load_report(&path).await;
        assert!(matches!(result, Err(SourceError::Empty(_))));
    }
}
