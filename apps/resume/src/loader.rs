//! Reads the résumé YAML from disk.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::ResumeData;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("error reading config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing config file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Loads and deserializes the résumé stored at `path`.
pub fn load_resume(path: impl AsRef<Path>) -> Result<ResumeData, ParseError> {
    let path = path.as_ref();
    let raw = std::fs::read(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "Read resume config");

    serde_yaml::from_slice(&raw).map_err(|source| ParseError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Deserializes a résumé from an in-memory YAML document.
pub fn parse_resume(raw: &str) -> Result<ResumeData, serde_yaml::Error> {
    serde_yaml::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "personal:\n  name: Jane Doe\n  title: Engineer").unwrap();

        let resume = load_resume(file.path()).unwrap();
        assert_eq!(resume.personal.name, "Jane Doe");
        assert_eq!(resume.personal.title, "Engineer");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_resume(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ParseError::Read { .. }));
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "experience: [unclosed").unwrap();

        let err = load_resume(file.path()).unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "skills: not-a-list").unwrap();

        let err = load_resume(file.path()).unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn test_parse_resume_from_str() {
        let resume = parse_resume("languages:\n  - language: English\n    proficiency: Native\n")
            .unwrap();
        assert_eq!(resume.languages.len(), 1);
        assert_eq!(resume.languages[0].proficiency, "Native");
    }
}
