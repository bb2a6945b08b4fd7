// Data sources
// Where the dataset comes from. Loading either yields the whole dataset or fails.

use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Dataset;

/// Failure to obtain a dataset. Terminal for the render attempt.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read features from {origin}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse features from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Supplies the raw feature dataset
pub trait DataSource {
    /// Human-readable origin, used in messages
    fn describe(&self) -> String;

    fn load(&self) -> Result<Dataset, SourceError>;
}

fn parse(origin: String, json: &str) -> Result<Dataset, SourceError> {
    let dataset = Dataset::from_json_str(json).map_err(|source| SourceError::Parse {
        origin: origin.clone(),
        source,
    })?;
    log::debug!("loaded {} features from {}", dataset.len(), origin);
    Ok(dataset)
}

/// Dataset stored in a JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Dataset, SourceError> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            origin: self.describe(),
            source,
        })?;
        parse(self.describe(), &json)
    }
}

/// Dataset read once from standard input
#[derive(Debug, Clone, Default)]
pub struct StdinSource;

impl DataSource for StdinSource {
    fn describe(&self) -> String {
        "<stdin>".to_string()
    }

    fn load(&self) -> Result<Dataset, SourceError> {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .map_err(|source| SourceError::Io {
                origin: self.describe(),
                source,
            })?;
        parse(self.describe(), &json)
    }
}

/// Dataset held in memory, mostly useful for embedding and tests
#[derive(Debug, Clone)]
pub struct StaticSource {
    json: String,
}

impl StaticSource {
    pub fn new(json: impl Into<String>) -> Self {
        StaticSource { json: json.into() }
    }
}

impl DataSource for StaticSource {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn load(&self) -> Result<Dataset, SourceError> {
        parse(self.describe(), &self.json)
    }
}

/// Pick a source for a `--data` argument; `-` means stdin
pub fn source_for(location: &Path) -> Box<dyn DataSource> {
    if location.as_os_str() == "-" {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use std::fs;

    #[test]
    fn test_file_source_loads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("features.json");
        fs::write(&path, r#"[{"feature": "Chat", "ides": {}}]"#).unwrap();

        let dataset = FileSource::new(&path).load().unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.features[0].name, "Chat");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = FileSource::new(temp_dir.path().join("nope.json")).load().unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = StaticSource::new("[{").load().unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[test]
    fn test_empty_array() {
        let dataset = StaticSource::new("[]").load().unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_source_for_dash_is_stdin() {
        assert_eq!(source_for(Path::new("-")).describe(), "<stdin>");
        assert_eq!(source_for(Path::new("data.json")).describe(), "data.json");
    }
}
