//! Error types for data file loading.

use thiserror::Error;

/// Errors that can occur when loading level, mimic or audio cue data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// Parsed fine but the values make no sense.
    #[error("Invalid definition '{name}': {reason}")]
    InvalidDefinition { name: String, reason: String },
}

/// Read and parse a RON file.
pub fn read_ron<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<T, DataLoadError> {
    let display = path.display().to_string();
    if !path.exists() {
        return Err(DataLoadError::FileNotFound(display));
    }
    let contents = std::fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;
    parse_ron(&display, &contents)
}

/// Parse RON text, naming `origin` in the error.
pub fn parse_ron<T: serde::de::DeserializeOwned>(origin: &str, contents: &str) -> Result<T, DataLoadError> {
    ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
        path: origin.to_string(),
        details: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported() {
        let result: Result<Vec<u32>, _> = read_ron(std::path::Path::new("assets/data/does_not_exist.ron"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound(_))));
    }

    #[test]
    fn parse_errors_name_the_origin() {
        let result: Result<Vec<u32>, _> = parse_ron("inline", "[1, 2,");
        match result {
            Err(DataLoadError::ParseError { path, .. }) => assert_eq!(path, "inline"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
