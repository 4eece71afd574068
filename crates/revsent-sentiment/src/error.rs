use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {artifact} artifact: {source}")]
    Json {
        artifact: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported {artifact} artifact: expected format {expected:?} v{expected_version}, found {found:?} v{found_version}")]
    UnsupportedFormat {
        artifact: &'static str,
        expected: &'static str,
        expected_version: u32,
        found: String,
        found_version: u32,
    },

    #[error("malformed {artifact} artifact: {reason}")]
    Shape {
        artifact: &'static str,
        reason: String,
    },

    #[error("inference failed: {0}")]
    Inference(String),
}
