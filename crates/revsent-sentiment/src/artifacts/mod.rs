//! Read-only access to the pre-trained vectorizer and classifier.
//!
//! Both artifacts are JSON files produced by the offline training pipeline.
//! They are loaded once, checked against each other, and never mutated.

mod classifier;
mod vectorizer;

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::SentimentError;
use crate::types::{FeatureVector, Vote};

pub use classifier::NaiveBayesClassifier;
pub use vectorizer::CountVectorizer;

/// Transform from raw text to a fixed-width feature vector.
pub trait TextVectorizer: Send + Sync {
    fn vectorize(&self, text: &str) -> FeatureVector;

    /// Number of columns every produced vector has.
    fn width(&self) -> usize;
}

/// Pre-trained model mapping a feature vector to a binary vote.
pub trait BinaryClassifier: Send + Sync {
    /// # Errors
    ///
    /// Returns [`SentimentError::Inference`] when the vector does not fit the model.
    fn classify(&self, features: &FeatureVector) -> Result<Vote, SentimentError>;

    /// Number of feature columns the model was trained on.
    fn width(&self) -> usize;
}

/// Locations of the serialized artifacts on local disk.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub vectorizer: PathBuf,
    pub classifier: PathBuf,
}

/// Lowercase hex SHA-256 of each artifact file as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFingerprint {
    pub vectorizer_sha256: String,
    pub classifier_sha256: String,
}

/// The loaded vectorizer/classifier pair.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    vectorizer: CountVectorizer,
    classifier: NaiveBayesClassifier,
    fingerprint: ArtifactFingerprint,
}

impl ArtifactStore {
    /// Load and cross-check both artifacts.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] if either file is missing or unreadable, is
    /// not a supported artifact, or if the two disagree on feature width.
    /// Callers must treat any error as fatal.
    pub fn load(paths: &ArtifactPaths) -> Result<Self, SentimentError> {
        let vectorizer_bytes = read_artifact(&paths.vectorizer)?;
        let classifier_bytes = read_artifact(&paths.classifier)?;

        let store = Self::from_slices(&vectorizer_bytes, &classifier_bytes)?;

        tracing::info!(
            vectorizer = %paths.vectorizer.display(),
            classifier = %paths.classifier.display(),
            vocabulary_size = store.vocabulary_size(),
            vectorizer_sha256 = %store.fingerprint.vectorizer_sha256,
            classifier_sha256 = %store.fingerprint.classifier_sha256,
            "loaded sentiment artifacts"
        );

        Ok(store)
    }

    /// Build a store from in-memory artifact bytes.
    ///
    /// # Errors
    ///
    /// Same as [`ArtifactStore::load`], minus the I/O failures.
    pub fn from_slices(
        vectorizer_bytes: &[u8],
        classifier_bytes: &[u8],
    ) -> Result<Self, SentimentError> {
        let vectorizer = CountVectorizer::from_json_slice(vectorizer_bytes)?;
        let classifier = NaiveBayesClassifier::from_json_slice(classifier_bytes)?;

        if TextVectorizer::width(&vectorizer) != BinaryClassifier::width(&classifier) {
            return Err(SentimentError::Shape {
                artifact: "classifier",
                reason: format!(
                    "model expects {} features but the vectorizer produces {}",
                    BinaryClassifier::width(&classifier),
                    TextVectorizer::width(&vectorizer)
                ),
            });
        }

        Ok(Self {
            vectorizer,
            classifier,
            fingerprint: ArtifactFingerprint {
                vectorizer_sha256: sha256_hex(vectorizer_bytes),
                classifier_sha256: sha256_hex(classifier_bytes),
            },
        })
    }

    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        TextVectorizer::width(&self.vectorizer)
    }

    #[must_use]
    pub fn fingerprint(&self) -> &ArtifactFingerprint {
        &self.fingerprint
    }

    /// Split the store into its two capabilities.
    #[must_use]
    pub fn into_parts(self) -> (CountVectorizer, NaiveBayesClassifier) {
        (self.vectorizer, self.classifier)
    }
}

fn read_artifact(path: &Path) -> Result<Vec<u8>, SentimentError> {
    std::fs::read(path).map_err(|source| SentimentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}


#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::test_fixtures::{CLASSIFIER_JSON, VECTORIZER_JSON};
    use super::*;

    fn temp_artifact(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("revsent-{}.json", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).expect("create temp artifact");
        file.write_all(contents.as_bytes())
            .expect("write temp artifact");
        path
    }

    #[test]
    fn load_reads_both_artifacts_from_disk() {
        let paths = ArtifactPaths {
            vectorizer: temp_artifact(VECTORIZER_JSON),
            classifier: temp_artifact(CLASSIFIER_JSON),
        };
        let store = ArtifactStore::load(&paths).expect("load store");
        assert_eq!(store.vocabulary_size(), 6);
        assert_eq!(store.fingerprint().vectorizer_sha256.len(), 64);
        assert_ne!(
            store.fingerprint().vectorizer_sha256,
            store.fingerprint().classifier_sha256
        );

        let _ = std::fs::remove_file(&paths.vectorizer);
        let _ = std::fs::remove_file(&paths.classifier);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let paths = ArtifactPaths {
            vectorizer: temp_artifact(VECTORIZER_JSON),
            classifier: std::env::temp_dir().join("revsent-does-not-exist.json"),
        };
        let err = ArtifactStore::load(&paths).unwrap_err();
        assert!(
            matches!(err, SentimentError::Io { ref path, .. } if path == &paths.classifier),
            "expected Io error for classifier path, got: {err:?}"
        );
        let _ = std::fs::remove_file(&paths.vectorizer);
    }

    #[test]
    fn load_fails_for_corrupt_file() {
        let paths = ArtifactPaths {
            vectorizer: temp_artifact("\u{0}\u{1}pickle"),
            classifier: temp_artifact(CLASSIFIER_JSON),
        };
        let err = ArtifactStore::load(&paths).unwrap_err();
        assert!(matches!(err, SentimentError::Json { .. }), "got: {err:?}");
        let _ = std::fs::remove_file(&paths.vectorizer);
        let _ = std::fs::remove_file(&paths.classifier);
    }

    #[test]
    fn from_slices_rejects_width_mismatch() {
        let narrow = r#"{
            "format": "count_vectorizer", "version": 1,
            "vocabulary": {"loved": 0}
        }"#;
        let err =
            ArtifactStore::from_slices(narrow.as_bytes(), CLASSIFIER_JSON.as_bytes()).unwrap_err();
        assert!(matches!(err, SentimentError::Shape { .. }), "got: {err:?}");
    }

    #[test]
    fn fingerprint_is_stable_for_identical_bytes() {
        let a = ArtifactStore::from_slices(VECTORIZER_JSON.as_bytes(), CLASSIFIER_JSON.as_bytes())
            .expect("store a");
        let b = ArtifactStore::from_slices(VECTORIZER_JSON.as_bytes(), CLASSIFIER_JSON.as_bytes())
            .expect("store b");
        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}
