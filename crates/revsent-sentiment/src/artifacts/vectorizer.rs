//! Bag-of-words count vectorizer loaded from a pre-fitted vocabulary.

use std::collections::HashMap;

use regex::Regex;
use serde::Deserialize;

use crate::error::SentimentError;
use crate::types::FeatureVector;

use super::TextVectorizer;

const ARTIFACT: &str = "vectorizer";
const FORMAT: &str = "count_vectorizer";
const VERSION: u32 = 1;

/// Default count-vectorizer token pattern: two or more word characters.
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

#[derive(Debug, Deserialize)]
struct CountVectorizerFile {
    format: String,
    version: u32,
    #[serde(default = "default_lowercase")]
    lowercase: bool,
    vocabulary: HashMap<String, usize>,
}

fn default_lowercase() -> bool {
    true
}

/// Maps text onto per-term counts over a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    vocabulary: HashMap<String, usize>,
    lowercase: bool,
    token_pattern: Regex,
}

impl CountVectorizer {
    /// Parse a serialized vectorizer.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Json`] for malformed JSON,
    /// [`SentimentError::UnsupportedFormat`] for a foreign format or version, and
    /// [`SentimentError::Shape`] if the vocabulary columns are not exactly `0..len`.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, SentimentError> {
        let file: CountVectorizerFile =
            serde_json::from_slice(bytes).map_err(|source| SentimentError::Json {
                artifact: ARTIFACT,
                source,
            })?;

        if file.format != FORMAT || file.version != VERSION {
            return Err(SentimentError::UnsupportedFormat {
                artifact: ARTIFACT,
                expected: FORMAT,
                expected_version: VERSION,
                found: file.format,
                found_version: file.version,
            });
        }

        validate_columns(&file.vocabulary)?;

        Ok(Self {
            vocabulary: file.vocabulary,
            lowercase: file.lowercase,
            token_pattern: Regex::new(TOKEN_PATTERN).expect("valid token regex"),
        })
    }

    /// Build a vectorizer directly from a vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Shape`] if the columns are not exactly `0..len`.
    pub fn from_vocabulary(
        vocabulary: HashMap<String, usize>,
        lowercase: bool,
    ) -> Result<Self, SentimentError> {
        validate_columns(&vocabulary)?;
        Ok(Self {
            vocabulary,
            lowercase,
            token_pattern: Regex::new(TOKEN_PATTERN).expect("valid token regex"),
        })
    }

    fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.token_pattern.find_iter(text).map(|m| m.as_str())
    }
}

fn validate_columns(vocabulary: &HashMap<String, usize>) -> Result<(), SentimentError> {
    let width = vocabulary.len();
    let mut seen = vec![false; width];
    for (term, &column) in vocabulary {
        match seen.get_mut(column) {
            Some(slot) if !*slot => *slot = true,
            Some(_) => {
                return Err(SentimentError::Shape {
                    artifact: ARTIFACT,
                    reason: format!("column {column} assigned to more than one term ({term:?})"),
                });
            }
            None => {
                return Err(SentimentError::Shape {
                    artifact: ARTIFACT,
                    reason: format!(
                        "column {column} for {term:?} is outside vocabulary width {width}"
                    ),
                });
            }
        }
    }
    Ok(())
}

impl TextVectorizer for CountVectorizer {
    fn vectorize(&self, text: &str) -> FeatureVector {
        let mut features = FeatureVector::zeros(self.vocabulary.len());
        let lowered;
        let source = if self.lowercase {
            lowered = text.to_lowercase();
            lowered.as_str()
        } else {
            text
        };
        for token in self.tokens(source) {
            if let Some(&column) = self.vocabulary.get(token) {
                features.increment(column);
            }
        }
        features
    }

    fn width(&self) -> usize {
        self.vocabulary.len()
    }
}
