//! Multinomial naive Bayes classifier loaded from pre-computed log probabilities.

use serde::Deserialize;

use crate::error::SentimentError;
use crate::types::{FeatureVector, Vote};

use super::BinaryClassifier;

const ARTIFACT: &str = "classifier";
const FORMAT: &str = "multinomial_nb";
const VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct NaiveBayesFile {
    format: String,
    version: u32,
    classes: Vec<i64>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
}

/// Two-class multinomial naive Bayes.
///
/// The joint log-likelihood of class `c` is
/// `class_log_prior[c] + sum_j x_j * feature_log_prob[c][j]`.
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    classes: [Vote; 2],
    class_log_prior: [f64; 2],
    feature_log_prob: [Vec<f64>; 2],
}

impl NaiveBayesClassifier {
    /// Parse a serialized classifier.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Json`] for malformed JSON,
    /// [`SentimentError::UnsupportedFormat`] for a foreign format or version, and
    /// [`SentimentError::Shape`] if the classes are not `{0, 1}` or the
    /// probability tables disagree on shape.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, SentimentError> {
        let file: NaiveBayesFile =
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

        let classes = parse_classes(&file.classes)?;

        let class_log_prior: [f64; 2] = file
            .class_log_prior
            .try_into()
            .map_err(|v: Vec<f64>| shape(format!("expected 2 class priors, found {}", v.len())))?;

        let feature_log_prob: [Vec<f64>; 2] =
            file.feature_log_prob.try_into().map_err(|v: Vec<Vec<f64>>| {
                shape(format!("expected 2 feature rows, found {}", v.len()))
            })?;

        if feature_log_prob[0].len() != feature_log_prob[1].len() {
            return Err(shape(format!(
                "feature rows differ in width: {} vs {}",
                feature_log_prob[0].len(),
                feature_log_prob[1].len()
            )));
        }

        let all_finite = class_log_prior
            .iter()
            .chain(feature_log_prob.iter().flatten())
            .all(|p| p.is_finite());
        if !all_finite {
            return Err(shape("log probabilities must be finite".to_string()));
        }

        Ok(Self {
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Joint log-likelihood per class, in the serialized class order.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Inference`] if the feature width does not
    /// match the model.
    pub fn joint_log_likelihood(
        &self,
        features: &FeatureVector,
    ) -> Result<[f64; 2], SentimentError> {
        if features.width() != self.width() {
            return Err(SentimentError::Inference(format!(
                "feature vector has width {}, model expects {}",
                features.width(),
                self.width()
            )));
        }

        let mut jll = self.class_log_prior;
        for (score, row) in jll.iter_mut().zip(&self.feature_log_prob) {
            *score += features
                .counts()
                .iter()
                .zip(row)
                .map(|(count, log_prob)| count * log_prob)
                .sum::<f64>();
        }
        Ok(jll)
    }
}

fn parse_classes(labels: &[i64]) -> Result<[Vote; 2], SentimentError> {
    let votes: Vec<Vote> = labels
        .iter()
        .map(|&label| {
            Vote::from_label(label)
                .ok_or_else(|| shape(format!("class label {label} is not 0 or 1")))
        })
        .collect::<Result<_, _>>()?;

    match votes.as_slice() {
        [a, b] if a != b => Ok([*a, *b]),
        _ => Err(shape(format!(
            "classes must be exactly [0, 1] in some order, found {labels:?}"
        ))),
    }
}

fn shape(reason: String) -> SentimentError {
    SentimentError::Shape {
        artifact: ARTIFACT,
        reason,
    }
}

impl BinaryClassifier for NaiveBayesClassifier {
    fn classify(&self, features: &FeatureVector) -> Result<Vote, SentimentError> {
        let jll = self.joint_log_likelihood(features)?;
        // First index wins ties.
        let best = usize::from(jll[1] > jll[0]);
        Ok(self.classes[best])
    }

    fn width(&self) -> usize {
        self.feature_log_prob[0].len()
    }
}
