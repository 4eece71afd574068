//! Fuses the classifier vote with the lexicon polarity into one label.

use std::sync::Arc;

use crate::artifacts::{ArtifactStore, BinaryClassifier, TextVectorizer};
use crate::error::SentimentError;
use crate::scorer::{Lexicon, PolarityScorer};
use crate::types::{
    Prediction, Vote, NEGATIVE_EMOJI, NEGATIVE_LABEL, POSITIVE_EMOJI, POSITIVE_LABEL,
};

/// A positive vote survives only while polarity stays strictly above this.
pub const POLARITY_VETO_THRESHOLD: f32 = -0.3;

/// Decide the final label from the two signals.
///
/// A positive vote is vetoed by polarity at or below
/// [`POLARITY_VETO_THRESHOLD`]. A negative vote is never overridden.
#[must_use]
pub fn fuse(vote: Vote, polarity: f32) -> Prediction {
    let is_positive = vote == Vote::Positive && polarity > POLARITY_VETO_THRESHOLD;
    let (label, emoji) = if is_positive {
        (POSITIVE_LABEL, POSITIVE_EMOJI)
    } else {
        (NEGATIVE_LABEL, NEGATIVE_EMOJI)
    };
    Prediction {
        positive: is_positive,
        label,
        emoji,
        vote,
        polarity,
    }
}

/// Immutable prediction service shared by every request.
#[derive(Clone)]
pub struct SentimentService {
    vectorizer: Arc<dyn TextVectorizer>,
    classifier: Arc<dyn BinaryClassifier>,
    scorer: Arc<dyn PolarityScorer>,
}

impl std::fmt::Debug for SentimentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentService")
            .field("vocabulary_size", &self.vectorizer.width())
            .finish_non_exhaustive()
    }
}

impl SentimentService {
    #[must_use]
    pub fn new(
        vectorizer: Arc<dyn TextVectorizer>,
        classifier: Arc<dyn BinaryClassifier>,
        scorer: Arc<dyn PolarityScorer>,
    ) -> Self {
        Self {
            vectorizer,
            classifier,
            scorer,
        }
    }

    /// Service over loaded artifacts with the built-in lexicon scorer.
    #[must_use]
    pub fn from_store(store: ArtifactStore) -> Self {
        let (vectorizer, classifier) = store.into_parts();
        Self::new(Arc::new(vectorizer), Arc::new(classifier), Arc::new(Lexicon))
    }

    /// Predict the label and emoji for one review.
    ///
    /// Any text is accepted, including the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Inference`] if the classifier rejects the
    /// feature vector. There is no fallback label.
    pub fn predict(&self, review: &str) -> Result<Prediction, SentimentError> {
        let polarity = self.scorer.polarity(review);
        let features = self.vectorizer.vectorize(review);
        let vote = self.classifier.classify(&features)?;

        tracing::debug!(
            vote = vote.as_label(),
            polarity,
            nnz = features.nnz(),
            "classifier vote"
        );

        Ok(fuse(vote, polarity))
    }
}
