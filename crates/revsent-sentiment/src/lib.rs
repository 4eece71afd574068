//! Review sentiment prediction.
//!
//! Loads a pre-fitted bag-of-words vectorizer and a multinomial naive Bayes
//! classifier, scores the review against a rule-based lexicon, and fuses the
//! two signals into a single positive/negative label with an emoji.

pub mod artifacts;
pub mod error;
pub mod fusion;
pub mod scorer;
pub mod types;

pub use artifacts::{
    ArtifactFingerprint, ArtifactPaths, ArtifactStore, BinaryClassifier, CountVectorizer,
    NaiveBayesClassifier, TextVectorizer,
};
pub use error::SentimentError;
pub use fusion::{fuse, SentimentService, POLARITY_VETO_THRESHOLD};
pub use scorer::{lexicon_score, Lexicon, PolarityScorer};
pub use types::{
    FeatureVector, Prediction, Vote, NEGATIVE_EMOJI, NEGATIVE_LABEL, POSITIVE_EMOJI,
    POSITIVE_LABEL,
};
