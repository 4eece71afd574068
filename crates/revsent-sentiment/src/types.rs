/// Label shown when the fused signals agree the review is positive.
pub const POSITIVE_LABEL: &str = "This is most probably a positive review!";
/// Label shown for every other outcome.
pub const NEGATIVE_LABEL: &str = "This might most likely be a negative review...";
/// Grinning face (U+1F600).
pub const POSITIVE_EMOJI: &str = "\u{1F600}";
/// Face without mouth (U+1F636).
pub const NEGATIVE_EMOJI: &str = "\u{1F636}";

/// Fixed-width bag-of-words counts produced by a vectorizer.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    counts: Vec<f64>,
}

impl FeatureVector {
    /// All-zero vector of the given width.
    #[must_use]
    pub fn zeros(width: usize) -> Self {
        Self {
            counts: vec![0.0; width],
        }
    }

    #[must_use]
    pub fn from_counts(counts: Vec<f64>) -> Self {
        Self { counts }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    /// Number of non-zero columns.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.counts.iter().filter(|c| **c != 0.0).count()
    }

    pub(crate) fn increment(&mut self, column: usize) {
        if let Some(slot) = self.counts.get_mut(column) {
            *slot += 1.0;
        }
    }
}

/// Binary classifier output. `1` in the serialized model is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Negative,
    Positive,
}

impl Vote {
    /// Map a serialized class label onto a vote. Only `0` and `1` are valid.
    #[must_use]
    pub fn from_label(label: i64) -> Option<Self> {
        match label {
            0 => Some(Vote::Negative),
            1 => Some(Vote::Positive),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_label(self) -> u8 {
        match self {
            Vote::Negative => 0,
            Vote::Positive => 1,
        }
    }
}

/// Result of one fused prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Outcome of the fusion rule; `label` and `emoji` are derived from it.
    pub positive: bool,
    pub label: &'static str,
    pub emoji: &'static str,
    /// Classifier vote that fed the decision (diagnostic only).
    pub vote: Vote,
    /// Lexicon polarity that fed the decision (diagnostic only).
    pub polarity: f32,
}

impl Prediction {
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.positive
    }
}
