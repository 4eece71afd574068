//! Lexicon polarity scorer for free-text reviews.

/// Review vocabulary weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("brilliant", 0.9),
    ("charming", 0.5),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("enjoyable", 0.5),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("fine", 0.4),
    ("fun", 0.3),
    ("funny", 0.25),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("like", 0.2),
    ("liked", 0.3),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("masterpiece", 0.9),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleasant", 0.7),
    ("recommend", 0.4),
    ("superb", 1.0),
    ("well", 0.3),
    ("wonderful", 1.0),
    ("worth", 0.3),
    // Negative signals
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -1.0),
    ("broken", -0.4),
    ("disappointing", -0.6),
    ("disappointed", -0.75),
    ("dull", -0.3),
    ("hate", -0.8),
    ("hated", -0.9),
    ("horrible", -1.0),
    ("mediocre", -0.5),
    ("pathetic", -1.0),
    ("poor", -0.4),
    ("sad", -0.5),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("ugly", -0.7),
    ("useless", -0.5),
    ("waste", -0.2),
    ("wasted", -0.2),
    ("worse", -0.4),
    ("worst", -1.0),
];

/// Words that flip and dampen the next scored word.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "nor", "isn't", "wasn't", "aren't", "weren't", "don't", "doesn't",
    "didn't", "can't", "couldn't", "won't", "wouldn't", "hardly",
];

/// Words that scale the next scored word.
const INTENSIFIERS: &[(&str, f32)] = &[
    ("absolutely", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.3),
    ("really", 1.2),
    ("so", 1.2),
    ("totally", 1.3),
    ("very", 1.3),
    ("quite", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.5),
];

/// Multiplier applied to a word preceded by a negator.
const NEGATION_FACTOR: f32 = -0.5;

/// Score a text string using the review lexicon.
///
/// Splits text into lowercase words and averages the weights of matching
/// words. A negator or intensifier modifies only the word right after it.
/// The result is clamped to `[-1.0, 1.0]`; `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut total = 0.0_f32;
    let mut hits = 0_usize;
    let mut negated = false;
    let mut intensity = 1.0_f32;

    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if w.is_empty() {
            continue;
        }
        if NEGATORS.contains(&w.as_str()) {
            negated = true;
            continue;
        }
        if let Some(factor) = lookup(INTENSIFIERS, &w) {
            intensity *= factor;
            continue;
        }

        if let Some(weight) = lookup(LEXICON, &w) {
            let mut contribution = (weight * intensity).clamp(-1.0, 1.0);
            if negated {
                contribution *= NEGATION_FACTOR;
            }
            total += contribution;
            hits += 1;
        }
        negated = false;
        intensity = 1.0;
    }

    if hits == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = hits as f32;
    (total / denom).clamp(-1.0, 1.0)
}

fn lookup(table: &[(&str, f32)], word: &str) -> Option<f32> {
    table
        .iter()
        .find(|&&(entry, _)| entry == word)
        .map(|&(_, weight)| weight)
}

/// Source of a rule-based polarity in `[-1.0, 1.0]`.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f32;
}

/// [`PolarityScorer`] backed by [`lexicon_score`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Lexicon;

impl PolarityScorer for Lexicon {
    fn polarity(&self, text: &str) -> f32 {
        lexicon_score(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(lexicon_score(""), 0.0);
    }

    #[test]
    fn whitespace_only_returns_zero() {
        assert_eq!(lexicon_score("   "), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(lexicon_score("the quick brown fox"), 0.0);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        let score = lexicon_score("this movie is great");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn negative_keyword_returns_negative() {
        let score = lexicon_score("the plot was boring");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn loved_and_wonderful_is_clearly_positive() {
        let score = lexicon_score("I absolutely loved this, it was wonderful");
        assert!(score > 0.5, "expected strong positive score, got {score}");
    }

    #[test]
    fn terrible_waste_of_time_is_below_veto_threshold() {
        let score = lexicon_score("This was terrible and a complete waste of time");
        assert!(score <= -0.3, "expected score at or below -0.3, got {score}");
    }

    #[test]
    fn mixed_text_averages_weights() {
        // good (+0.7) + bad (-0.7) = 0.0 over two hits
        let score = lexicon_score("good acting but bad writing");
        assert!(score.abs() < 1e-6, "expected neutral score, got {score}");
    }

    #[test]
    fn negator_flips_and_dampens_next_word() {
        let score = lexicon_score("not good");
        assert!(
            (score - (-0.35)).abs() < 1e-6,
            "expected -0.35 for 'not good', got {score}"
        );
    }

    #[test]
    fn negator_only_affects_following_word() {
        let plain = lexicon_score("good");
        let score = lexicon_score("not here, good");
        assert!((score - plain).abs() < 1e-6, "expected {plain}, got {score}");
    }

    #[test]
    fn intensifier_scales_next_word_and_clamps() {
        assert!(lexicon_score("very good") > lexicon_score("good"));
        assert_eq!(lexicon_score("extremely wonderful"), 1.0);
    }

    #[test]
    fn score_stays_within_bounds() {
        for text in [
            "awful horrible worst terrible pathetic",
            "very very very excellent",
            "not not terrible",
        ] {
            let score = lexicon_score(text);
            assert!((-1.0..=1.0).contains(&score), "{text:?} scored {score}");
        }
    }

    #[test]
    fn punctuation_stripped_from_words() {
        let score = lexicon_score("great!");
        assert!(
            score > 0.0,
            "expected positive score for 'great!', got {score}"
        );
    }

    #[test]
    fn lexicon_scorer_matches_free_function() {
        let text = "a pleasant surprise";
        assert_eq!(Lexicon.polarity(text), lexicon_score(text));
    }
}
