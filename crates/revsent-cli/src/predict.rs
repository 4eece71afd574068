//! One-shot command handlers. Each loads the artifacts, runs, and exits.

use revsent_sentiment::{ArtifactPaths, ArtifactStore, Prediction, SentimentService};

/// Load the artifacts and print the prediction for `review`.
///
/// # Errors
///
/// Returns an error if the artifacts cannot be loaded or inference fails.
pub(crate) fn run_predict(paths: &ArtifactPaths, review: &str, verbose: bool) -> anyhow::Result<()> {
    let service = SentimentService::from_store(ArtifactStore::load(paths)?);
    let prediction = service.predict(review)?;
    println!("{}", format_prediction(&prediction, verbose));
    Ok(())
}

/// Load the artifacts and print what was loaded.
///
/// # Errors
///
/// Returns an error if the artifacts cannot be loaded.
pub(crate) fn run_inspect(paths: &ArtifactPaths) -> anyhow::Result<()> {
    let store = ArtifactStore::load(paths)?;
    let fingerprint = store.fingerprint();
    println!("vectorizer: {}", paths.vectorizer.display());
    println!("  sha256: {}", fingerprint.vectorizer_sha256);
    println!("classifier: {}", paths.classifier.display());
    println!("  sha256: {}", fingerprint.classifier_sha256);
    println!("vocabulary size: {}", store.vocabulary_size());
    Ok(())
}

pub(crate) fn format_prediction(prediction: &Prediction, verbose: bool) -> String {
    let mut out = format!("{} {}", prediction.label, prediction.emoji);
    if verbose {
        out.push_str(&format!(
            "\nvote: {}\npolarity: {:.3}",
            prediction.vote.as_label(),
            prediction.polarity
        ));
    }
    out
}
