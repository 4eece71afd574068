use revsent_sentiment::{fuse, Vote, NEGATIVE_LABEL, POSITIVE_EMOJI, POSITIVE_LABEL};

use super::*;

#[test]
fn parses_predict_command() {
    let cli = Cli::try_parse_from(["revsent-cli", "predict", "great movie"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Predict { ref review, verbose: false } if review == "great movie"
    ));
}

#[test]
fn parses_predict_with_empty_review_and_verbose() {
    let cli = Cli::try_parse_from(["revsent-cli", "predict", "", "--verbose"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Predict { ref review, verbose: true } if review.is_empty()
    ));
}

#[test]
fn parses_inspect_with_artifact_overrides() {
    let cli = Cli::try_parse_from([
        "revsent-cli",
        "inspect",
        "--model",
        "/tmp/nb.json",
        "--vectorizer",
        "/tmp/vocab.json",
    ])
    .expect("expected valid cli args");

    assert!(matches!(cli.command, Commands::Inspect));
    assert_eq!(cli.model, Some(PathBuf::from("/tmp/nb.json")));
    assert_eq!(cli.vectorizer, Some(PathBuf::from("/tmp/vocab.json")));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["revsent-cli"]).is_err());
}

#[test]
fn predict_requires_review_argument() {
    assert!(Cli::try_parse_from(["revsent-cli", "predict"]).is_err());
}

#[test]
fn format_prediction_prints_label_and_emoji() {
    let line = predict::format_prediction(&fuse(Vote::Positive, 0.5), false);
    assert_eq!(line, format!("{POSITIVE_LABEL} {POSITIVE_EMOJI}"));
}

#[test]
fn format_prediction_verbose_includes_vote_and_polarity() {
    let out = predict::format_prediction(&fuse(Vote::Positive, -0.5), true);
    assert!(out.starts_with(NEGATIVE_LABEL));
    assert!(out.contains("vote: 1"));
    assert!(out.contains("polarity: -0.500"));
}
