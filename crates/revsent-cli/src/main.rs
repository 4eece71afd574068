mod predict;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "revsent-cli")]
#[command(about = "Score reviews against the trained sentiment artifacts")]
struct Cli {
    /// Classifier artifact (overrides `REVSENT_MODEL_PATH`)
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Vectorizer artifact (overrides `REVSENT_VECTORIZER_PATH`)
    #[arg(long, global = true)]
    vectorizer: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Predict the sentiment of one review
    Predict {
        /// Review text; may be empty
        review: String,

        /// Also print the classifier vote and lexicon polarity
        #[arg(long, short)]
        verbose: bool,
    },
    /// Print vocabulary size and artifact fingerprints
    Inspect,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    let config = revsent_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let paths = revsent_sentiment::ArtifactPaths {
        vectorizer: cli.vectorizer.unwrap_or(config.vectorizer_path),
        classifier: cli.model.unwrap_or(config.model_path),
    };

    match cli.command {
        Commands::Predict { review, verbose } => predict::run_predict(&paths, &review, verbose),
        Commands::Inspect => predict::run_inspect(&paths),
    }
}

#[cfg(test)]
mod tests;
