//! Terminal frontend for Ghostwriter Nexus.
//!
//! A line-oriented command loop over one game session: read the brief,
//! assemble a reply from fragments or free text, send it, survive the
//! reaction. By default drafts are judged by the Gemini backend; with
//! `--offline` a deterministic local oracle stands in.

mod repl;

use clap::Parser;
use miette::{IntoDiagnostic, Result};

use gn_oracle::client::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use gn_oracle::{GeminiClient, OfflineOracle, ReactionOracle};

#[derive(Parser)]
#[command(
    name = "gn",
    about = "Ghostwriter Nexus — ghost-write replies, survive the fallout",
    version
)]
struct Args {
    /// Judge drafts with the deterministic offline oracle (no network)
    #[arg(long)]
    offline: bool,

    /// RNG seed for the daily trend
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Gemini API base URL
    #[arg(long, default_value = DEFAULT_GEMINI_BASE_URL)]
    base_url: String,

    /// Gemini model name
    #[arg(long, default_value = DEFAULT_GEMINI_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let oracle: Box<dyn ReactionOracle> = if args.offline {
        Box::new(OfflineOracle::new())
    } else {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        Box::new(GeminiClient::new(&args.base_url, &args.model, &api_key))
    };

    repl::Repl::new(oracle, args.seed).run().await.into_diagnostic()
}
