use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Evaluate one answer against a target sentence.
    Evaluate(EvaluateArgs),
    /// Print the effective configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Listen address, overriding `server.bind`
    #[arg(long)]
    pub bind: Option<String>,

    /// Worker threads, overriding `server.workers`
    #[arg(long)]
    pub workers: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct EvaluateArgs {
    /// The learner's answer
    #[arg(long)]
    pub user: String,

    /// Reference sentence; mutually exclusive with --card
    #[arg(long, conflicts_with = "card", required_unless_present = "card")]
    pub target: Option<String>,

    /// Take the target from this flashcard of the deck
    #[arg(long)]
    pub card: Option<i64>,
}
