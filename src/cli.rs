use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "feedlink")]
#[command(about = "Feed reader link transformation and dispatch", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to $FEEDLINK_CONFIG or config/feedlink.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite a link through a configured transformer
    Transform(TransformArgs),
    /// Rewrite the canonical link of a news item read from a JSON file
    TransformItem(TransformItemArgs),
    /// List configured transformers
    List,
    /// Route a link as a browsing surface would
    Dispatch(DispatchArgs),
}

#[derive(clap::Args, Debug)]
pub struct TransformArgs {
    /// Transformer id (falls back to reader.default_transformer)
    #[arg(long, short)]
    pub transformer: Option<String>,

    /// Link to transform
    pub link: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct TransformItemArgs {
    /// Transformer id (falls back to reader.default_transformer)
    #[arg(long, short)]
    pub transformer: Option<String>,

    /// Path to a news item JSON document
    pub item: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct DispatchArgs {
    /// Handler ids to register with a logging handler
    #[arg(long = "handler")]
    pub handlers: Vec<String>,

    /// Navigation target
    pub link: String,
}
