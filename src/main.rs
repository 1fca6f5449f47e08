mod cli;

use std::fs;
use std::sync::Arc;

use clap::Parser;
use cli::{Cli, Commands};
use feedlink::config::Config;
use feedlink::dispatch::{Dispatch, LinkRouter, TracingHandler};
use feedlink::model::NewsItem;
use feedlink::transform::{LinkTransformer, TransformerRegistry};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();

    // `logging.filter` replaces the startup filter once config is loaded,
    // unless RUST_LOG is set.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let filter_from_env = env_filter.is_some();
    let (filter, filter_handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER)));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    if !filter_from_env {
        filter_handle.reload(EnvFilter::try_new(&config.logging.filter)?)?;
    }

    let registry = config.transformer_registry();

    match cli.command {
        Commands::Transform(args) => {
            let transformer = select(&registry, args.transformer.as_deref())?;
            println!("{}", transformer.to_transformed_url(args.link.as_deref()));
        }
        Commands::TransformItem(args) => {
            let transformer = select(&registry, args.transformer.as_deref())?;
            let item: NewsItem = serde_json::from_str(&fs::read_to_string(&args.item)?)?;
            println!("{}", transformer.transform_item(&item));
        }
        Commands::List => {
            for transformer in registry.iter() {
                println!(
                    "{}\t{}\t{}",
                    transformer.id(),
                    transformer.name(),
                    transformer.url_template()
                );
            }
        }
        Commands::Dispatch(args) => {
            let mut router = LinkRouter::new();
            for id in args.handlers {
                router.register(id, Arc::new(TracingHandler));
            }

            match router.dispatch(&args.link) {
                Dispatch::NotReserved => println!("navigate\t{}", args.link),
                Dispatch::Handled { id } => println!("handled\t{id}"),
                Dispatch::Unhandled { id } => println!("suppressed\t{id}"),
            }
        }
    }

    Ok(())
}

fn select<'a>(
    registry: &'a TransformerRegistry,
    id: Option<&str>,
) -> Result<&'a LinkTransformer, AnyError> {
    let transformer = match id {
        Some(id) => registry.get(id)?,
        None => registry.default_transformer()?,
    };
    Ok(transformer)
}
