use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stable_registry::config::RegistryConfig;
use stable_registry::persistence::{DisabledStore, FileStore, StateStore};
use stable_registry::random::ChaChaSource;
use stable_registry::render::{render_horse_details, render_inventory};
use stable_registry::stable::Registry;

#[derive(Parser, Debug)]
#[command(name = "stable-registry")]
#[command(about = "Mint randomized racehorses into a small rolling stable")]
struct Args {
    /// Directory the stable is saved in (default: platform data dir)
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Keep the stable in memory only; nothing is read or written
    #[arg(long)]
    no_persist: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mint horses and show the newest
    Mint {
        /// How many horses to mint
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
    /// Show one horse from the inventory (0 = newest)
    Show {
        #[arg(default_value = "0")]
        index: usize,
    },
    /// List the inventory
    List,
}

/// `RUST_LOG` directives when set and valid, otherwise `warn`.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RegistryConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => RegistryConfig::default(),
    };
    if let Some(dir) = args.state_dir {
        config.state_dir = Some(dir);
    }

    let mut rng = match args.seed {
        Some(seed) => {
            tracing::info!("Using seed {}", seed);
            ChaChaSource::from_seed(seed)
        }
        None => ChaChaSource::from_entropy(),
    };

    let store: Box<dyn StateStore> = if args.no_persist {
        Box::new(DisabledStore)
    } else {
        Box::new(FileStore::new(config.resolved_state_dir()))
    };

    let mut registry = Registry::open(&config, store, &mut rng).context("invalid configuration")?;

    match args.command {
        Command::Mint { count } => {
            if count == 0 {
                bail!("--count must be at least 1");
            }
            for _ in 0..count {
                registry.mint(&mut rng);
            }
            print!("{}", render_horse_details(registry.active()));
            println!();
            print!("{}", render_inventory(registry.state().horses(), registry.state().capacity(), Some(0)));
        }
        Command::Show { index } => {
            registry.ensure_seeded(&mut rng);
            if registry.select(index).is_none() {
                bail!("no horse at index {} (stable holds {})", index, registry.state().len());
            }
            print!("{}", render_horse_details(registry.active()));
        }
        Command::List => {
            registry.ensure_seeded(&mut rng);
            print!("{}", render_inventory(registry.state().horses(), registry.state().capacity(), Some(0)));
        }
    }

    Ok(())
}
