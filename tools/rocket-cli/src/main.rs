//! Rocket CLI - Command line client for the RocketShoes cart.
//!
//! Commands:
//! - `rocket cart` - Show the cart
//! - `rocket add` - Add one unit of a product
//! - `rocket remove` - Remove a product from the cart
//! - `rocket update` - Set the amount of a product
//! - `rocket config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AddArgs, ConfigArgs, RemoveArgs, UpdateArgs};

/// Rocket CLI - Manage your RocketShoes cart from the terminal
#[derive(Parser)]
#[command(name = "rocket")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart
    Cart,

    /// Add one unit of a product
    Add(AddArgs),

    /// Remove a product from the cart
    Remove(RemoveArgs),

    /// Set the amount of a product
    Update(UpdateArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Cart => commands::cart::run(&ctx).await,
        Commands::Add(args) => commands::add::run(args, &ctx).await,
        Commands::Remove(args) => commands::remove::run(args, &ctx).await,
        Commands::Update(args) => commands::update::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("rocket_store={level},rocket_data={level},rocket_cache={level}").into()
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
