//! CLI command implementations.

pub mod add;
pub mod cart;
pub mod config;
pub mod remove;
pub mod update;

use clap::{Args, Subcommand};
use rocket_commerce::cart::Notice;
use rocket_commerce::ProductId;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::context::{Context, Store};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Catalog id of the product.
    pub product_id: ProductId,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Catalog id of the product.
    pub product_id: ProductId,
}

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Catalog id of the product.
    pub product_id: ProductId,

    /// New amount.
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Overwrite an existing config without asking.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Print what a mutation left behind: its notices, then the cart.
fn report(store: &Store, mut notices: UnboundedReceiver<Notice>, ctx: &Context, done: &str) {
    let mut raised = Vec::new();
    while let Ok(notice) = notices.try_recv() {
        raised.push(notice);
    }

    if raised.is_empty() {
        ctx.output.success(done);
    }
    for notice in &raised {
        ctx.output.notice(*notice);
    }

    ctx.output.cart(&store.cart(), &raised);
}
