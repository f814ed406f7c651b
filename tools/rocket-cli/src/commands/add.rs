//! Add-to-cart command.

use anyhow::Result;

use super::AddArgs;
use crate::context::Context;

/// Run the add command.
pub async fn run(args: AddArgs, ctx: &Context) -> Result<()> {
    let (store, notices) = ctx.store()?;

    let spinner = ctx
        .output
        .spinner(&format!("Checking stock for product {}", args.product_id));
    store.add_product(args.product_id).await;
    spinner.finish_and_clear();

    super::report(
        &store,
        notices,
        ctx,
        &format!("Added product {}", args.product_id),
    );
    Ok(())
}
