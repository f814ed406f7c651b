//! Remove-from-cart command.

use anyhow::Result;

use super::RemoveArgs;
use crate::context::Context;

/// Run the remove command.
pub async fn run(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let (store, notices) = ctx.store()?;

    store.remove_product(args.product_id).await;

    super::report(
        &store,
        notices,
        ctx,
        &format!("Removed product {}", args.product_id),
    );
    Ok(())
}
