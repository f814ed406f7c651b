//! Amount update command.

use anyhow::Result;
use rocket_store::UpdateProductAmount;

use super::UpdateArgs;
use crate::context::Context;

/// Run the update command.
pub async fn run(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let (store, notices) = ctx.store()?;

    let spinner = ctx
        .output
        .spinner(&format!("Checking stock for product {}", args.product_id));
    store
        .update_product_amount(UpdateProductAmount::new(args.product_id, args.amount))
        .await;
    spinner.finish_and_clear();

    super::report(
        &store,
        notices,
        ctx,
        &format!("Set product {} to {}", args.product_id, args.amount),
    );
    Ok(())
}
