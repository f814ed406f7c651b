//! Cart display command.

use anyhow::Result;

use crate::context::Context;

/// Run the cart command.
pub async fn run(ctx: &Context) -> Result<()> {
    let (store, _notices) = ctx.store()?;
    ctx.output.cart(&store.cart(), &[]);
    Ok(())
}
