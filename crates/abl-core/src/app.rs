//! Startup wiring: fetch the bootstrap document, then run the creation step.

use anyhow::Result;

use crate::config::AblConfig;
use crate::context::AppContext;
use crate::loader::Loader;

/// Run the startup sequence: fetch the bootstrap document into `ctx`, then
/// run the creation step.
pub async fn init(cfg: &AblConfig, ctx: &AppContext) -> Result<()> {
    let loader = Loader::from_config(cfg)?;
    loader.load(ctx, create).await
}

/// Creation step, run once the bootstrap document is in the context.
/// Construction of application objects hangs off this seam; today it only
/// records that startup finished.
fn create() {
    tracing::debug!("creation step complete");
}
