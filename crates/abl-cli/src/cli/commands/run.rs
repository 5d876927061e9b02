//! `abl run` – run the startup flow against the configured base URL.

use anyhow::Result;

use abl_core::app;
use abl_core::config::AblConfig;
use abl_core::context::AppContext;

pub async fn run_startup(cfg: &AblConfig) -> Result<()> {
    let ctx = AppContext::new();
    app::init(cfg, &ctx).await?;
    let doc = ctx
        .basic()
        .ok_or_else(|| anyhow::anyhow!("startup finished without a bootstrap document"))?;
    println!("Startup complete: {}.", describe(&doc));
    Ok(())
}

fn describe(doc: &serde_json::Value) -> String {
    match doc {
        serde_json::Value::Object(map) => {
            format!("bootstrap document is an object with {} keys", map.len())
        }
        serde_json::Value::Array(items) => {
            format!("bootstrap document is an array with {} items", items.len())
        }
        other => format!("bootstrap document is {other}"),
    }
}
