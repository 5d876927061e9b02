//! `abl fetch` – fetch a resource path and print the JSON document.

use anyhow::Result;

use abl_core::config::AblConfig;
use abl_core::loader::Loader;

pub async fn run_fetch(cfg: &AblConfig) -> Result<()> {
    let loader = Loader::from_config(cfg)?;
    let doc = loader.fetch_document().await?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
