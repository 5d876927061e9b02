//! Bootstrap loader: resolve the resource URL, fetch the document, hand it
//! to the application context, then run the completion continuation.

use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::config::AblConfig;
use crate::context::AppContext;
use crate::fetch::{self, FetchError, FetchOptions};

/// Fetches the bootstrap document for an application context.
#[derive(Debug, Clone)]
pub struct Loader {
    base_url: Url,
    resource_path: String,
    options: FetchOptions,
}

impl Loader {
    /// Build a loader from configuration. Fails if `base_url` is not a
    /// valid absolute URL.
    pub fn from_config(cfg: &AblConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&cfg.base_url)?;
        Ok(Self {
            base_url,
            resource_path: cfg.resource_path.clone(),
            options: FetchOptions {
                connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
                request_timeout: Duration::from_secs(cfg.request_timeout_secs),
                max_body_bytes: cfg.max_body_bytes,
            },
        })
    }

    /// Fully resolved URL of the bootstrap document.
    pub fn resource_url(&self) -> Result<Url, FetchError> {
        Ok(self.base_url.join(&self.resource_path)?)
    }

    /// Fetch the bootstrap document without touching a context.
    ///
    /// Each call issues an independent request; there is no caching.
    pub async fn fetch_document(&self) -> Result<Value> {
        let url = self.resource_url()?.to_string();
        let opts = self.options;
        let value = tokio::task::spawn_blocking({
            let url = url.clone();
            move || fetch::get_json(&url, &opts)
        })
        .await
        .context("bootstrap fetch task join")??;
        tracing::debug!("fetched bootstrap document from {}", url);
        Ok(value)
    }

    /// Fetch the document, store it in `ctx`, then invoke `on_complete`
    /// with no arguments.
    ///
    /// On failure the context is left untouched and `on_complete` is not
    /// invoked; the error is returned to the caller.
    pub async fn load<F>(&self, ctx: &AppContext, on_complete: F) -> Result<()>
    where
        F: FnOnce(),
    {
        let value = self.fetch_document().await?;
        ctx.set_basic(value);
        on_complete();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_base(base_url: &str) -> AblConfig {
        let mut cfg = AblConfig::default();
        cfg.base_url = base_url.to_string();
        cfg
    }

    #[test]
    fn resource_url_joins_base_and_path() {
        let loader = Loader::from_config(&config_with_base("http://127.0.0.1:8000/")).unwrap();
        assert_eq!(
            loader.resource_url().unwrap().as_str(),
            "http://127.0.0.1:8000/json/basic.json"
        );
    }

    #[test]
    fn resource_url_respects_base_subdirectory() {
        let mut cfg = config_with_base("https://static.example.com/app/");
        cfg.resource_path = "boot.json".to_string();
        let loader = Loader::from_config(&cfg).unwrap();
        assert_eq!(
            loader.resource_url().unwrap().as_str(),
            "https://static.example.com/app/boot.json"
        );
    }

    #[test]
    fn from_config_rejects_invalid_base_url() {
        let err = Loader::from_config(&config_with_base("not a url")).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
