//! Script Loaders
//!
//! Fetch the source of remote script files bound to a component. Callers
//! await each fetch before starting the next one.

use std::time::Duration;

use ahash::AHashMap;
use futures::future::{FutureExt, LocalBoxFuture};

use crate::connection::{ViewConfig, resolve_url};
use crate::error::{Error, Result};
use crate::services::run_in_tokio;

/// Source of remote script files
pub trait ScriptLoader {
    fn fetch_script<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<String>>;
}

/// Loads scripts over HTTP relative to the configured base URL
#[derive(Debug, Clone)]
pub struct HttpScriptLoader {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl HttpScriptLoader {
    pub fn new(config: &ViewConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.script_timeout_secs))
            .build()
            .map_err(|e| Error::Invalid {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

impl ScriptLoader for HttpScriptLoader {
    fn fetch_script<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<String>> {
        async move {
            let target = resolve_url(self.base_url.as_deref(), url)?;
            let client = self.client.clone();
            let request_url = target.clone();

            tracing::debug!(url = %target, "Fetching script file");

            let response = run_in_tokio(async move {
                let response = client.get(&request_url).send().await?.error_for_status()?;
                Ok::<String, reqwest::Error>(response.text().await?)
            })
            .await?;

            response.map_err(|e| Error::Network {
                url: target,
                message: e.to_string(),
            })
        }
        .boxed_local()
    }
}

/// Serves bundled script sources from memory
#[derive(Debug, Clone, Default)]
pub struct StaticScriptLoader {
    scripts: AHashMap<String, String>,
}

impl StaticScriptLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a script source under `url`
    pub fn with_script(mut self, url: impl Into<String>, source: impl Into<String>) -> Self {
        self.scripts.insert(url.into(), source.into());
        self
    }
}

impl ScriptLoader for StaticScriptLoader {
    fn fetch_script<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<String>> {
        let found = self.scripts.get(url).cloned().ok_or_else(|| Error::Network {
            url: url.to_string(),
            message: "script not bundled".to_string(),
        });
        futures::future::ready(found).boxed_local()
    }
}
