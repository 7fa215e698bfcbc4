//! Client configuration
//!
//! Configuration is loaded once per process, defaults first, then
//! environment variables. The backend base URL comes from
//! `NEXT_PUBLIC_API_URL`, the same variable the web frontend reads, so one
//! deployment setting drives both.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000/api/v1".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from defaults and environment
    ///
    /// `NEXT_PUBLIC_API_URL` overrides `api_url` when set.
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&ClientConfig::default())?)
            .add_source(config::Environment::with_prefix("NEXT_PUBLIC"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
