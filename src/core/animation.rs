//! Startup fetch of the decorative header animation
//!
//! Best effort: any failure yields an empty JSON object and a warning log.
//! Stage logic never depends on the result.

use std::time::Duration;

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::QuestResult;

/// The "no decoration" descriptor
pub fn empty_descriptor() -> Value {
    Value::Object(Map::new())
}

/// HTTP loader for animation descriptors
#[derive(Debug, Clone)]
pub struct AnimationLoader {
    client: Client,
}

impl AnimationLoader {
    pub fn new(timeout_ms: u64) -> QuestResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and decode it as JSON, or `{}` on any failure
    pub async fn load(&self, url: &str) -> Value {
        debug!(url = %url, "Fetching animation descriptor");

        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(url = %url, error = %e, "Animation fetch failed");
                return empty_descriptor();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Animation fetch returned non-success status");
            return empty_descriptor();
        }

        match response.json::<Value>().await {
            Ok(descriptor) => {
                info!(url = %url, "Animation descriptor loaded");
                descriptor
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Animation descriptor is not valid JSON");
                empty_descriptor()
            }
        }
    }
}

/// Load `url` if configured; `None` or a broken client both give `{}`
pub async fn load_optional(url: Option<&str>, timeout_ms: u64) -> Value {
    let Some(url) = url else {
        return empty_descriptor();
    };
    match AnimationLoader::new(timeout_ms) {
        Ok(loader) => loader.load(url).await,
        Err(e) => {
            warn!(error = %e, "Could not build HTTP client for animation fetch");
            empty_descriptor()
        }
    }
}
