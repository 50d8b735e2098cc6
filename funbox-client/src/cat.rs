//! Random cat images from a third-party service.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config;

#[derive(Debug, Error)]
pub enum CatError {
    #[error("cat service returned {0}")]
    Status(reqwest::StatusCode),

    #[error("cat service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Something that can hand out the URL of a random cat image
#[async_trait]
pub trait CatSource: Send + Sync {
    async fn fetch_image_url(&self) -> Result<String, CatError>;
}

/// Fetches from an HTTP endpoint that serves (or redirects to) a cat image.
///
/// The image URL is the final URL after redirects, so it stays stable
/// for whoever displays it later.
pub struct HttpCatSource {
    url: String,
    client: reqwest::Client,
}

impl HttpCatSource {
    pub fn new(url: impl Into<String>) -> Result<Self, CatError> {
        let client = reqwest::Client::builder()
            .timeout(config::get_http_timeout())
            .build()?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl CatSource for HttpCatSource {
    async fn fetch_image_url(&self) -> Result<String, CatError> {
        let resp = self.client.get(&self.url).send().await?;

        if !resp.status().is_success() {
            warn!("Cat service returned {}", resp.status());
            return Err(CatError::Status(resp.status()));
        }

        let url = resp.url().to_string();
        debug!("Cat image at {}", url);
        Ok(url)
    }
}
