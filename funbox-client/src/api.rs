//! HTTP access to the Funbox server.
//!
//! The client loads both collections once at startup and never asks
//! the server again; every later pick comes from the cached lists.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use funbox_common::{ErrorBody, Joke, Quote, JOKES_PATH, QUOTES_PATH};

use crate::config;

/// Errors talking to the Funbox server
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or undecodable body
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
}

/// Client for the read-only content endpoints
#[derive(Clone)]
pub struct ContentApi {
    base_url: String,
    client: reqwest::Client,
}

impl ContentApi {
    /// Create a client for the server at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config::get_http_timeout())
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, client })
    }

    /// GET /api/jokes
    pub async fn fetch_jokes(&self) -> Result<Vec<Joke>, ApiError> {
        self.get_list(JOKES_PATH).await
    }

    /// GET /api/quotes
    pub async fn fetch_quotes(&self) -> Result<Vec<Quote>, ApiError> {
        self.get_list(QUOTES_PATH).await
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
            };
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }
}

/// Collections fetched at startup. `None` means the fetch failed.
#[derive(Debug, Default)]
pub struct ContentCache {
    pub jokes: Option<Vec<Joke>>,
    pub quotes: Option<Vec<Quote>>,
}

/// Fetch both collections concurrently, keeping whichever succeed
pub async fn load_cache(api: &ContentApi) -> ContentCache {
    let (jokes, quotes) = tokio::join!(api.fetch_jokes(), api.fetch_quotes());

    let jokes = match jokes {
        Ok(jokes) => {
            info!("Loaded {} jokes", jokes.len());
            Some(jokes)
        }
        Err(e) => {
            warn!("Failed to load jokes: {}", e);
            None
        }
    };

    let quotes = match quotes {
        Ok(quotes) => {
            info!("Loaded {} quotes", quotes.len());
            Some(quotes)
        }
        Err(e) => {
            warn!("Failed to load quotes: {}", e);
            None
        }
    };

    ContentCache { jokes, quotes }
}
