//! Content storage.
//!
//! The HTTP layer only sees the [`ContentStore`] trait; the process
//! constructs one [`MemStore`] at startup and hands it to the router.

mod memory;
mod seed;

use async_trait::async_trait;
use thiserror::Error;

use funbox_common::{Joke, NewJoke, NewQuote, Quote};

pub use memory::MemStore;
pub use seed::{SEED_JOKES, SEED_QUOTES};

/// Errors a store backend can report
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not serve the request
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage for jokes and quotes
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All jokes in insertion order
    async fn all_jokes(&self) -> Result<Vec<Joke>, StoreError>;

    /// All quotes in insertion order
    async fn all_quotes(&self) -> Result<Vec<Quote>, StoreError>;

    /// Store a joke under the next sequential id
    async fn create_joke(&self, joke: NewJoke) -> Result<Joke, StoreError>;

    /// Store a quote under the next sequential id
    async fn create_quote(&self, quote: NewQuote) -> Result<Quote, StoreError>;
}
