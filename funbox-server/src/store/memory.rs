//! In-memory content store.
//!
//! Contents live for the lifetime of the process and are lost on restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use funbox_common::{Joke, NewJoke, NewQuote, Quote};

use super::seed::{SEED_JOKES, SEED_QUOTES};
use super::{ContentStore, StoreError};

/// Two id-ordered maps with their id counters
struct Tables {
    jokes: BTreeMap<u64, Joke>,
    quotes: BTreeMap<u64, Quote>,
    next_joke_id: u64,
    next_quote_id: u64,
}

impl Tables {
    fn insert_joke(&mut self, joke: NewJoke) -> Joke {
        let id = self.next_joke_id;
        self.next_joke_id += 1;

        let joke = joke.with_id(id);
        self.jokes.insert(id, joke.clone());
        joke
    }

    fn insert_quote(&mut self, quote: NewQuote) -> Quote {
        let id = self.next_quote_id;
        self.next_quote_id += 1;

        let quote = quote.with_id(id);
        self.quotes.insert(id, quote.clone());
        quote
    }
}

/// Process-lifetime store; safe to share across request handlers
pub struct MemStore {
    tables: RwLock<Tables>,
}

impl MemStore {
    /// Create an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                jokes: BTreeMap::new(),
                quotes: BTreeMap::new(),
                next_joke_id: 1,
                next_quote_id: 1,
            }),
        }
    }

    /// Create a store holding the ten seed jokes and ten seed quotes
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut tables = store.tables.write();
            for text in SEED_JOKES {
                tables.insert_joke(NewJoke::new(text));
            }
            for (text, author) in SEED_QUOTES {
                tables.insert_quote(NewQuote::new(text, author));
            }
        }
        store
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for MemStore {
    async fn all_jokes(&self) -> Result<Vec<Joke>, StoreError> {
        Ok(self.tables.read().jokes.values().cloned().collect())
    }

    async fn all_quotes(&self) -> Result<Vec<Quote>, StoreError> {
        Ok(self.tables.read().quotes.values().cloned().collect())
    }

    async fn create_joke(&self, joke: NewJoke) -> Result<Joke, StoreError> {
        let joke = self.tables.write().insert_joke(joke);
        debug!("Created joke {}", joke.id);
        Ok(joke)
    }

    async fn create_quote(&self, quote: NewQuote) -> Result<Quote, StoreError> {
        let quote = self.tables.write().insert_quote(quote);
        debug!("Created quote {}", quote.id);
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_jokes_in_order() {
        let store = MemStore::seeded();
        let jokes = store.all_jokes().await.unwrap();

        assert_eq!(jokes.len(), 10);
        for (i, joke) in jokes.iter().enumerate() {
            assert_eq!(joke.id, i as u64 + 1);
            assert_eq!(joke.text, SEED_JOKES[i]);
        }
    }

    #[tokio::test]
    async fn test_seeded_quotes_start_with_jobs() {
        let store = MemStore::seeded();
        let quotes = store.all_quotes().await.unwrap();

        assert_eq!(quotes.len(), 10);
        assert_eq!(
            quotes[0],
            Quote {
                id: 1,
                text: "The only way to do great work is to love what you do.".to_string(),
                author: "Steve Jobs".to_string(),
            }
        );
        assert_eq!(quotes[9].id, 10);
    }

    #[tokio::test]
    async fn test_create_joke_appends_next_id() {
        let store = MemStore::seeded();

        let created = store.create_joke(NewJoke::new("x")).await.unwrap();
        assert_eq!(created, Joke { id: 11, text: "x".to_string() });

        let jokes = store.all_jokes().await.unwrap();
        assert_eq!(jokes.len(), 11);
        assert_eq!(jokes.last(), Some(&created));
    }

    #[tokio::test]
    async fn test_create_quote_on_empty_store() {
        let store = MemStore::new();
        assert!(store.all_quotes().await.unwrap().is_empty());

        let first = store.create_quote(NewQuote::new("a", "b")).await.unwrap();
        let second = store.create_quote(NewQuote::new("a", "b")).await.unwrap();

        // No duplicate detection; ids keep counting
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.all_quotes().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_joke_and_quote_counters_are_independent() {
        let store = MemStore::new();

        store.create_joke(NewJoke::new("j")).await.unwrap();
        store.create_joke(NewJoke::new("j")).await.unwrap();
        let quote = store.create_quote(NewQuote::new("q", "a")).await.unwrap();

        assert_eq!(quote.id, 1);
    }

    #[tokio::test]
    async fn test_reads_are_idempotent() {
        let store = MemStore::seeded();

        let first = store.all_jokes().await.unwrap();
        for _ in 0..5 {
            assert_eq!(store.all_jokes().await.unwrap(), first);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_lose_nothing() {
        let store = std::sync::Arc::new(MemStore::new());

        let mut handles = Vec::new();
        for i in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create_joke(NewJoke::new(format!("joke {}", i))).await.unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let ids: Vec<u64> = store.all_jokes().await.unwrap().iter().map(|j| j.id).collect();
        assert_eq!(ids, (1..=50).collect::<Vec<u64>>());
    }
}
