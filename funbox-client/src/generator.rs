//! The generate state machine.
//!
//! `Welcome` -> `Loading` -> one of `Joke`/`Quote`/`Number`/`Cat`/`Error`
//! -> `Loading` on the next action.
//!
//! `generate` takes `&mut self`, so a second generation cannot start
//! while one is in flight. Input arriving meanwhile is handled by
//! [`crate::session`].

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

use funbox_common::{Joke, Quote};

use crate::api::ContentCache;
use crate::cat::CatSource;
use crate::config;

/// Message shown when a failure carries no detail of its own
pub const FALLBACK_ERROR: &str = "Something went wrong";

/// The kinds of content a generate action can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Joke,
    Quote,
    Number,
    Cat,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Joke,
        ContentKind::Quote,
        ContentKind::Number,
        ContentKind::Cat,
    ];

    /// Pick a kind uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Joke => "joke",
            ContentKind::Quote => "quote",
            ContentKind::Number => "number",
            ContentKind::Cat => "cat",
        }
    }
}

/// What the client is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Welcome,
    Loading,
    Joke { text: String },
    Quote { text: String, author: String },
    Number { value: u32 },
    Cat { url: String },
    Error { message: String },
}

impl ViewState {
    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error { .. })
    }
}

/// Why a generate action ended in the error state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("No jokes available")]
    NoJokes,

    #[error("No quotes available")]
    NoQuotes,

    #[error("Failed to load cat image")]
    CatImage,

    #[error("{}", detail_or_fallback(.0))]
    Other(Option<String>),
}

fn detail_or_fallback(detail: &Option<String>) -> &str {
    detail.as_deref().unwrap_or(FALLBACK_ERROR)
}

/// Owns the cached content and drives state transitions
pub struct Generator<C> {
    jokes: Option<Vec<Joke>>,
    quotes: Option<Vec<Quote>>,
    cat: C,
    rng: StdRng,
    delay: Duration,
    state: ViewState,
}

impl<C: CatSource> Generator<C> {
    /// Create a generator in the `Welcome` state with nothing cached
    pub fn new(cat: C, rng: StdRng) -> Self {
        Self {
            jokes: None,
            quotes: None,
            cat,
            rng,
            delay: config::get_generate_delay(),
            state: ViewState::Welcome,
        }
    }

    /// Override the cosmetic pause before each result
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Install collections fetched from the server
    pub fn with_cache(mut self, cache: ContentCache) -> Self {
        self.jokes = cache.jokes;
        self.quotes = cache.quotes;
        self
    }

    /// The state currently shown
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Produce a random kind of content
    pub async fn generate(&mut self) -> ViewState {
        self.run(None).await
    }

    /// Produce content of a fixed kind
    pub async fn generate_kind(&mut self, kind: ContentKind) -> ViewState {
        self.run(Some(kind)).await
    }

    /// The error state's "Try Again" control
    pub async fn retry(&mut self) -> ViewState {
        debug!("Retrying after {:?}", self.state());
        self.generate().await
    }

    async fn run(&mut self, kind: Option<ContentKind>) -> ViewState {
        self.state = ViewState::Loading;

        tokio::time::sleep(self.delay).await;

        let kind = kind.unwrap_or_else(|| ContentKind::random(&mut self.rng));
        debug!("Generating {}", kind.as_str());

        let next = match self.produce(kind).await {
            Ok(state) => {
                info!("Generated {}", kind.as_str());
                state
            }
            Err(e) => {
                warn!("Generating {} failed: {}", kind.as_str(), e);
                ViewState::Error {
                    message: e.to_string(),
                }
            }
        };

        self.state = next.clone();
        next
    }

    async fn produce(&mut self, kind: ContentKind) -> Result<ViewState, GenerateError> {
        match kind {
            ContentKind::Joke => {
                let joke = self
                    .jokes
                    .as_deref()
                    .and_then(|jokes| jokes.choose(&mut self.rng))
                    .ok_or(GenerateError::NoJokes)?;

                Ok(ViewState::Joke {
                    text: joke.text.clone(),
                })
            }
            ContentKind::Quote => {
                let quote = self
                    .quotes
                    .as_deref()
                    .and_then(|quotes| quotes.choose(&mut self.rng))
                    .ok_or(GenerateError::NoQuotes)?;

                Ok(ViewState::Quote {
                    text: quote.text.clone(),
                    author: quote.author.clone(),
                })
            }
            ContentKind::Number => Ok(ViewState::Number {
                value: self.rng.gen_range(config::NUMBER_MIN..=config::NUMBER_MAX),
            }),
            ContentKind::Cat => match self.cat.fetch_image_url().await {
                Ok(url) if url.is_empty() => Err(GenerateError::Other(None)),
                Ok(url) => Ok(ViewState::Cat { url }),
                Err(e) => {
                    debug!("Cat source error: {}", e);
                    Err(GenerateError::CatImage)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use rand::SeedableRng;

    use crate::cat::{CatError, HttpCatSource};

    /// Cat source returning a fixed answer
    struct FixedCat(Option<&'static str>);

    #[async_trait]
    impl CatSource for FixedCat {
        async fn fetch_image_url(&self) -> Result<String, CatError> {
            match self.0 {
                Some(url) => Ok(url.to_string()),
                None => Err(CatError::Status(reqwest::StatusCode::NOT_FOUND)),
            }
        }
    }

    /// Cat source counting how often it is asked
    struct CountingCat(AtomicUsize);

    #[async_trait]
    impl CatSource for CountingCat {
        async fn fetch_image_url(&self) -> Result<String, CatError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok("https://cats.example/1".to_string())
        }
    }

    fn seed_cache() -> ContentCache {
        ContentCache {
            jokes: Some(vec![
                Joke { id: 1, text: "Why don't eggs tell jokes? They'd crack each other up!".to_string() },
                Joke { id: 2, text: "What do you call a fake noodle? An impasta!".to_string() },
            ]),
            quotes: Some(vec![Quote {
                id: 1,
                text: "The only way to do great work is to love what you do.".to_string(),
                author: "Steve Jobs".to_string(),
            }]),
        }
    }

    fn generator<C: CatSource>(cat: C, cache: ContentCache) -> Generator<C> {
        Generator::new(cat, StdRng::seed_from_u64(7))
            .with_delay(Duration::ZERO)
            .with_cache(cache)
    }

    #[tokio::test]
    async fn test_starts_in_welcome() {
        let gen = generator(FixedCat(None), seed_cache());
        assert_eq!(gen.state(), &ViewState::Welcome);
    }

    #[tokio::test]
    async fn test_number_always_in_range() {
        let mut gen = generator(FixedCat(None), seed_cache());

        let mut seen = HashSet::new();
        for _ in 0..1000 {
            match gen.generate_kind(ContentKind::Number).await {
                ViewState::Number { value } => {
                    assert!((1..=100).contains(&value), "out of range: {}", value);
                    seen.insert(value);
                }
                other => panic!("expected number, got {:?}", other),
            }
        }

        assert!(!seen.contains(&0));
        assert!(!seen.contains(&101));
        assert!(seen.len() > 50);
    }

    #[tokio::test]
    async fn test_joke_comes_from_cache() {
        let cache = seed_cache();
        let texts: Vec<String> = cache.jokes.iter().flatten().map(|j| j.text.clone()).collect();
        let mut gen = generator(FixedCat(None), cache);

        for _ in 0..20 {
            match gen.generate_kind(ContentKind::Joke).await {
                ViewState::Joke { text } => assert!(texts.contains(&text)),
                other => panic!("expected joke, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_quote_carries_author() {
        let mut gen = generator(FixedCat(None), seed_cache());

        assert_eq!(
            gen.generate_kind(ContentKind::Quote).await,
            ViewState::Quote {
                text: "The only way to do great work is to love what you do.".to_string(),
                author: "Steve Jobs".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_empty_jokes_is_error() {
        let cache = ContentCache {
            jokes: Some(Vec::new()),
            ..seed_cache()
        };
        let mut gen = generator(FixedCat(None), cache);

        let state = gen.generate_kind(ContentKind::Joke).await;
        assert_eq!(
            state,
            ViewState::Error {
                message: "No jokes available".to_string()
            }
        );
        assert_eq!(gen.state(), &state);
    }

    #[tokio::test]
    async fn test_unloaded_quotes_is_error() {
        let mut gen = generator(FixedCat(None), ContentCache::default());

        assert_eq!(
            gen.generate_kind(ContentKind::Quote).await,
            ViewState::Error {
                message: "No quotes available".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_cat_failure_is_error() {
        let mut gen = generator(FixedCat(None), seed_cache());

        assert_eq!(
            gen.generate_kind(ContentKind::Cat).await,
            ViewState::Error {
                message: "Failed to load cat image".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_empty_cat_url_uses_fallback_message() {
        let mut gen = generator(FixedCat(Some("")), seed_cache());

        assert_eq!(
            gen.generate_kind(ContentKind::Cat).await,
            ViewState::Error {
                message: FALLBACK_ERROR.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_cat_http_404_is_error() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let cat = HttpCatSource::new(format!("{}/cat", server.uri())).unwrap();
        let mut gen = generator(cat, seed_cache());

        assert_eq!(
            gen.generate_kind(ContentKind::Cat).await,
            ViewState::Error {
                message: "Failed to load cat image".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_cat_success_shows_url() {
        let mut gen = generator(FixedCat(Some("https://cats.example/42")), seed_cache());

        assert_eq!(
            gen.generate_kind(ContentKind::Cat).await,
            ViewState::Cat {
                url: "https://cats.example/42".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_random_kinds_cover_all_branches() {
        let mut gen = generator(CountingCat(AtomicUsize::new(0)), seed_cache());

        let mut kinds = HashSet::new();
        for _ in 0..200 {
            let kind = match gen.generate().await {
                ViewState::Joke { .. } => ContentKind::Joke,
                ViewState::Quote { .. } => ContentKind::Quote,
                ViewState::Number { .. } => ContentKind::Number,
                ViewState::Cat { .. } => ContentKind::Cat,
                other => panic!("unexpected state {:?}", other),
            };
            kinds.insert(kind);
        }

        assert_eq!(kinds.len(), 4);
        assert!(gen.cat.0.load(Ordering::SeqCst) > 0);
    }

    #[tokio::test]
    async fn test_retry_leaves_error_state() {
        let mut gen = generator(FixedCat(Some("https://cats.example/1")), ContentCache::default());

        // Only the number and cat branches can succeed without a cache
        gen.generate_kind(ContentKind::Joke).await;
        assert!(gen.state().is_error());

        loop {
            let state = gen.retry().await;
            if !state.is_error() {
                assert!(matches!(state, ViewState::Number { .. } | ViewState::Cat { .. }));
                break;
            }
        }
    }

    #[test]
    fn test_other_error_messages() {
        assert_eq!(GenerateError::Other(None).to_string(), "Something went wrong");
        assert_eq!(
            GenerateError::Other(Some("boom".to_string())).to_string(),
            "boom"
        );
    }
}
