//! Funbox client library.
//!
//! Loads jokes and quotes from a Funbox server once, then turns each
//! user action into a random joke, quote, number or cat picture.

pub mod api;
pub mod cat;
pub mod config;
pub mod generator;
pub mod render;
pub mod session;

pub use api::{load_cache, ApiError, ContentApi, ContentCache};
pub use cat::{CatError, CatSource, HttpCatSource};
pub use generator::{ContentKind, GenerateError, Generator, ViewState};
