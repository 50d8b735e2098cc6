//! Shared types for the Funbox random fun generator.
//!
//! This crate contains the content records shared between:
//! - funbox-server (the backend that serves jokes and quotes)
//! - funbox-client (the terminal client that picks and renders content)
//!
//! Any changes to the JSON shape of the API should be made here.

use serde::{Deserialize, Serialize};

/// Path serving every joke as a JSON array
pub const JOKES_PATH: &str = "/api/jokes";

/// Path serving every quote as a JSON array
pub const QUOTES_PATH: &str = "/api/quotes";

/// A joke as stored and served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    /// Sequential identifier, starting at 1
    pub id: u64,

    /// The joke itself
    pub text: String,
}

/// A motivational quote as stored and served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Sequential identifier, starting at 1
    pub id: u64,

    /// The quotation
    pub text: String,

    /// Who said it
    pub author: String,
}

/// Insert shape for a joke (the store assigns the id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJoke {
    pub text: String,
}

impl NewJoke {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Attach an id, producing the stored record
    pub fn with_id(self, id: u64) -> Joke {
        Joke { id, text: self.text }
    }
}

/// Insert shape for a quote (the store assigns the id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    pub text: String,
    pub author: String,
}

impl NewQuote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Attach an id, producing the stored record
    pub fn with_id(self, id: u64) -> Quote {
        Quote {
            id,
            text: self.text,
            author: self.author,
        }
    }
}

/// JSON body returned by the server on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
