//! Terminal rendering for each view state.
//!
//! Everything here is pure: a state goes in, text comes out.

use crossterm::style::{Color, Stylize};
use rand::Rng;

use crate::generator::{ViewState, FALLBACK_ERROR};

/// Decorative footer word, picked once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentiment {
    pub word: &'static str,
    pub icon: &'static str,
    pub color: Color,
}

pub const SENTIMENTS: [Sentiment; 6] = [
    Sentiment { word: "love", icon: "♥", color: Color::Red },
    Sentiment { word: "joy", icon: "☺", color: Color::Yellow },
    Sentiment { word: "passion", icon: "✦", color: Color::Magenta },
    Sentiment { word: "enthusiasm", icon: "⚡", color: Color::Blue },
    Sentiment { word: "excitement", icon: "★", color: Color::Green },
    Sentiment { word: "energy", icon: "☕", color: Color::DarkYellow },
];

impl Sentiment {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        SENTIMENTS[rng.gen_range(0..SENTIMENTS.len())]
    }
}

pub fn header() -> String {
    format!(
        "{}\n{}\n",
        "✨ Random Fun Generator".red().bold(),
        "Press Enter for a surprise! Get random jokes, motivational quotes, numbers, or adorable cat pictures. (q to quit)"
            .blue()
    )
}

pub fn footer(sentiment: &Sentiment) -> String {
    format!(
        "Made with {} {} for random fun",
        sentiment.icon.with(sentiment.color),
        sentiment.word
    )
}

/// Render a state as a card
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Welcome => card(
            "🎲 Ready for Some Fun?",
            "Press Enter to get started with your random content adventure!",
        ),
        ViewState::Loading => format!("{}\n", "⏳ Generating something awesome...".white()),
        ViewState::Joke { text } => card(&"😂 Random Joke".yellow().bold().to_string(), text),
        ViewState::Quote { text, author } => card(
            &"❝ Motivational Quote".blue().bold().to_string(),
            &format!("{}\n  - {}", format!("\"{}\"", text).italic(), author.clone().blue()),
        ),
        ViewState::Number { value } => card(
            &"# Random Number".magenta().bold().to_string(),
            &format!(
                "{}\nYour lucky number between 1 and 100!",
                value.to_string().magenta().bold()
            ),
        ),
        ViewState::Cat { url } => card(
            &"🐱 Random Cat".yellow().bold().to_string(),
            &format!("{}\nEnjoy this adorable feline friend! 🐱", url.clone().underlined()),
        ),
        ViewState::Error { message } => {
            let message = if message.is_empty() {
                FALLBACK_ERROR
            } else {
                message.as_str()
            };
            card(
                &"⚠ Oops!".red().bold().to_string(),
                &format!("{}\n[r] Try Again", message),
            )
        }
    }
}

fn card(title: &str, body: &str) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    for line in body.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}
