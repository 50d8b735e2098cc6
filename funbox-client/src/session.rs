//! Interactive session: turns input lines into generate actions.
//!
//! Lines typed while a generation is loading are discarded, the same
//! way a disabled button swallows clicks. Only `q` survives the discard.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cat::CatSource;
use crate::generator::{Generator, ViewState};
use crate::render::{self, Sentiment};

/// What a single input line asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Generate,
    Retry,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "q" | "quit" => Command::Quit,
            "r" => Command::Retry,
            _ => Command::Generate,
        }
    }
}

/// Forward lines from `reader` into `tx` until EOF, `q`, or the receiver closes.
///
/// Stopping at `q` leaves no stdin read pending when the session ends.
pub fn spawn_line_reader<R>(reader: R, tx: mpsc::Sender<String>) -> JoinHandle<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = reader.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let quit = Command::parse(&line) == Command::Quit;
            if tx.send(line).await.is_err() || quit {
                break;
            }
        }
        debug!("Input closed");
    })
}

/// Drive `generator` from `input` until `q` or end of input.
///
/// Writes the loading card, then each result card followed by the
/// footer. Returns how many generations ran.
pub async fn run<C, W>(
    input: &mut mpsc::Receiver<String>,
    generator: &mut Generator<C>,
    sentiment: &Sentiment,
    out: &mut W,
) -> std::io::Result<usize>
where
    C: CatSource,
    W: Write,
{
    let mut generations = 0;

    while let Some(line) = input.recv().await {
        let command = Command::parse(&line);
        if command == Command::Quit {
            break;
        }

        writeln!(out, "{}", render::render(&ViewState::Loading))?;
        out.flush()?;

        let state = match command {
            Command::Retry if generator.state().is_error() => generator.retry().await,
            _ => generator.generate().await,
        };
        generations += 1;

        writeln!(out, "{}", render::render(&state))?;
        writeln!(out, "{}\n", render::footer(sentiment))?;
        out.flush()?;

        if discard_pending(input) {
            break;
        }
    }

    Ok(generations)
}

/// Drop lines typed while loading. Returns true if one of them was `q`.
fn discard_pending(input: &mut mpsc::Receiver<String>) -> bool {
    let mut dropped = 0;
    while let Ok(line) = input.try_recv() {
        if Command::parse(&line) == Command::Quit {
            return true;
        }
        dropped += 1;
    }
    if dropped > 0 {
        debug!("Ignored {} inputs received while loading", dropped);
    }
    false
}
