//! Funbox - random fun generator for the terminal
//!
//! Press Enter and get one of a random joke, motivational quote, lucky
//! number or cat picture.
//!
//! # Lifecycle
//!
//! 1. Jokes and quotes are fetched once from the Funbox server
//! 2. Each Enter picks a content kind at random and shows the result
//! 3. Cat pictures come straight from the cat service, not the server
//! 4. Failures show an error card; `r` tries again
//!
//! # Usage
//!
//! ```bash
//! funbox --server http://localhost:5000
//!
//! # For debugging
//! funbox --verbose --delay-ms 0
//! ```

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{debug, info, Level};

use funbox_client::render::{self, Sentiment};
use funbox_client::session::{self, spawn_line_reader};
use funbox_client::{config, load_cache, ContentApi, Generator, HttpCatSource};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "funbox", version, about = "Random fun generator for the terminal")]
struct Args {
    /// Funbox server base URL
    #[arg(long, env = "FUNBOX_SERVER_URL", default_value = config::DEFAULT_SERVER_URL)]
    server: String,

    /// Random cat image endpoint
    #[arg(long, env = "FUNBOX_CAT_URL", default_value = config::DEFAULT_CAT_URL)]
    cat_url: String,

    /// Pause before each result, in milliseconds
    #[arg(long, default_value_t = config::GENERATE_DELAY_MS)]
    delay_ms: u64,

    /// Log debug output to stderr
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Setup logging
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Funbox v{} starting", env!("CARGO_PKG_VERSION"));
    debug!("{:?}", args);

    let api = ContentApi::new(&args.server).context("Failed to create API client")?;
    let cache = load_cache(&api).await;

    let cat = HttpCatSource::new(&args.cat_url).context("Failed to create cat client")?;

    let mut rng = StdRng::from_entropy();
    let sentiment = Sentiment::random(&mut rng);

    let mut generator = Generator::new(cat, rng)
        .with_delay(Duration::from_millis(args.delay_ms))
        .with_cache(cache);

    println!("{}", render::header());
    println!("{}", render::render(generator.state()));
    println!("{}\n", render::footer(&sentiment));

    let (tx, mut input) = mpsc::channel(32);
    spawn_line_reader(BufReader::new(tokio::io::stdin()), tx);

    let mut stdout = std::io::stdout();
    let generations = session::run(&mut input, &mut generator, &sentiment, &mut stdout).await?;
    info!("Session ended after {} generations", generations);

    Ok(())
}
