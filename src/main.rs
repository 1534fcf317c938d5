use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tokio::io::BufReader;
use tracing::Level;

use greetbot::consts::{DEFAULT_LOG_DIR, DEFAULT_LOG_FILE};
use greetbot::engine::responder::{ResponderConfig, ResponderEngine};
use greetbot::logging::{EventLog, LogConfig};
use greetbot::picker::Picker;
use greetbot::picker::random::RandomPicker;
use greetbot::session::Session;

#[derive(Parser)]
#[command(name = "greetbot", version, about = "Says hello when you do.")]
struct Cli {
    /// Directory for the log file (created if missing)
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,

    /// Log file name inside the log directory
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Most verbose level written to the log (error, warn, info, debug, trace)
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,

    /// Extra response to choose from when greeted (repeatable)
    #[arg(short, long = "response")]
    responses: Vec<String>,

    /// Reply used when no keyword matches
    #[arg(short, long)]
    fallback: Option<String>,

    /// Seed the random picker for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log = EventLog::open(&LogConfig {
        dir: cli.log_dir,
        file_name: cli.log_file,
        level: cli.log_level,
    })?;

    let picker: Box<dyn Picker> = match cli.seed {
        Some(seed) => Box::new(RandomPicker::seeded(seed)),
        None => Box::new(RandomPicker::new()),
    };

    let mut engine = ResponderEngine::new(ResponderConfig::default(), picker, log.clone());
    for response in cli.responses {
        engine.add_response(response);
    }
    if let Some(fallback) = cli.fallback {
        engine.update_fallback(fallback);
    }

    // Async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut session = Session::new(&engine, &log, stdin, io::stdout());
    session.run(interrupted()).await;
    session.into_output().flush()?;

    // A stdin read may still be parked on tokio's blocking pool after Ctrl+C,
    // and runtime shutdown would wait for it. Leave without shutting down.
    std::process::exit(0)
}

/// Resolves on Ctrl+C. Never resolves if the handler can't be installed.
async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
