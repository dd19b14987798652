//! # CLI Layer
//!
//! This module is **one possible UI client** for iprhub. It is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Sets up logging
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `args`: the process arguments ([`args::Cli`]) and the per-line session grammar
//! - `session`: reads one command per line and dispatches it to `IprApi`
//! - `render`: turns records, summaries and messages into terminal text
//!
//! `run()` loads configuration, starts tracing, then feeds lines from
//! `--script` or stdin into a [`session::Session`] until `quit` or end of input.

mod args;
mod render;
mod session;

use args::Cli;
use clap::Parser;
use iprhub::api::IprApi;
use iprhub::config::IprConfig;
use iprhub::error::Result;
use iprhub::store::memory::InMemoryStore;
use session::{Flow, Session};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const PROMPT: &str = "iprhub> ";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = IprConfig::load(cli.config.as_deref())?;
    init_tracing(cli.verbose, &config.log_level);
    debug!(?config, "configuration loaded");

    let api = IprApi::new(InMemoryStore::new())
        .with_department_matching(config.department_matching());
    let mut session = Session::new(api, config.render_after_mutation);

    let interactive = cli.script.is_none() && io::stdin().is_terminal();
    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            info!(script = %path.display(), "reading session script");
            Box::new(BufReader::new(File::open(path)?))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    if interactive {
        writeln!(out, "iprhub {}. Type `help` for commands.", env!("CARGO_PKG_VERSION"))?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        if session.execute(&line?, &mut out, &mut err)? == Flow::Quit {
            break;
        }
    }

    debug!("session ended");
    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v`/`-vv`, otherwise the configured level.
fn init_tracing(verbose: u8, configured: &str) {
    let directive = match verbose {
        0 => configured.to_string(),
        1 => "iprhub=debug".to_string(),
        _ => "iprhub=trace".to_string(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}
