//! Diagnostic log setup.
//!
//! Operations print one-line outcomes to the interactive output; the causes
//! behind failures land here instead, on stderr or appended to a file.

use std::path::Path;

use eyre::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialise the tracing subscriber.
///
/// Verbosity maps 0=warn, 1=info, 2=debug, 3+=trace; `RUST_LOG` overrides
/// the computed filter. With `log_file` set, output is appended there with
/// ANSI colours off.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dfsh={level},dfsh_core={level},dfsh_cli={level}")));

    match log_file {
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .try_init()
                .map_err(|err| eyre::eyre!("installing log subscriber: {err}"))?;
        }
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(file).with_ansi(false).with_target(true))
                .try_init()
                .map_err(|err| eyre::eyre!("installing log subscriber: {err}"))?;
        }
    }

    Ok(())
}
