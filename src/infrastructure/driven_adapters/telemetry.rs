//! Tracing Setup
//!
//! Installs the global subscriber for both binaries.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use super::config::{LogConfig, LogFormat};

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. The console binary
/// passes `std::io::stderr` so the menu keeps stdout to itself.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing<W>(config: &LogConfig, writer: W) -> anyhow::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .try_init()?,
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .try_init()?,
    }

    Ok(())
}
