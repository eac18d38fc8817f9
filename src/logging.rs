use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for the volt-vue CLI
///
/// Diagnostics are written to stderr; result lines go to stdout.
///
/// The log level can be controlled via the RUST_LOG environment variable:
/// - RUST_LOG=debug volt-vue add button  (everything, including dependencies)
/// - RUST_LOG=error volt-vue add button  (errors only)
///
/// Without RUST_LOG, `--verbose` selects debug output and the default is
/// warnings only.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    if verbose {
        tracing::debug!("Verbose mode enabled. Showing detailed information.");
    }

    Ok(())
}

/// Filter directive used when RUST_LOG is not set
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "volt_vue=debug"
    } else {
        "volt_vue=warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "volt_vue=debug");
        assert_eq!(default_directive(false), "volt_vue=warn");
    }
}
