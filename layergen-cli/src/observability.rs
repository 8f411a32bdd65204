//! Logging setup
//!
//! Diagnostics go to stderr so they never mix with file listings or preview
//! output on stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or debug
/// output for the layergen crates when `verbose` is set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}

/// Filter directives used when `RUST_LOG` is not set
#[must_use]
pub const fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,layergen=debug,layergen_cli_lib=debug"
    } else {
        "warn"
    }
}
