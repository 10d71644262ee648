//! archdot command-line interface.
//!
//! [`run_main`] loads the configured architecture and renders it; the binary
//! in `main.rs` parses arguments and writes the result with [`write_output`].

pub mod output;

use std::path::PathBuf;
use std::time::Instant;

use archdot_error::{Error, Result};
use archdot_model::{ConfigFormat, load_architecture};
use tracing::info;

pub use output::write_output;

/// Options for running archdot.
#[derive(Debug, Clone, Default)]
pub struct ArchdotOptions {
    /// Configuration file describing the architecture.
    pub config: Option<PathBuf>,
    /// Format override; detected from the extension when unset.
    pub format: Option<ConfigFormat>,
    /// Write here instead of stdout.
    pub output: Option<PathBuf>,
}

/// Load the configured architecture and render it to DOT text.
pub fn run_main(opts: &ArchdotOptions) -> Result<String> {
    let config = opts
        .config
        .as_ref()
        .ok_or_else(|| Error::config_missing().with_operation("cli::run_main"))?;

    let start = Instant::now();
    let arch = load_architecture(config, opts.format)?;
    let dot = archdot_dot::generate_dot(&arch);

    info!(
        config = %config.display(),
        bytes = dot.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "graph rendered"
    );
    Ok(dot)
}
