use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use archdot_cli::{ArchdotOptions, run_main, write_output};
use archdot_error::Result;
use archdot_model::ConfigFormat;

#[derive(Parser, Debug)]
#[command(
    name = "archdot",
    about = "archdot: render an architecture description as a Graphviz DOT graph",
    version
)]
pub struct Cli {
    /// Architecture configuration file (.json or .toml)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Configuration format, overriding detection by file extension: 'json' or 'toml'
    #[arg(long, value_name = "FORMAT")]
    format: Option<ConfigFormat>,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
}

pub fn run(args: Cli) -> Result<()> {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = ArchdotOptions {
        config: args.config,
        format: args.format,
        output: args.output,
    };

    let dot = run_main(&opts)?;
    write_output(&dot, opts.output.as_deref())
}

fn main() -> ExitCode {
    let args = Cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(kind = e.kind().as_str(), error = %e, "execution failed");
            ExitCode::FAILURE
        }
    }
}
