//! Loading an [`Architecture`] from a declarative configuration file.
//!
//! Configuration is plain data (JSON or TOML) deserialized straight into the
//! model types. Unknown fields and wrongly typed values are rejected with the
//! parser's message; references between entities are not checked.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use archdot_error::{Error, Result};
use tracing::debug;

use crate::types::Architecture;

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Guess the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(Error::unsupported_format(ext)
                .with_operation("config::detect_format")
                .with_context("path", path.display().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(Error::unsupported_format(other)),
        }
    }
}

/// Parse an architecture from in-memory text.
pub fn parse_architecture(text: &str, format: ConfigFormat) -> Result<Architecture> {
    let parsed = match format {
        ConfigFormat::Json => serde_json::from_str::<Architecture>(text).map_err(|err| {
            let message = err.to_string();
            Error::deserialization_failed(message).set_source(err)
        }),
        ConfigFormat::Toml => toml::from_str::<Architecture>(text).map_err(|err| {
            let message = err.message().to_string();
            Error::deserialization_failed(message).set_source(err)
        }),
    };

    parsed.map_err(|err| {
        err.with_operation("config::parse_architecture")
            .with_context("format", format.as_str())
    })
}

/// Read and parse the configuration file at `path`.
///
/// `format` overrides extension-based detection when given.
pub fn load_architecture(
    path: impl AsRef<Path>,
    format: Option<ConfigFormat>,
) -> Result<Architecture> {
    let path = path.as_ref();
    let format = match format {
        Some(format) => format,
        None => ConfigFormat::from_path(path)?,
    };

    let text = fs::read_to_string(path).map_err(|err| {
        Error::from(err)
            .with_operation("config::load_architecture")
            .with_context("path", path.display().to_string())
    })?;

    let arch = parse_architecture(&text, format).map_err(|err| {
        err.with_operation("config::load_architecture")
            .with_context("path", path.display().to_string())
    })?;

    debug!(
        path = %path.display(),
        %format,
        groups = arch.logical_groups.len(),
        environments = arch.environments.len(),
        services = arch.services.len(),
        "configuration loaded"
    );
    Ok(arch)
}
