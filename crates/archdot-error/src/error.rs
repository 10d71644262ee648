//! The main Error type for archdot.

use crate::ErrorKind;
use std::fmt;

/// Unified error type for configuration resolution and loading.
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.operation.is_empty() {
            write!(f, " at {}", self.operation)?;
        }

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}: {value}")?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} at {}", self.kind, self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {key}: {value}")?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {source:?}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string())
            .with_operation("io")
            .set_source(err)
    }
}

impl Error {
    /// No configuration path was supplied and none can be discovered.
    pub fn config_missing() -> Self {
        Self::new(
            ErrorKind::ConfigMissing,
            "no configuration file given; automatic config resolution is not supported",
        )
    }

    /// The configuration format could not be determined or is not handled.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        let format = format.into();
        Self::new(
            ErrorKind::Unsupported,
            format!("configuration format '{format}' is not supported; use json or toml"),
        )
        .with_context("format", format)
    }

    pub fn deserialization_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DeserializationFailed, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::DeserializationFailed, "missing field `id`");
        assert_eq!(err.kind(), ErrorKind::DeserializationFailed);
        assert_eq!(err.message(), "missing field `id`");
        assert!(err.context().is_empty());
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::deserialization_failed("bad value")
            .with_operation("config::parse_architecture")
            .with_context("path", "arch.toml")
            .with_context("format", "toml");

        assert_eq!(err.operation(), "config::parse_architecture");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("path", "arch.toml".to_string()));
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::deserialization_failed("failed")
            .with_operation("config::parse_architecture")
            .with_operation("config::load_architecture");

        assert_eq!(err.operation(), "config::load_architecture");
        assert_eq!(
            err.context()[0],
            ("called", "config::parse_architecture".to_string())
        );
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io_err.into();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.operation(), "io");
        assert!(std::error::Error::source(&err).is_some());

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);

        let io_err = std::io::Error::other("disk on fire");
        let err: Error = io_err.into();
        assert_eq!(err.kind(), ErrorKind::IoFailed);
        assert!(err.to_string().ends_with("=> disk on fire"));
    }

    #[test]
    fn test_display() {
        let err = Error::deserialization_failed("expected a string")
            .with_operation("config::load_architecture")
            .with_context("path", "arch.json");

        let display = format!("{err}");
        assert_eq!(
            display,
            "DeserializationFailed at config::load_architecture, \
             context { path: arch.json } => expected a string"
        );
    }

    #[test]
    fn test_display_without_operation() {
        let err = Error::config_missing();
        let display = err.to_string();
        assert!(display.starts_with("ConfigMissing => "));
        assert!(display.contains("automatic config resolution is not supported"));
    }

    #[test]
    fn test_convenience_constructors() {
        let err = Error::config_missing();
        assert_eq!(err.kind(), ErrorKind::ConfigMissing);
        assert_eq!(err.operation(), "");

        let err = Error::unsupported_format("yaml");
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        assert_eq!(err.context()[0], ("format", "yaml".to_string()));
    }
}
