//! Writing rendered graphs to stdout or a file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use archdot_error::{Error, Result};
use tracing::info;

/// Write `dot` followed by a newline, to `path` if given, otherwise stdout.
pub fn write_output(dot: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, format!("{dot}\n")).map_err(|err| {
                Error::from(err)
                    .with_operation("output::write_output")
                    .with_context("path", path.display().to_string())
            })?;
            info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{dot}")
                .and_then(|()| stdout.flush())
                .map_err(|err| Error::from(err).with_operation("output::write_output"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use archdot_error::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn file_output_ends_with_newline() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("graph.dot");

        write_output("digraph {\n\n}", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "digraph {\n\n}\n");
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("graph.dot");

        let err = write_output("digraph {\n\n}", Some(&path)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.operation(), "output::write_output");
    }
}
