//! Loading the text files that make up the smudge stick.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{SmudgeError, SourceFailure};

/// Source texts that loaded, plus the ones that did not.
#[derive(Debug, Default)]
pub struct LoadedSources {
    pub texts: Vec<String>,
    pub failures: Vec<SourceFailure>,
}

impl LoadedSources {
    /// One-line summary of partial failures, `None` when everything loaded.
    pub fn warning(&self) -> Option<String> {
        if self.failures.is_empty() {
            return None;
        }
        let names: Vec<String> = self
            .failures
            .iter()
            .map(|f| format!("{} ({})", f.path.display(), f.error))
            .collect();
        Some(format!(
            "skipped {} unreadable source(s): {}",
            self.failures.len(),
            names.join(", ")
        ))
    }
}

/// Read every path. Bytes that are not valid UTF-8 are replaced.
///
/// Unreadable files are skipped and reported in [`LoadedSources::failures`].
/// Fails only when nothing could be read.
pub fn load_sources<P: AsRef<Path>>(paths: &[P]) -> Result<LoadedSources, SmudgeError> {
    let mut loaded = LoadedSources::default();

    for path in paths {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(bytes) => {
                info!(path = %path.display(), bytes = bytes.len(), "loaded source");
                loaded.texts.push(String::from_utf8_lossy(&bytes).into_owned());
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping unreadable source");
                loaded.failures.push(SourceFailure {
                    path: PathBuf::from(path),
                    error,
                });
            }
        }
    }

    if loaded.texts.is_empty() {
        return Err(SmudgeError::NoReadableSources {
            failures: loaded.failures,
        });
    }
    Ok(loaded)
}
