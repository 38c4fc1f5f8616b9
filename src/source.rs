use crate::error::{Error, Result};
use log::{debug, error, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Plain-text reader for module artifacts.
///
/// Every artifact is read in full and closed before the next one is opened. Extraction
/// works on raw text, so no further decoding happens here.
///
/// # Example
///
/// ```no_run
/// use readme_from_source::source::SourceReader;
/// use std::path::Path;
///
/// let source = SourceReader::read_file(Path::new("src/main/java/ChatController.java")).unwrap();
/// println!("Read {} bytes", source.content.len());
/// ```
pub struct SourceReader;

/// A successfully read artifact with its full text content.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path to the artifact
    pub path: PathBuf,
    /// Entire file content
    pub content: String,
}

impl SourceFile {
    /// The file name without its extension, e.g. `ChatController` for `ChatController.java`.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl SourceReader {
    /// Reads a single artifact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] if the file cannot be opened or is not valid UTF-8.
    pub fn read_file(path: &Path) -> Result<SourceFile> {
        debug!("Reading file: {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(SourceFile {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Reads an optional artifact, downgrading a recoverable read failure to a warning.
    ///
    /// Returns `None` both when there is no path and when the file cannot be read.
    pub fn read_optional(path: Option<&Path>) -> Option<SourceFile> {
        let path = path?;
        match Self::read_file(path) {
            Ok(source) => Some(source),
            Err(e) if e.is_recoverable() => {
                warn!("Skipping unreadable file: {}", e);
                None
            }
            Err(e) => {
                error!("Unexpected failure reading {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Reads multiple artifacts, continuing even if some fail.
    ///
    /// Files that cannot be read are logged as warnings and left out of the result, so one bad
    /// controller never prevents documenting the others. Order of the input is preserved.
    pub fn read_files(paths: &[PathBuf]) -> Vec<SourceFile> {
        debug!("Reading {} files", paths.len());

        let sources: Vec<SourceFile> = paths
            .iter()
            .filter_map(|path| Self::read_optional(Some(path)))
            .collect();

        debug!(
            "Reading complete: {} succeeded, {} failed",
            sources.len(),
            paths.len() - sources.len()
        );

        sources
    }
}
