//! Output module for writing generated documents and extraction dumps.

use crate::error::{Error, Result};
use crate::module::ModuleInfo;
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes the extracted module information to pretty-printed JSON.
///
/// Useful for checking what extraction found before looking at the rendered README.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json(info: &ModuleInfo) -> Result<String> {
    debug!("Serializing module info to JSON");
    Ok(serde_json::to_string_pretty(info)?)
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does. Missing parent
/// directories are created.
///
/// # Errors
///
/// Returns [`Error::Write`] if the directory or file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
