use crate::error::{Error, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File-name suffix of endpoint-bearing classes.
pub const CONTROLLER_SUFFIX: &str = "Controller.java";
/// File-name suffix of application entry classes.
pub const APPLICATION_SUFFIX: &str = "Application.java";
/// Dependency manifest file name.
pub const MANIFEST_FILE: &str = "pom.xml";
/// Existing documentation file, looked up directly in the module root.
pub const README_FILE: &str = "README.md";
/// Recognized configuration file names.
pub const CONFIG_FILES: &[&str] = &["application.yml", "application.yaml", "application.properties"];
/// Extension of the example-request file named after the module.
pub const HTTP_FILE_EXTENSION: &str = "http";

/// Module scanner for discovering the artifacts of a Spring Boot module.
///
/// The `ModuleScanner` recursively walks through a module directory to find controller and
/// application classes, the dependency manifest, and configuration files. It also probes the
/// module root for an existing `README.md` and a `<module-name>.http` request file. Hidden
/// directories (those starting with `.`) and the Maven `target` directory are skipped.
///
/// # Example
///
/// ```no_run
/// use readme_from_source::scanner::ModuleScanner;
/// use std::path::PathBuf;
///
/// let scanner = ModuleScanner::new(PathBuf::from("./basic/chat"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} controllers", result.controller_files.len());
/// ```
pub struct ModuleScanner {
    root_path: PathBuf,
}

/// Result of a module scan.
///
/// Contains every artifact path discovered under the module root and any warnings
/// encountered while walking the tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Paths to all `*Controller.java` files, in sorted traversal order
    pub controller_files: Vec<PathBuf>,
    /// Paths to all `*Application.java` files, in sorted traversal order
    pub application_files: Vec<PathBuf>,
    /// The shallowest `pom.xml`, if any
    pub manifest: Option<PathBuf>,
    /// `README.md` directly inside the module root, if present
    pub readme: Option<PathBuf>,
    /// Configuration files at any depth
    pub config_files: Vec<PathBuf>,
    /// `<module-name>.http` directly inside the module root, if present
    pub http_file: Option<PathBuf>,
    /// Warning messages for any issues encountered (e.g., inaccessible directories)
    pub warnings: Vec<String>,
}

impl ModuleScanner {
    /// Creates a new `ModuleScanner` for the specified module root.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Scans the module tree and classifies every recognized artifact.
    ///
    /// Entries that cannot be accessed are logged, recorded in [`ScanResult::warnings`],
    /// and skipped; the scan itself keeps going.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the root does not exist or is not a directory.
    pub fn scan(&self) -> Result<ScanResult> {
        if !self.root_path.is_dir() {
            return Err(Error::InvalidInput(format!(
                "Module path does not exist or is not a directory: {}",
                self.root_path.display()
            )));
        }

        let mut result = ScanResult::default();
        let mut manifest_depth = usize::MAX;

        for entry in WalkDir::new(&self.root_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                if e.depth() == 0 {
                    return true;
                }

                let file_name = e.file_name().to_string_lossy();
                let is_hidden = file_name.starts_with('.');
                let is_target = e.file_type().is_dir() && file_name == "target";

                !is_hidden && !is_target
            })
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    result.warnings.push(warning);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy();

            if file_name.ends_with(CONTROLLER_SUFFIX) {
                debug!("Found controller: {}", path.display());
                result.controller_files.push(path.to_path_buf());
            } else if file_name.ends_with(APPLICATION_SUFFIX) {
                debug!("Found application class: {}", path.display());
                result.application_files.push(path.to_path_buf());
            } else if file_name == MANIFEST_FILE {
                if entry.depth() < manifest_depth {
                    manifest_depth = entry.depth();
                    result.manifest = Some(path.to_path_buf());
                }
            } else if CONFIG_FILES.iter().any(|name| *name == file_name) {
                result.config_files.push(path.to_path_buf());
            }
        }

        let readme = self.root_path.join(README_FILE);
        if readme.is_file() {
            result.readme = Some(readme);
        }

        if let Some(name) = module_name(&self.root_path) {
            let http_file = self
                .root_path
                .join(format!("{}.{}", name, HTTP_FILE_EXTENSION));
            if http_file.is_file() {
                result.http_file = Some(http_file);
            }
        }

        debug!(
            "Scan complete: {} controllers, {} config files, manifest: {}",
            result.controller_files.len(),
            result.config_files.len(),
            result.manifest.is_some()
        );

        Ok(result)
    }
}

/// Returns the module's display name: the last component of the root path.
///
/// Relative roots such as `.` are resolved first so they still yield a real name.
pub fn module_name(root: &Path) -> Option<String> {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
