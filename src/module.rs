use crate::error::Result;
use crate::extractor::controller::ControllerExtractor;
use crate::extractor::manifest::ManifestExtractor;
use crate::extractor::{ControllerRecord, ManifestInfo};
use crate::scanner::{module_name, ModuleScanner, ScanResult};
use crate::source::SourceReader;
use log::{debug, info};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Lines of an existing README searched for a reusable description (0-based, end exclusive).
const DESCRIPTION_LINES: std::ops::Range<usize> = 2..10;

/// Everything known about one module, handed from extraction to rendering.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModuleInfo {
    /// Module display name (last component of the module root)
    pub name: String,
    /// Description reused from an existing README
    pub prior_description: Option<String>,
    /// Controllers in scan order
    pub controllers: Vec<ControllerRecord>,
    pub manifest: ManifestInfo,
    /// File name of the `<module-name>.http` request file, if present
    pub http_file: Option<String>,
    /// Stem of the first `*Application.java` class
    pub main_class: Option<String>,
    pub config_files: Vec<PathBuf>,
}

impl ModuleInfo {
    /// Whether any controller exposes at least one endpoint.
    pub fn has_endpoints(&self) -> bool {
        self.controllers.iter().any(|c| !c.endpoints.is_empty())
    }

    pub fn endpoint_count(&self) -> usize {
        self.controllers.iter().map(|c| c.endpoints.len()).sum()
    }
}

/// Builds a [`ModuleInfo`] from a module root.
///
/// Runs the scanner, reads every discovered artifact and feeds it to the matching extractor.
/// An artifact that cannot be read is logged and contributes nothing; only an invalid module
/// root aborts the analysis.
///
/// # Example
///
/// ```no_run
/// use readme_from_source::module::ModuleAnalyzer;
/// use std::path::Path;
///
/// let info = ModuleAnalyzer::analyze(Path::new("./basic/chat")).unwrap();
/// println!("{}: {} controllers", info.name, info.controllers.len());
/// ```
pub struct ModuleAnalyzer;

impl ModuleAnalyzer {
    /// Scans and extracts the module at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidInput`] if `root` is not an existing directory.
    pub fn analyze(root: &Path) -> Result<ModuleInfo> {
        info!("Analyzing module: {}", root.display());

        let scan_result = ModuleScanner::new(root.to_path_buf()).scan()?;
        let name = module_name(root).unwrap_or_else(|| root.display().to_string());

        Ok(Self::from_scan(name, scan_result))
    }

    /// Extracts a [`ModuleInfo`] from an already completed scan.
    pub fn from_scan(name: String, scan_result: ScanResult) -> ModuleInfo {
        let prior_description = SourceReader::read_optional(scan_result.readme.as_deref())
            .and_then(|readme| prior_description(&readme.content));
        if let Some(description) = &prior_description {
            debug!("Reusing README description: {}", description);
        }

        let controllers: Vec<ControllerRecord> =
            SourceReader::read_files(&scan_result.controller_files)
                .iter()
                .filter_map(ControllerExtractor::extract)
                .collect();

        let manifest = SourceReader::read_optional(scan_result.manifest.as_deref())
            .map(|source| ManifestExtractor::extract(&source))
            .unwrap_or_default();

        let main_class = scan_result.application_files.first().and_then(|path| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        });

        let http_file = scan_result.http_file.as_deref().and_then(|path| {
            path.file_name()
                .map(|file_name| file_name.to_string_lossy().into_owned())
        });

        ModuleInfo {
            name,
            prior_description,
            controllers,
            manifest,
            http_file,
            main_class,
            config_files: scan_result.config_files,
        }
    }
}

/// First non-blank, non-heading line near the top of an existing README.
///
/// A trailing `。` is dropped because the renderer appends its own.
pub fn prior_description(readme: &str) -> Option<String> {
    readme
        .lines()
        .skip(DESCRIPTION_LINES.start)
        .take(DESCRIPTION_LINES.len())
        .find(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| line.trim().trim_end_matches('。').to_string())
        .filter(|description| !description.is_empty())
}
