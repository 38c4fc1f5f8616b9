//! Extraction of structured facts from module artifacts.
//!
//! Extraction is pattern matching over raw text, not parsing: controller files are searched
//! for Spring mapping annotations and `pom.xml` for `<artifactId>` elements. Malformed or
//! unconventional files may yield incomplete results, which is accepted.
//!
//! - Controllers: see [`controller::ControllerExtractor`]
//! - Manifest: see [`manifest::ManifestExtractor`]
//!
//! # Example
//!
//! ```no_run
//! use readme_from_source::extractor::controller::ControllerExtractor;
//! use readme_from_source::source::SourceReader;
//! use std::path::Path;
//!
//! let source = SourceReader::read_file(Path::new("TimeController.java")).unwrap();
//! if let Some(record) = ControllerExtractor::extract(&source) {
//!     println!("{} has {} endpoints", record.display_name, record.endpoints.len());
//! }
//! ```

pub mod controller;
pub mod manifest;

use serde::Serialize;

/// HTTP methods recognized on mapping annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET method
    Get,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP DELETE method
    Delete,
    /// HTTP PATCH method
    Patch,
}

impl HttpMethod {
    /// Upper-case verb as written in requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `@RequestParam` with both a name and a default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// The parameter name
    pub name: String,
    /// Declared `defaultValue`
    pub default_value: String,
}

impl Parameter {
    /// Create a new Parameter
    pub fn new(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: default_value.into(),
        }
    }
}

/// One discovered HTTP operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointDescriptor {
    /// Name of the handler method
    pub handler_name: String,
    /// Base path joined with the local path; never empty, always starts with `/`
    pub path: String,
    /// Verb implied by the mapping annotation
    pub method: HttpMethod,
    /// Parameters in declaration order
    pub parameters: Vec<Parameter>,
    /// First text line of the preceding doc comment, or empty
    pub doc_summary: String,
}

impl EndpointDescriptor {
    /// Create a descriptor, joining `base_path` and `local_path` and forcing a leading `/`.
    pub fn new(
        handler_name: impl Into<String>,
        base_path: &str,
        local_path: &str,
        method: HttpMethod,
    ) -> Self {
        Self {
            handler_name: handler_name.into(),
            path: join_path(base_path, local_path),
            method,
            parameters: Vec::new(),
            doc_summary: String::new(),
        }
    }
}

/// One endpoint-bearing controller file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerRecord {
    /// File stem, e.g. `ChatController`
    pub display_name: String,
    /// Class-level route prefix, or empty
    pub base_path: String,
    /// Endpoints in file order
    pub endpoints: Vec<EndpointDescriptor>,
}

/// Summary of the dependency manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManifestInfo {
    /// First `<artifactId>` in the file
    pub artifact_id: Option<String>,
    /// Dependency artifact ids in declaration order, duplicates kept
    pub dependencies: Vec<String>,
}

fn join_path(base_path: &str, local_path: &str) -> String {
    let joined = format!("{}{}", base_path, local_path);
    if joined.starts_with('/') {
        joined
    } else {
        format!("/{}", joined)
    }
}
