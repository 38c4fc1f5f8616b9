//! README generator - Automatic module documentation from Spring Boot sources.
//!
//! This library scans a Spring Boot module, extracts its HTTP endpoints and Maven dependencies
//! by text pattern matching (no Java parsing), and renders a README.md from a fixed template.
//! Extraction heuristics are bounded: a handler signature must follow its mapping annotation
//! within 10 lines, doc comments are looked for within the 10 lines before it, and request
//! parameters within the 200 characters after it.
//!
//! # Architecture
//!
//! 1. [`scanner`] - Finds controllers, application classes, `pom.xml`, config and request files
//! 2. [`source`] - Reads artifacts as text, tolerating per-file failures
//! 3. [`extractor`] - Turns controller and manifest text into structured records
//! 4. [`module`] - Aggregates everything into a [`module::ModuleInfo`]
//! 5. [`renderer`] - Renders the README from a `ModuleInfo`
//! 6. [`writer`] - Writes the README, or a JSON dump of the `ModuleInfo`
//!
//! # Example Usage
//!
//! ```no_run
//! use readme_from_source::{
//!     module::ModuleAnalyzer,
//!     renderer::{ReadmeRenderer, RenderOptions},
//!     writer::write_to_file,
//! };
//! use std::path::Path;
//!
//! let module = Path::new("./basic/chat");
//! let info = ModuleAnalyzer::analyze(module).unwrap();
//!
//! let readme = ReadmeRenderer::new(RenderOptions::default()).render_now(&info);
//! write_to_file(&readme, &module.join("README.md")).unwrap();
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod cli;
pub mod error;
pub mod extractor;
pub mod module;
pub mod renderer;
pub mod scanner;
pub mod source;
pub mod writer;
