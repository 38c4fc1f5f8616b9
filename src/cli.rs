use crate::module::{ModuleAnalyzer, ModuleInfo};
use crate::renderer::{ReadmeRenderer, RenderOptions, DEFAULT_BASE_URL};
use crate::scanner::README_FILE;
use crate::writer::{serialize_json, write_to_file};
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use log::{debug, info, LevelFilter};
use std::path::PathBuf;

/// Printed to stdout when the command line cannot be parsed.
pub const USAGE: &str = "\
Usage: readme-from-source <MODULE_PATH> [OUTPUT_FILE]
Example: readme-from-source basic/chat
Example: readme-from-source basic/chat custom_README.md";

/// README generator - Generate a README.md for a Spring Boot module from its controllers and pom.xml
#[derive(Parser, Debug)]
#[command(name = "readme-from-source")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the module directory
    #[arg(value_name = "MODULE_PATH")]
    pub module_path: PathBuf,

    /// Output file path (defaults to README.md inside the module for markdown, stdout for json)
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_path: Option<PathBuf>,

    /// Output format (markdown or json)
    #[arg(short = 'f', long = "format", value_enum, default_value = "markdown")]
    pub output_format: OutputFormat,

    /// Base URL used in example requests
    #[arg(long = "base-url", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Show each endpoint's declared HTTP method instead of GET
    #[arg(long = "declared-methods")]
    pub declared_methods: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered README
    Markdown,
    /// Extracted module information
    Json,
}

impl CliArgs {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            base_url: self.base_url.clone(),
            declared_methods: self.declared_methods,
        }
    }

    /// Where a Markdown README goes when no output file is given.
    pub fn readme_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| self.module_path.join(README_FILE))
    }
}

/// Parse command line arguments, exiting with status 1 and the usage text on failure.
pub fn parse_args() -> CliArgs {
    match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => exit_with_usage(e),
    }
}

/// Terminates the process for an argument error.
///
/// `--help` and `--version` keep clap's own behavior. Everything else prints the clap
/// diagnostic to stderr and [`USAGE`] to stdout, then exits with status 1.
pub fn exit_with_usage(err: clap::Error) -> ! {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.exit();
    }

    if err.print().is_err() {
        eprintln!("{}", err);
    }
    println!("{}", USAGE);
    std::process::exit(1);
}

/// Level to force on the logger, or `None` to leave the `RUST_LOG` directives in charge.
///
/// `-v` always selects Debug. Without it, Info is the default only when `RUST_LOG` is unset.
pub fn log_level_override(verbose: bool, env_filter_set: bool) -> Option<LevelFilter> {
    if verbose {
        Some(LevelFilter::Debug)
    } else if env_filter_set {
        None
    } else {
        Some(LevelFilter::Info)
    }
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.module_path.exists() {
        anyhow::bail!(
            "Module path does not exist: {}",
            args.module_path.display()
        );
    }

    if !args.module_path.is_dir() {
        anyhow::bail!(
            "Module path is not a directory: {}",
            args.module_path.display()
        );
    }

    info!("Module path: {}", args.module_path.display());
    info!("Output format: {:?}", args.output_format);
    match (&args.output_path, args.output_format) {
        (Some(output), _) => info!("Output file: {}", output.display()),
        (None, OutputFormat::Markdown) => info!("Output file: {}", args.readme_path().display()),
        (None, OutputFormat::Json) => info!("Output: stdout"),
    }

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    info!("Generating README for module: {}", args.module_path.display());

    // Step 1: Scan the module and extract controllers, manifest and the rest
    let module_info = ModuleAnalyzer::analyze(&args.module_path)
        .with_context(|| format!("Failed to analyze module: {}", args.module_path.display()))?;

    log_summary(&module_info);

    // Step 2: Render or dump, then write
    match args.output_format {
        OutputFormat::Markdown => {
            let renderer = ReadmeRenderer::new(args.render_options());
            let content = renderer.render_now(&module_info);

            let output_path = args.readme_path();
            info!("Writing output to: {}", output_path.display());
            write_to_file(&content, &output_path)?;

            println!("README.md generated successfully: {}", output_path.display());
        }
        OutputFormat::Json => {
            let content = serialize_json(&module_info)?;

            if let Some(output_path) = &args.output_path {
                info!("Writing output to: {}", output_path.display());
                write_to_file(&content, output_path)?;
                println!("Module info written successfully: {}", output_path.display());
            } else {
                println!("{}", content);
            }
        }
    }

    Ok(())
}

fn log_summary(module_info: &ModuleInfo) {
    info!(
        "Found {} controllers with {} endpoints",
        module_info.controllers.len(),
        module_info.endpoint_count()
    );
    for controller in &module_info.controllers {
        info!(
            "  - {}: {} methods",
            controller.display_name,
            controller.endpoints.len()
        );
    }
    if let Some(main_class) = &module_info.main_class {
        info!("Main class: {}", main_class);
    }
    for config_file in &module_info.config_files {
        info!("Config file: {}", config_file.display());
    }
    info!(
        "Manifest: {} ({} dependencies)",
        module_info.manifest.artifact_id.as_deref().unwrap_or("<none>"),
        module_info.manifest.dependencies.len()
    );
}
