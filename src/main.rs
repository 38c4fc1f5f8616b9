//! README generator - Command-line tool for documenting Spring Boot modules.
//!
//! Scans a module directory for `*Controller.java` files and `pom.xml`, extracts the HTTP
//! endpoints and dependencies by pattern matching, and writes a README.md describing them.
//!
//! # Usage
//!
//! ```bash
//! readme-from-source <MODULE_PATH> [OUTPUT_FILE]
//! ```
//!
//! # Examples
//!
//! Write `basic/chat/README.md`:
//! ```bash
//! readme-from-source basic/chat
//! ```
//!
//! Write somewhere else, showing declared HTTP methods:
//! ```bash
//! readme-from-source basic/chat custom_README.md --declared-methods
//! ```
//!
//! Dump what extraction found:
//! ```bash
//! readme-from-source basic/chat -f json -v
//! ```

use anyhow::Result;
use log::info;
use readme_from_source::cli;

fn main() -> Result<()> {
    let args = cli::parse_args();

    let env_filter_set = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();

    let mut builder = env_logger::Builder::from_default_env();
    if let Some(log_level) = cli::log_level_override(args.verbose, env_filter_set) {
        builder.filter_level(log_level);
    }
    builder.init();

    info!("README generator starting...");

    let args = cli::parse_args_from_parsed(args)?;

    cli::run(args)?;

    info!("README generation completed successfully");

    Ok(())
}
