/*!
# Jotter - A Plain-File Journaling App

Jotter keeps journal entries as plain text files in a single directory and
presents them in an interactive terminal UI: a list of entries on the left, a
title and content view on the right, and four actions (New, Edit, Save,
Delete). Deleting asks for a second confirming press within a short window.

This file contains the main application flow, coordinating the various
components to implement the journal functionality.

## Usage

```
jotter [OPTIONS]

Options:
  -d, --dir <DIR>   Directory holding the entry files (overrides JOTTER_DIR)
  -v, --verbose     Print verbose output
  -h, --help        Print help information
  -V, --version     Print version information
```

## Configuration

The application can be configured with the following environment variables:
- `JOTTER_DIR`: The directory to store entries (defaults to "~/Documents/jotter")
- `JOTTER_CONFIRM_MS`: The delete confirmation window in milliseconds (defaults to 1500)
*/

use clap::Parser;
use jotter::cli::CliArgs;
use jotter::config::Config;
use jotter::errors::AppResult;
use jotter::session::Session;
use jotter::store::EntryStore;
use jotter::ui;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the jotter application.
///
/// This function coordinates the overall application flow:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Loads and validates configuration
/// 4. Opens the entry store (creating and seeding the directory on first run)
/// 5. Hands the store to the session controller and runs the terminal UI
///
/// # Returns
///
/// A Result that is Ok(()) if the application ran successfully,
/// or an AppError if an error occurred at any point in the flow.
///
/// # Errors
///
/// This function can return various types of errors, including:
/// - Configuration errors (missing or invalid configuration)
/// - I/O errors (terminal setup failures, permission denied, etc.)
/// - Store errors (the entries directory could not be created or seeded)
fn main() -> AppResult<()> {
    // Parse command-line arguments
    let args = CliArgs::parse();

    // Initialize logging to stderr; the UI owns stdout
    let default_filter = if args.verbose {
        "jotter=debug"
    } else {
        "jotter=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting jotter");
    debug!(?args, "CLI arguments");

    // Load and validate configuration, letting --dir override the environment
    let mut config = Config::load()?;
    if let Some(dir) = &args.dir {
        config.entries_dir = PathBuf::from(dir);
    }
    config.validate()?;

    // Open the entry store
    debug!(dir = %config.entries_dir.display(), "Opening entry store");
    let store = EntryStore::open(&config.entries_dir)?;

    // Run the interactive surface
    info!("Entering interactive UI");
    ui::run(Session::new(store, config.confirm_window))?;

    info!("Exited cleanly");
    Ok(())
}
