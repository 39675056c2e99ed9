/*!
# Jotter

Jotter is a single-user journaling application for the terminal. Entries are
plain text files in one directory; the filename is the entry's title. The
interactive surface lists entries, shows the active one, and offers four
actions: New, Edit, Save, and Delete (with a two-step confirmation).

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `store`: Directory-backed entry storage with a sorted in-memory index
- `session`: Selection and editing state machine over the store
- `ui`: Thin ratatui/crossterm surface relaying key presses to the session

## Usage Example

```rust,no_run
use jotter::{Config, Session};
use jotter::store::EntryStore;

fn main() -> jotter::AppResult<()> {
    // Load configuration
    let config = Config::load()?;
    config.validate()?;

    // Open the store (creates and seeds the directory on first run)
    let store = EntryStore::open(&config.entries_dir)?;

    // Run the interactive surface
    jotter::ui::run(Session::new(store, config.confirm_window))
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants shared across the application
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Selection and editing state over the entry store
pub mod session;
/// Directory-backed entry storage
pub mod store;
/// Interactive terminal surface
pub mod ui;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult, StoreError};
pub use session::Session;
pub use store::EntryStore;
