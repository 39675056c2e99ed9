//! Constants used throughout the application.
//!
//! This module contains all constants used in the Jotter application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "jotter";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A plain-file journaling app with an interactive terminal UI";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Jotter entries directory.
pub const ENV_VAR_JOTTER_DIR: &str = "JOTTER_DIR";
/// Environment variable overriding the delete confirmation window (milliseconds).
pub const ENV_VAR_JOTTER_CONFIRM_MS: &str = "JOTTER_CONFIRM_MS";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for entries within the user's home directory.
pub const DEFAULT_ENTRIES_SUBDIR: &str = "Documents/jotter";

// Entry Naming
/// Prefix used when generating names for freshly created entries.
pub const NEW_ENTRY_PREFIX: &str = "new entry ";
/// Title an entry receives when saved with an empty or whitespace-only title.
pub const UNNAMED_ENTRY_TITLE: &str = "unnamed file";

// Entry Content
/// Instructional content written to the seeded entry on first run.
pub const BOOTSTRAP_CONTENT: &str = "type here to start journaling.\n\n     click on edit to start writing,\n     click on save to save the entry,\n     click on delete twice to delete a entry\n     click on new to create a new entry";

/// Builds the placeholder content for a freshly created entry.
pub fn new_entry_placeholder(n: usize) -> String {
    format!("start writing in entry {}", n)
}

// UI Indicators
/// Title-field text shown when a save is rejected because the name is unusable.
pub const INVALID_NAME_INDICATOR: &str = "Invalid file name";
/// Title-field text shown when the selected entry's file has gone missing.
pub const MISSING_ENTRY_TITLE: &str = "File Not Found";
/// Content-field text shown when the selected entry's file has gone missing.
pub const MISSING_ENTRY_BODY: &str = "Error in file placement";
/// Title-field prompt shown once the last entry has been deleted.
pub const EMPTY_STORE_TITLE_PROMPT: &str = "Create new file to start journaling";
/// Content-field prompt shown once the last entry has been deleted.
pub const EMPTY_STORE_BODY_PROMPT: &str = "...";
/// Default placeholder for an empty title field.
pub const TITLE_PLACEHOLDER: &str = "Title of Entry";
/// Default placeholder for an empty content field.
pub const CONTENT_PLACEHOLDER: &str = "Entry";

/// Builds the title-field indicator for a rejected conflicting save.
pub fn conflict_indicator(title: &str) -> String {
    format!("{} already exists", title)
}

// Delete Confirmation
/// Default width of the delete confirmation window, in milliseconds.
pub const DEFAULT_CONFIRM_WINDOW_MS: u64 = 1500;

// Date/Time Display
/// Date format shown next to the application name in the UI header.
pub const HEADER_DATE_FORMAT: &str = "%d/%m/%Y";
