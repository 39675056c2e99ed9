//! Selection and editing state for the active entry.
//!
//! This module contains the controller that sits between the user-facing
//! surface and the entry store. It tracks which entry is active, whether it is
//! being viewed or edited, and the two-phase delete confirmation. All side
//! effects go through [`EntryStore`]; the controller itself holds no
//! persistent state.
//!
//! Time is passed into the methods that need it, so the delete confirmation
//! window can be exercised in tests without sleeping.

use crate::constants;
use crate::errors::StoreError;
use crate::store::EntryStore;
use std::time::{Duration, Instant};
use tracing::debug;

/// Where the user currently is, relative to the entry list.
///
/// `PendingDelete` is the explicit form of the two-phase delete button: the
/// first delete action arms it with a deadline, and only a second action
/// before the deadline removes data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No entry is active. Valid whenever the store is empty.
    NoSelection,
    /// An entry is shown read-only.
    Viewing { entry: String },
    /// An entry is open for modification. Edits live in the UI's buffers
    /// until saved; they are lost if another entry is selected first.
    Editing { entry: String },
    /// A delete has been requested once and awaits confirmation.
    PendingDelete { entry: String, deadline: Instant },
}

/// Result of selecting an entry from the list.
#[derive(Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The entry was loaded and is now viewed.
    Selected { entry: String, content: String },
    /// The entry is listed but its file has gone missing on disk.
    Missing { entry: String },
    /// Nothing to select (empty store or unknown name).
    Ignored,
}

/// Result of a save action.
#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The entry was written; `entry` is its (possibly renamed) title.
    Saved { entry: String },
    /// Another entry already uses the requested title; nothing was mutated.
    Conflict { title: String },
    /// The title could not be used as a filename, or the write failed.
    InvalidName,
    /// No entry was active.
    Ignored,
}

/// Result of a delete action.
#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// First action: the delete is armed until the deadline passes.
    Armed,
    /// Second action inside the window: the entry is gone. `next` is the
    /// newly selected entry, or None if the store emptied.
    Removed { next: Option<String> },
    /// No entry was active.
    Ignored,
}

/// Mediates user intents against the entry store.
///
/// # Examples
///
/// ```no_run
/// use jotter::session::Session;
/// use jotter::store::EntryStore;
/// use std::path::Path;
/// use std::time::{Duration, Instant};
///
/// let store = EntryStore::open(Path::new("/home/me/Documents/jotter"))?;
/// let mut session = Session::new(store, Duration::from_millis(1500));
///
/// let first = session.entries()[0].clone();
/// session.select(&first);
/// session.delete(Instant::now()); // arms only, nothing deleted yet
/// # Ok::<(), jotter::errors::StoreError>(())
/// ```
#[derive(Debug)]
pub struct Session {
    store: EntryStore,
    state: SessionState,
    confirm_window: Duration,
}

impl Session {
    /// Creates a controller over an opened store.
    pub fn new(store: EntryStore, confirm_window: Duration) -> Self {
        Session {
            store,
            state: SessionState::NoSelection,
            confirm_window,
        }
    }

    /// Current state of the controller.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Sorted entry names, straight from the store.
    pub fn entries(&self) -> &[String] {
        self.store.entries()
    }

    /// Name of the active entry, if any.
    pub fn active(&self) -> Option<&str> {
        match &self.state {
            SessionState::NoSelection => None,
            SessionState::Viewing { entry }
            | SessionState::Editing { entry }
            | SessionState::PendingDelete { entry, .. } => Some(entry),
        }
    }

    /// True while the active entry is open for modification.
    pub fn is_editing(&self) -> bool {
        matches!(self.state, SessionState::Editing { .. })
    }

    /// True while a delete awaits its confirming action.
    pub fn delete_armed(&self) -> bool {
        matches!(self.state, SessionState::PendingDelete { .. })
    }

    /// Makes `name` the active entry and loads its content.
    ///
    /// Selecting a new entry discards any unsaved edits without prompting;
    /// that mirrors the surface this models and is accepted behavior. It also
    /// disarms a pending delete. Selection is ignored when the store is empty
    /// or the name is not listed.
    pub fn select(&mut self, name: &str) -> SelectOutcome {
        if !self.store.contains(name) {
            return SelectOutcome::Ignored;
        }

        match self.store.read(name) {
            Ok(content) => {
                self.state = SessionState::Viewing {
                    entry: name.to_string(),
                };
                SelectOutcome::Selected {
                    entry: name.to_string(),
                    content,
                }
            }
            Err(StoreError::NotFound { .. }) => {
                // The file vanished between listing and reading. The entry
                // stays selected so the list and the error indicator agree.
                self.state = SessionState::Viewing {
                    entry: name.to_string(),
                };
                SelectOutcome::Missing {
                    entry: name.to_string(),
                }
            }
            Err(_) => SelectOutcome::Ignored,
        }
    }

    /// Opens the active entry for modification.
    ///
    /// Does nothing without an active entry.
    pub fn edit(&mut self) {
        if let Some(entry) = self.active().map(str::to_string) {
            self.state = SessionState::Editing { entry };
        }
    }

    /// Saves the active entry under the given title with the given content.
    ///
    /// The effective title is `title.trim()`, falling back to the literal
    /// `unnamed file` when empty. A title collision with a different entry
    /// rejects the save without mutating anything; an unusable title or a
    /// failed write reports `InvalidName` and the entry stays in editing.
    /// On success the controller returns to viewing the (possibly renamed)
    /// entry.
    pub fn save(&mut self, title: &str, content: &str) -> SaveOutcome {
        let Some(current) = self.active().map(str::to_string) else {
            return SaveOutcome::Ignored;
        };

        let trimmed = title.trim();
        let effective = if trimmed.is_empty() {
            constants::UNNAMED_ENTRY_TITLE
        } else {
            trimmed
        };

        if effective != current {
            match self.store.rename(&current, effective) {
                Ok(()) => {}
                Err(StoreError::Conflict { name }) => {
                    return SaveOutcome::Conflict { title: name };
                }
                Err(e) => {
                    debug!(error = %e, "rename during save failed");
                    return SaveOutcome::InvalidName;
                }
            }
        }

        match self.store.write(effective, content) {
            Ok(()) => {
                self.state = SessionState::Viewing {
                    entry: effective.to_string(),
                };
                SaveOutcome::Saved {
                    entry: effective.to_string(),
                }
            }
            Err(e) => {
                debug!(error = %e, "write during save failed");
                // A successful rename above already took effect; keep editing
                // under the new name so the list stays truthful.
                self.state = SessionState::Editing {
                    entry: effective.to_string(),
                };
                SaveOutcome::InvalidName
            }
        }
    }

    /// Handles a delete action at time `now`.
    ///
    /// The first action arms the confirmation; a second action before the
    /// deadline removes the entry and selects the neighbor that took its list
    /// position (or clears the selection when the store emptied). An action
    /// after the deadline re-arms instead of deleting, restarting the
    /// two-step process.
    pub fn delete(&mut self, now: Instant) -> DeleteOutcome {
        let Some(entry) = self.active().map(str::to_string) else {
            return DeleteOutcome::Ignored;
        };

        if let SessionState::PendingDelete { deadline, .. } = self.state {
            if now <= deadline {
                return self.remove_active(&entry);
            }
        }

        self.state = SessionState::PendingDelete {
            entry,
            deadline: now + self.confirm_window,
        };
        DeleteOutcome::Armed
    }

    fn remove_active(&mut self, entry: &str) -> DeleteOutcome {
        let position = self.store.entries().iter().position(|e| e == entry);

        if let Err(e) = self.store.remove(entry) {
            debug!(error = %e, "delete failed");
            self.state = SessionState::Viewing {
                entry: entry.to_string(),
            };
            return DeleteOutcome::Ignored;
        }

        let remaining = self.store.entries();
        if remaining.is_empty() {
            self.state = SessionState::NoSelection;
            return DeleteOutcome::Removed { next: None };
        }

        // The neighbor that slid into the deleted entry's position, clamped
        // to the end of the list.
        let idx = position.unwrap_or(0).min(remaining.len() - 1);
        let next = remaining[idx].clone();
        self.state = SessionState::Viewing {
            entry: next.clone(),
        };
        DeleteOutcome::Removed { next: Some(next) }
    }

    /// Expires a pending delete whose window has elapsed.
    ///
    /// Returns true when the state changed, so callers know to redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = match &self.state {
            SessionState::PendingDelete { entry, deadline } if now > *deadline => {
                Some(entry.clone())
            }
            _ => None,
        };

        if let Some(entry) = expired {
            self.state = SessionState::Viewing { entry };
            return true;
        }
        false
    }

    /// Creates a fresh entry, selects it, and opens it for editing.
    ///
    /// Returns the new entry's name and its placeholder content.
    pub fn new_entry(&mut self) -> Result<(String, String), StoreError> {
        let name = self.store.create()?;
        let content = self.store.read(&name)?;
        self.state = SessionState::Editing {
            entry: name.clone(),
        };
        Ok((name, content))
    }
}
