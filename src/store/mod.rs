//! Entry storage and file management.
//!
//! This module contains the directory-backed entry store. Each entry is one
//! plain-text file whose filename is also its display title. The store keeps
//! an in-memory, lexicographically sorted index of entry names, rebuilt from
//! the directory on open and updated incrementally on every mutation, so
//! ordering is deterministic and independent of the filesystem's iteration
//! order.

use crate::constants;
use crate::errors::StoreError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Checks whether a string is usable as an entry filename.
///
/// Rejects empty names, the reserved `.` and `..` names, and names containing
/// path separators or NUL bytes. This keeps every entry inside the entries
/// directory and surfaces bad titles as an error rather than a filesystem
/// panic or path escape.
fn validate_entry_name(name: &str) -> Result<(), StoreError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');

    if invalid {
        return Err(StoreError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// A directory of plain-text journal entries with a sorted in-memory index.
///
/// Invariants:
/// - the index is always lexicographically sorted (case-sensitive, ascending)
/// - the index holds exactly the set of entry files in the directory, assuming
///   no external process mutates it (the directory is owned by one running
///   instance)
/// - no indexed name is empty or contains path separators
///
/// # Examples
///
/// ```no_run
/// use jotter::store::EntryStore;
/// use std::path::Path;
///
/// let mut store = EntryStore::open(Path::new("/home/me/Documents/jotter"))?;
/// let name = store.create()?;
/// store.write(&name, "dear diary")?;
/// # Ok::<(), jotter::errors::StoreError>(())
/// ```
#[derive(Debug)]
pub struct EntryStore {
    dir: PathBuf,
    index: Vec<String>,
}

impl EntryStore {
    /// Opens the store rooted at `dir`, creating and seeding it if needed.
    ///
    /// This is the single initialization step for entry storage: the directory
    /// is created if absent, and if it contains no entries a seeded entry
    /// named `new entry 1` is written with fixed instructional content so a
    /// first-time user never faces an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the directory cannot be created or
    /// read, or if writing the seeded entry fails.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| StoreError::Storage {
                name: dir.display().to_string(),
                source: e,
            })?;
            debug!(dir = %dir.display(), "created entries directory");
        }

        let mut store = EntryStore {
            dir: dir.to_path_buf(),
            index: Vec::new(),
        };
        store.rebuild_index()?;

        if store.index.is_empty() {
            let seeded = format!("{}1", constants::NEW_ENTRY_PREFIX);
            store.write_new(&seeded, constants::BOOTSTRAP_CONTENT)?;
            debug!(entry = %seeded, "seeded first-run entry");
        }

        Ok(store)
    }

    /// Returns the sorted list of entry names.
    pub fn entries(&self) -> &[String] {
        &self.index
    }

    /// Returns true if an entry with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.binary_search_by(|e| e.as_str().cmp(name)).is_ok()
    }

    /// Returns the path of the entry file for `name`.
    fn entry_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Rescans the directory and rebuilds the sorted index from scratch.
    fn rebuild_index(&mut self) -> Result<(), StoreError> {
        let read_dir = fs::read_dir(&self.dir).map_err(|e| StoreError::Storage {
            name: self.dir.display().to_string(),
            source: e,
        })?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| StoreError::Storage {
                name: self.dir.display().to_string(),
                source: e,
            })?;
            // Non-files and names that are not valid UTF-8 are not entries.
            if !entry.path().is_file() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }

        names.sort();
        self.index = names;
        Ok(())
    }

    /// Inserts a name into the index, keeping it sorted.
    fn index_insert(&mut self, name: &str) {
        if let Err(pos) = self.index.binary_search_by(|e| e.as_str().cmp(name)) {
            self.index.insert(pos, name.to_string());
        }
    }

    /// Removes a name from the index if present.
    fn index_remove(&mut self, name: &str) {
        if let Ok(pos) = self.index.binary_search_by(|e| e.as_str().cmp(name)) {
            self.index.remove(pos);
        }
    }

    /// Writes a brand-new entry file and records it in the index.
    fn write_new(&mut self, name: &str, content: &str) -> Result<(), StoreError> {
        validate_entry_name(name)?;
        fs::write(self.entry_path(name), content).map_err(|e| StoreError::Storage {
            name: name.to_string(),
            source: e,
        })?;
        self.index_insert(name);
        Ok(())
    }

    /// Creates a new entry with a generated name and placeholder content.
    ///
    /// The name is `new entry {n}` where `n` is the smallest positive integer
    /// not already taken (linear probe starting at 1). A gap left by a deleted
    /// entry is reused only when it is the lowest free suffix. The placeholder
    /// content is `start writing in entry {n}`.
    ///
    /// # Returns
    ///
    /// The generated entry name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the entry file cannot be written.
    pub fn create(&mut self) -> Result<String, StoreError> {
        let mut n = 1;
        let name = loop {
            let candidate = format!("{}{}", constants::NEW_ENTRY_PREFIX, n);
            if !self.contains(&candidate) && !self.entry_path(&candidate).exists() {
                break candidate;
            }
            n += 1;
        };

        self.write_new(&name, &constants::new_entry_placeholder(n))?;
        debug!(entry = %name, "created entry");
        Ok(name)
    }

    /// Reads the full content of an entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the underlying file is missing, for
    /// example because it was deleted externally after the index was built.
    /// Other read failures surface as `StoreError::Storage`.
    pub fn read(&self, name: &str) -> Result<String, StoreError> {
        match fs::read_to_string(self.entry_path(name)) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(StoreError::Storage {
                name: name.to_string(),
                source: e,
            }),
        }
    }

    /// Overwrites the content of an existing entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidName` if `name` is not a usable filename,
    /// or `StoreError::Storage` if the write fails.
    pub fn write(&mut self, name: &str, content: &str) -> Result<(), StoreError> {
        validate_entry_name(name)?;
        fs::write(self.entry_path(name), content).map_err(|e| StoreError::Storage {
            name: name.to_string(),
            source: e,
        })?;
        // The entry may be new to the index when a caller writes after a
        // rename that this store did not perform.
        self.index_insert(name);
        Ok(())
    }

    /// Renames an entry, keeping the index sorted.
    ///
    /// Renaming an entry to its current name is a no-op success. Renaming onto
    /// a different existing entry is rejected without mutating anything.
    ///
    /// # Errors
    ///
    /// - `StoreError::InvalidName` if `new` is not a usable filename
    /// - `StoreError::Conflict` if `new` names a different existing entry
    /// - `StoreError::NotFound` if `old` does not exist
    /// - `StoreError::Storage` if the underlying rename fails
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), StoreError> {
        if old == new {
            return Ok(());
        }

        validate_entry_name(new)?;

        if self.contains(new) || self.entry_path(new).exists() {
            return Err(StoreError::Conflict {
                name: new.to_string(),
            });
        }

        match fs::rename(self.entry_path(old), self.entry_path(new)) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    name: old.to_string(),
                })
            }
            Err(e) => {
                return Err(StoreError::Storage {
                    name: new.to_string(),
                    source: e,
                })
            }
        }

        self.index_remove(old);
        self.index_insert(new);
        debug!(from = %old, to = %new, "renamed entry");
        Ok(())
    }

    /// Removes an entry if present. Removing an absent entry is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the file exists but cannot be deleted.
    pub fn remove(&mut self, name: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.entry_path(name)) {
            Ok(()) => debug!(entry = %name, "removed entry"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(StoreError::Storage {
                    name: name.to_string(),
                    source: e,
                })
            }
        }
        self.index_remove(name);
        Ok(())
    }
}
