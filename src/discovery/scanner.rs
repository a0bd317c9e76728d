//! Directory scanning functionality
//!
//! This module lists the immediate children of a directory, split into
//! files and directories.

use std::ffi::OsString;
use std::fs::{metadata, read_dir};
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::errors::{file_operation_error, Result};

/// A child directory found during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// The name of the entry inside its parent
    pub name: OsString,
    /// Whether the entry is a symbolic link to a directory
    pub is_symlink: bool,
}

/// The children of one directory at the time it was scanned
#[derive(Debug, Clone, Default)]
pub struct DirectoryListing {
    /// The scanned directory
    pub path: PathBuf,
    /// Names of everything that is not a directory
    pub files: Vec<OsString>,
    /// Child directories, including links to directories
    pub directories: Vec<DirectoryEntry>,
}

impl DirectoryListing {
    /// Full path of a child of this directory
    pub fn child_path(&self, name: &OsString) -> PathBuf {
        self.path.join(name)
    }

    /// Child directories that the walk descends into
    pub fn subdirectories(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.directories
            .iter()
            .filter(|entry| !entry.is_symlink)
            .map(|entry| self.child_path(&entry.name))
    }
}

/// Unwraps one entry of a directory listing
///
/// An entry that cannot be read is logged and skipped, so the rest of the
/// directory is still listed.
fn readable_entry<T>(directory: &Path, entry: io::Result<T>) -> Option<T> {
    match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!("Skipping unreadable entry in {}: {}", directory.display(), e);
            None
        }
    }
}

/// Scans a directory for its immediate children
///
/// Links are classified by what they point to. A link to a directory is
/// listed as a directory but marked so the walk does not follow it. Entries
/// that disappear or cannot be inspected while scanning are listed as files.
/// Entries that cannot be read at all are skipped with a warning.
///
/// # Arguments
/// * `directory` - The directory to scan
///
/// # Returns
/// * `Result<DirectoryListing>` - The files and directories found or an error
///
/// # Errors
/// Returns an error if the directory cannot be read
pub fn scan_directory(directory: &Path) -> Result<DirectoryListing> {
    debug!("Scanning directory: {}", directory.display());

    let entries = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "list directory"))?;

    let mut listing = DirectoryListing {
        path: directory.to_path_buf(),
        ..DirectoryListing::default()
    };

    for entry in entries.filter_map(|entry| readable_entry(directory, entry)) {
        let is_symlink = entry
            .file_type()
            .map(|file_type| file_type.is_symlink())
            .unwrap_or(false);
        let is_dir = metadata(entry.path())
            .map(|meta| meta.is_dir())
            .unwrap_or(false);

        if is_dir {
            listing.directories.push(DirectoryEntry {
                name: entry.file_name(),
                is_symlink,
            });
        } else {
            listing.files.push(entry.file_name());
        }
    }

    // Stable order makes runs and logs reproducible
    listing.files.sort();
    listing.directories.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(
        "Found {} files and {} directories in {}",
        listing.files.len(),
        listing.directories.len(),
        directory.display()
    );

    Ok(listing)
}
