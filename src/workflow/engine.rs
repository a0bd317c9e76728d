//! Workflow engine
//!
//! This module walks the tree bottom-up and applies the three passes to
//! every directory.

use std::error::Error as StdError;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use log::{debug, info};

use crate::config::{RenameConfig, SubstitutionRule};
use crate::constants::SEPARATOR;
use crate::discovery::{scan_directory, DirectoryListing};
use crate::errors::Error;
use crate::processor::{rename_entry, rewrite_file_content, ContentOutcome, Renamed};

use super::context::{RunStats, WorkflowContext};
use super::events::{RenameEvent, Reporter};

/// A directory whose children are still being processed
struct PendingDirectory {
    listing: DirectoryListing,
    /// Child directories not yet visited, in reverse order
    children: Vec<PathBuf>,
}

impl PendingDirectory {
    fn new(listing: DirectoryListing) -> Self {
        let mut children: Vec<PathBuf> = listing.subdirectories().collect();
        children.reverse();
        PendingDirectory { listing, children }
    }
}

/// Replaces the old word in contents, file names and directory names
///
/// Every directory reachable from the root, the root included, is visited
/// exactly once in post-order. For each directory:
/// 1. the content of every file is rewritten
/// 2. every matching file is renamed
/// 3. every matching child directory is renamed
///
/// A directory is only renamed once its whole subtree is done, so no path
/// computed for pending work is invalidated by a rename. Failures on single
/// entries are reported and skipped.
///
/// # Arguments
/// * `config` - Root directory and substitution rule
/// * `reporter` - Receives an event for every change, skip and failure
///
/// # Returns
/// * `Result<RunStats>` - Statistics about the run
///
/// # Errors
/// * Returns an error if the root is not a readable directory
pub fn mass_replace(config: &RenameConfig, reporter: &mut dyn Reporter) -> Result<RunStats> {
    config
        .validate()
        .map_err(|e| anyhow!("Cannot process {}: {}", config.root().display(), e))?;

    info!("Starting replacement, please wait...");
    info!("Root directory: {}", absolute_display(config.root()));
    info!("Rules: {}", config.rule);
    info!("{SEPARATOR}");

    let root_listing = scan_directory(config.root())
        .map_err(|e| anyhow!("Cannot process {}: {}", config.root().display(), e))?;

    let mut context = WorkflowContext::new(reporter);
    let mut stack = vec![PendingDirectory::new(root_listing)];

    while let Some(current) = stack.last_mut() {
        if let Some(child) = current.children.pop() {
            match scan_directory(&child) {
                Ok(listing) => stack.push(PendingDirectory::new(listing)),
                Err(e) => context.emit(failure(child, "list directory", &e)),
            }
            continue;
        }

        if let Some(done) = stack.pop() {
            process_directory(&done.listing, &config.rule, &mut context);
        }
    }

    info!("{SEPARATOR}");
    info!("All operations finished!");

    Ok(context.stats)
}

/// Applies the content, file rename and directory rename passes to one directory
fn process_directory(
    listing: &DirectoryListing,
    rule: &SubstitutionRule,
    context: &mut WorkflowContext,
) {
    debug!("Processing directory: {}", listing.path.display());
    context.increment_directories_visited();

    for name in &listing.files {
        let path = listing.child_path(name);
        context.increment_files_scanned();

        match rewrite_file_content(&path, rule) {
            Ok(ContentOutcome::Rewritten) => context.emit(RenameEvent::ContentChanged { path }),
            Ok(ContentOutcome::Binary) => context.emit(RenameEvent::SkippedBinary { path }),
            Ok(ContentOutcome::Unchanged) => {}
            Err(e) => context.emit(failure(path, "rewrite", &e)),
        }
    }

    for name in &listing.files {
        match rename_entry(&listing.path, name, rule) {
            Ok(Some(Renamed { from, to })) => context.emit(RenameEvent::FileRenamed { from, to }),
            Ok(None) => {}
            Err(e) => context.emit(failure(listing.child_path(name), "rename file", &e)),
        }
    }

    for entry in &listing.directories {
        match rename_entry(&listing.path, &entry.name, rule) {
            Ok(Some(Renamed { from, to })) => {
                context.emit(RenameEvent::DirectoryRenamed { from, to })
            }
            Ok(None) => {}
            Err(e) => context.emit(failure(
                listing.child_path(&entry.name),
                "rename directory",
                &e,
            )),
        }
    }
}

fn failure(path: PathBuf, operation: &str, error: &Error) -> RenameEvent {
    let message = match error {
        Error::FileOperation { .. } => error
            .source()
            .map(ToString::to_string)
            .unwrap_or_else(|| error.to_string()),
        _ => error.to_string(),
    };

    RenameEvent::Failed {
        path,
        operation: operation.to_string(),
        message,
    }
}

fn absolute_display(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
