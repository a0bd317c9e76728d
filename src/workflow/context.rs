//! Workflow context
//!
//! This module defines the state carried through a run: the reporter that
//! receives events and the statistics collected along the way.

use std::fmt;

use super::events::{RenameEvent, Reporter};

/// Statistics about the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of directories visited
    pub directories_visited: usize,
    /// Number of files whose content was inspected
    pub files_scanned: usize,
    /// Number of files whose content was replaced
    pub contents_changed: usize,
    /// Number of files renamed
    pub files_renamed: usize,
    /// Number of directories renamed
    pub directories_renamed: usize,
    /// Number of files skipped as binary
    pub binary_skipped: usize,
    /// Number of failed operations
    pub errors: usize,
}

impl RunStats {
    /// Whether the run modified anything
    pub fn has_changes(&self) -> bool {
        self.contents_changed + self.files_renamed + self.directories_renamed > 0
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} directories visited, {} files scanned, {} contents changed, \
             {} files renamed, {} directories renamed, {} binary files skipped, {} errors",
            self.directories_visited,
            self.files_scanned,
            self.contents_changed,
            self.files_renamed,
            self.directories_renamed,
            self.binary_skipped,
            self.errors
        )
    }
}

/// Context for the workflow
///
/// Forwards events to the reporter and counts them.
pub struct WorkflowContext<'a> {
    reporter: &'a mut dyn Reporter,
    /// Statistics about the processing
    pub stats: RunStats,
}

impl<'a> WorkflowContext<'a> {
    pub fn new(reporter: &'a mut dyn Reporter) -> Self {
        WorkflowContext {
            reporter,
            stats: RunStats::default(),
        }
    }

    /// Counts the event and passes it on to the reporter
    pub fn emit(&mut self, event: RenameEvent) {
        match &event {
            RenameEvent::ContentChanged { .. } => self.stats.contents_changed += 1,
            RenameEvent::FileRenamed { .. } => self.stats.files_renamed += 1,
            RenameEvent::DirectoryRenamed { .. } => self.stats.directories_renamed += 1,
            RenameEvent::SkippedBinary { .. } => self.stats.binary_skipped += 1,
            RenameEvent::Failed { .. } => self.stats.errors += 1,
        }
        self.reporter.report(event);
    }

    /// Increments the number of directories visited
    pub fn increment_directories_visited(&mut self) {
        self.stats.directories_visited += 1;
    }

    /// Increments the number of files scanned
    pub fn increment_files_scanned(&mut self) {
        self.stats.files_scanned += 1;
    }
}
