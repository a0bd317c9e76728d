//! File discovery module
//!
//! This module contains components for listing the directories of the tree.

pub mod scanner;

pub use scanner::{scan_directory, DirectoryEntry, DirectoryListing};
