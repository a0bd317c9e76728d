//! Configuration data model
//!
//! This module defines the value passed into the renaming workflow.

use std::path::{Path, PathBuf};

use crate::errors::{directory_not_found_error, file_operation_error, Result};

use super::rule::SubstitutionRule;

/// Everything a run needs: where to start and what to replace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameConfig {
    /// Root directory of the tree to process, itself included
    pub root: PathBuf,
    /// The substitution applied to contents and names
    pub rule: SubstitutionRule,
}

impl RenameConfig {
    /// Creates a new configuration
    ///
    /// # Arguments
    /// * `root` - The root directory to process
    /// * `rule` - The substitution rule
    ///
    /// # Returns
    /// * `RenameConfig` - The new configuration
    pub fn new(root: impl Into<PathBuf>, rule: SubstitutionRule) -> Self {
        RenameConfig {
            root: root.into(),
            rule,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validates the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if the root is an existing directory
    ///
    /// # Errors
    /// * Returns an error if the root does not exist or is not a directory
    pub fn validate(&self) -> Result<()> {
        let metadata = self
            .root
            .metadata()
            .map_err(|e| file_operation_error(e, self.root.clone(), "read root directory"))?;

        if !metadata.is_dir() {
            return Err(directory_not_found_error(self.root.clone()));
        }

        Ok(())
    }
}
