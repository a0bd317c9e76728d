//! Mass Rename
//!
//! Replaces a word and its uppercase form throughout a directory tree:
//! first in file contents, then in file names, then in directory names.
//! The tree is processed bottom-up, so a directory is only renamed after
//! everything inside it is done.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod processor;
pub mod prompt;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::config::{RenameConfig, SubstitutionRule};
    pub use crate::errors::{
        directory_not_found_error, file_operation_error, generic_error, invalid_filename_error,
        invalid_rule_error, target_exists_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{format_message, init_logger, LogLevel};
    pub use crate::workflow::{
        mass_replace, LogReporter, RecordingReporter, RenameEvent, Reporter, RunStats,
    };
}

pub use workflow::mass_replace;
