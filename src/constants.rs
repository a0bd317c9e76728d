//! Constants used throughout the application
//!
//! This module centralises all constants used in the application to make
//! them easier to manage and update.

use encoding_rs::{Encoding, UTF_8_INIT};

/// Qualifier string used for application identification
///
/// This is used as part of the application's unique identifier.
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
///
/// This is used as part of the application's unique identifier.
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// log file paths and application identification.
pub const APPLICATION: &str = "mass_rename";

/// The only text encoding file contents are decoded with
///
/// Files that fail to decode are treated as binary and left untouched.
pub static TEXT_ENCODING: &Encoding = &UTF_8_INIT;

/// Answer the user has to type to start the run
pub const CONFIRMATION_WORD: &str = "yes";

/// Root directory used when none is given
pub const DEFAULT_ROOT: &str = ".";

/// Line printed around the progress output
pub const SEPARATOR: &str = "--------------------------------------------------";

/// Help text for the old word argument
pub const OLD_HELP: &str = "Word to replace (its uppercase form is replaced too)";

/// Help text for the new word argument
pub const NEW_HELP: &str = "Replacement word (its uppercase form replaces the uppercase old word)";

/// Help text for the directory option
pub const DIR_HELP: &str = "Root directory to process recursively";

/// Help text for the yes option
pub const YES_HELP: &str = "Do not ask for confirmation before modifying files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the quiet command-line option
pub const QUIET_HELP: &str = "Only print warnings and errors";

/// Help text for the log file option
pub const LOG_FILE_HELP: &str = "Also write the log to this file";

/// Help text for the local logging option
pub const LOCAL_LOGGING_HELP: &str =
    "Store the log file in the current directory instead of the configuration directory";
