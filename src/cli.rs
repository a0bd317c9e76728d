use std::path::PathBuf;

use clap::{
    command, crate_authors, crate_description, crate_name, crate_version, Arg, ArgMatches, Command,
};

use crate::config::{RenameConfig, SubstitutionRule};
use crate::constants::{
    DEFAULT_ROOT, DIR_HELP, LOCAL_LOGGING_HELP, LOG_FILE_HELP, NEW_HELP, OLD_HELP, QUIET_HELP,
    VERBOSE_HELP, YES_HELP,
};
use crate::errors::{generic_error, Result};
use crate::logging::LogLevel;
use crate::utils::{expand_path, find_project_folder};

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `old`: Word to replace
/// - `new`: Replacement word
/// - `dir`: Root directory to process
/// - `yes`: Skip the confirmation prompt
/// - `verbose` / `quiet`: Verbosity level
/// - `log_file` / `log_locally`: Optional log file and its location
pub fn build_command() -> Command {
    let arg_old = Arg::new("old").help(OLD_HELP).required(true).index(1);

    let arg_new = Arg::new("new").help(NEW_HELP).required(true).index(2);

    // define arg for the root directory
    let arg_dir = Arg::new("dir")
        .short('d')
        .long("dir")
        .help(DIR_HELP)
        .default_value(DEFAULT_ROOT);

    // define arg for skipping the prompt
    let arg_yes = Arg::new("yes")
        .short('y')
        .long("yes")
        .help(YES_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    let arg_quiet = Arg::new("quiet")
        .short('q')
        .long("quiet")
        .help(QUIET_HELP)
        .action(clap::ArgAction::SetTrue)
        .conflicts_with("verbose");

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(clap::ArgAction::SetTrue)
        .requires("log_file");

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_old)
        .arg(arg_new)
        .arg(arg_dir)
        .arg(arg_yes)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .arg(arg_quiet)
}

/// Parses the command-line arguments of the current process
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Builds the run configuration from the command-line arguments
///
/// # Returns
/// * `Result<RenameConfig>` - The root directory and substitution rule
///
/// # Errors
/// * Returns an error if a required argument is missing
/// * Returns an error if the words do not form a valid rule
pub fn get_config(matches: &ArgMatches) -> Result<RenameConfig> {
    let old = matches
        .get_one::<String>("old")
        .ok_or_else(|| generic_error("The word to replace is missing"))?;
    let new = matches
        .get_one::<String>("new")
        .ok_or_else(|| generic_error("The replacement word is missing"))?;
    let root = matches
        .get_one::<String>("dir")
        .map(|dir| expand_path(dir))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

    let rule = SubstitutionRule::new(old, new)?;

    Ok(RenameConfig::new(root, rule))
}

/// Gets the verbosity level from the command-line arguments
///
/// `-q` lowers the level to warnings; every `-v` raises it by one step.
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    if matches.get_flag("quiet") {
        return LogLevel::Warning;
    }
    LogLevel::from_occurrences(matches.get_count("verbose"))
}

/// Whether the user asked to skip the confirmation prompt
pub fn skip_confirmation(matches: &ArgMatches) -> bool {
    matches.get_flag("yes")
}

/// Gets the log file path, if file logging was requested
///
/// Without `--log-locally` the file is placed in the application's
/// configuration directory.
pub fn get_log_file(matches: &ArgMatches) -> Result<Option<PathBuf>> {
    let Some(filename) = matches.get_one::<String>("log_file") else {
        return Ok(None);
    };
    if matches.get_flag("log_locally") {
        Ok(Some(PathBuf::from(filename)))
    } else {
        let folder = find_project_folder()?;
        Ok(Some(folder.config_dir().join(filename)))
    }
}
