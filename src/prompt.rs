//! Confirmation prompt
//!
//! The run modifies files in place, so the launcher asks before starting.

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::constants::CONFIRMATION_WORD;
use crate::errors::Result;
use crate::logging::format_message;

const WARNING: &str = "WARNING: this will modify file contents, file names and directory names!";
const BACKUP_ADVICE: &str = "Back up your data before continuing.";

/// Checks whether an answer confirms the run
///
/// Only the confirmation word is accepted, in any letter case.
pub fn is_confirmation(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(CONFIRMATION_WORD)
}

/// Shows the warning and reads one line of input
///
/// # Arguments
/// * `input` - Where the answer is read from
/// * `output` - Where the warning and question are written to
///
/// # Returns
/// * `Result<bool>` - Whether the user confirmed; end of input counts as a refusal
///
/// # Errors
/// Returns an error if reading or writing fails
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    writeln!(
        output,
        "{}",
        format_message(WARNING, &WARNING.red().bold().to_string())
    )?;
    writeln!(output, "{BACKUP_ADVICE}")?;
    write!(
        output,
        "Are you sure you want to continue? (type '{CONFIRMATION_WORD}' to continue): "
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(is_confirmation(&answer))
}
