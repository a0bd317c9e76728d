//! Entry renaming
//!
//! This module renames a single file or directory inside its parent.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SubstitutionRule;
use crate::errors::{file_operation_error, target_exists_error, Result};

/// A rename that was carried out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Computes the new name for an entry
///
/// # Returns
/// * `Option<String>` - The new name, or `None` if the name stays the same
pub fn renamed_name(name: &str, rule: &SubstitutionRule) -> Option<String> {
    rule.rewrite(name)
}

/// Replaces every non-overlapping occurrence of `from`, scanning left to right
///
/// `from` must not be empty.
pub(crate) fn replace_bytes(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    let mut replaced = Vec::with_capacity(haystack.len());
    let mut index = 0;
    while index < haystack.len() {
        if haystack[index..].starts_with(from) {
            replaced.extend_from_slice(to);
            index += from.len();
        } else {
            replaced.push(haystack[index]);
            index += 1;
        }
    }
    replaced
}

/// Computes the new name for a name that is not valid Unicode
///
/// The words are matched against the raw bytes of the name, so the bytes
/// that are not valid UTF-8 are carried over unchanged.
#[cfg(unix)]
fn renamed_raw_name(
    name: &OsStr,
    _from: &Path,
    rule: &SubstitutionRule,
) -> Result<Option<OsString>> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = name.as_bytes();
    let step = replace_bytes(bytes, rule.old().as_bytes(), rule.new_word().as_bytes());
    let replaced = replace_bytes(&step, rule.old_upper().as_bytes(), rule.new_upper().as_bytes());

    if replaced == bytes {
        Ok(None)
    } else {
        Ok(Some(OsString::from_vec(replaced)))
    }
}

/// Names that are not valid Unicode cannot be rewritten safely here, so a
/// match is reported instead
#[cfg(not(unix))]
fn renamed_raw_name(
    name: &OsStr,
    from: &Path,
    rule: &SubstitutionRule,
) -> Result<Option<OsString>> {
    use crate::errors::invalid_filename_error;

    if rule.matches(&name.to_string_lossy()) {
        return Err(invalid_filename_error(from.to_path_buf()));
    }
    log::debug!("Skipping non-unicode name: {}", from.display());
    Ok(None)
}

/// Renames an entry of `parent` if its name contains either form of the old word
///
/// The entry stays in the same directory. An existing entry with the new
/// name is never replaced.
///
/// # Arguments
/// * `parent` - The directory containing the entry
/// * `name` - The current name of the entry
/// * `rule` - The substitution rule to apply
///
/// # Returns
/// * `Result<Option<Renamed>>` - The rename performed, `None` if the name does not match
///
/// # Errors
/// * Returns an error if a non-unicode name matches on a platform without byte-level names
/// * Returns an error if the target name is already taken
/// * Returns an error if the rename itself fails
pub fn rename_entry(
    parent: &Path,
    name: &OsStr,
    rule: &SubstitutionRule,
) -> Result<Option<Renamed>> {
    let from = parent.join(name);

    let new_name = match name.to_str() {
        Some(name) => renamed_name(name, rule).map(OsString::from),
        None => renamed_raw_name(name, &from, rule)?,
    };
    let Some(new_name) = new_name else {
        return Ok(None);
    };

    let to = parent.join(new_name);
    if fs::symlink_metadata(&to).is_ok() {
        return Err(target_exists_error(from, to));
    }

    fs::rename(&from, &to).map_err(|e| file_operation_error(e, from.clone(), "rename"))?;

    Ok(Some(Renamed { from, to }))
}
