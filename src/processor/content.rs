//! File content rewriting
//!
//! This module rewrites the text of a single file in place.

use std::fs;
use std::path::Path;

use log::trace;

use crate::config::SubstitutionRule;
use crate::constants::TEXT_ENCODING;
use crate::errors::{file_operation_error, generic_error, Result};

/// What happened to the content of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOutcome {
    /// The file was decoded but had nothing to replace
    Unchanged,
    /// The file was written back with the replaced text
    Rewritten,
    /// The file could not be decoded as text and was left alone
    Binary,
}

/// Rewrites the content of a file using the substitution rule
///
/// The file is read fully and decoded strictly. Malformed input marks the
/// file as binary. The file is only written when the replaced text differs
/// from the original. Writing truncates the existing file, so permissions
/// and links are kept.
///
/// # Arguments
/// * `path` - The file to rewrite
/// * `rule` - The substitution rule to apply
///
/// # Returns
/// * `Result<ContentOutcome>` - What happened to the file, or an error
///
/// # Errors
/// * Returns an error if the file cannot be read or written
/// * Returns an error if the replaced text cannot be encoded
pub fn rewrite_file_content(path: &Path, rule: &SubstitutionRule) -> Result<ContentOutcome> {
    let bytes = fs::read(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;

    let Some(content) = TEXT_ENCODING.decode_without_bom_handling_and_without_replacement(&bytes)
    else {
        return Ok(ContentOutcome::Binary);
    };

    let Some(replaced) = rule.rewrite(&content) else {
        trace!("Nothing to replace in {}", path.display());
        return Ok(ContentOutcome::Unchanged);
    };

    let (encoded, _, had_unmappable) = TEXT_ENCODING.encode(&replaced);
    if had_unmappable {
        return Err(generic_error(&format!(
            "Replaced content of {} cannot be encoded as {}",
            path.display(),
            TEXT_ENCODING.name()
        )));
    }

    fs::write(path, &encoded).map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;

    Ok(ContentOutcome::Rewritten)
}
