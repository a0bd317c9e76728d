use std::fs::create_dir_all;
use std::path::PathBuf;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{file_operation_error, generic_error, Result};
use directories::ProjectDirs;
use shellexpand::tilde;

/// Expands a leading `~` to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(tilde(path).to_string())
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            file_operation_error(e, folder.config_dir().to_path_buf(), "create directory")
        })?;
    }
    Ok(folder)
}
