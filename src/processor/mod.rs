//! File processing module
//!
//! This module contains the operations applied to single entries:
//! content rewriting and renaming.

mod content;
mod rename;

pub use content::{rewrite_file_content, ContentOutcome};
pub use rename::{rename_entry, renamed_name, Renamed};
