//! Workflow events
//!
//! The engine reports everything it does through a [`Reporter`], so callers
//! decide whether events end up in the log, in a list, or both.

use std::path::PathBuf;

use log::{error, info, warn};

/// Something that happened during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameEvent {
    /// The content of a file was replaced
    ContentChanged { path: PathBuf },
    /// A file was renamed
    FileRenamed { from: PathBuf, to: PathBuf },
    /// A directory was renamed
    DirectoryRenamed { from: PathBuf, to: PathBuf },
    /// A file could not be decoded as text and its content was skipped
    SkippedBinary { path: PathBuf },
    /// An operation on a single entry failed and was skipped
    Failed {
        path: PathBuf,
        operation: String,
        message: String,
    },
}

impl RenameEvent {
    /// The path the event is about, before any rename
    pub fn path(&self) -> &PathBuf {
        match self {
            RenameEvent::ContentChanged { path }
            | RenameEvent::SkippedBinary { path }
            | RenameEvent::Failed { path, .. } => path,
            RenameEvent::FileRenamed { from, .. } | RenameEvent::DirectoryRenamed { from, .. } => {
                from
            }
        }
    }
}

/// Receiver of the events emitted by the engine
pub trait Reporter {
    fn report(&mut self, event: RenameEvent);
}

/// Writes every event to the log
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, event: RenameEvent) {
        match event {
            RenameEvent::ContentChanged { path } => {
                info!("Modified file content: {}", path.display())
            }
            RenameEvent::FileRenamed { from, to } => {
                info!("Renamed file: {} -> {}", from.display(), to.display())
            }
            RenameEvent::DirectoryRenamed { from, to } => {
                info!("Renamed directory: {} -> {}", from.display(), to.display())
            }
            RenameEvent::SkippedBinary { path } => {
                warn!("Skipped binary file: {}", path.display())
            }
            RenameEvent::Failed {
                path,
                operation,
                message,
            } => error!("Failed to {operation} {}: {message}", path.display()),
        }
    }
}

/// Keeps every event in the order it was reported
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<RenameEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        RecordingReporter::default()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: RenameEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_reporter_keeps_order() {
        let mut reporter = RecordingReporter::new();

        reporter.report(RenameEvent::ContentChanged {
            path: PathBuf::from("a/BGD.txt"),
        });
        reporter.report(RenameEvent::FileRenamed {
            from: PathBuf::from("a/BGD.txt"),
            to: PathBuf::from("a/XYZ.txt"),
        });

        assert_eq!(reporter.events.len(), 2);
        assert_eq!(reporter.events[0].path(), &PathBuf::from("a/BGD.txt"));
        assert!(matches!(
            reporter.events[1],
            RenameEvent::FileRenamed { .. }
        ));
    }

    #[test]
    fn test_event_path_uses_original_location() {
        let event = RenameEvent::DirectoryRenamed {
            from: PathBuf::from("root/BGD"),
            to: PathBuf::from("root/XYZ"),
        };

        assert_eq!(event.path(), &PathBuf::from("root/BGD"));
    }

    #[test]
    fn test_log_reporter_accepts_all_events() {
        // Without an installed logger the messages are discarded
        let mut reporter = LogReporter;
        reporter.report(RenameEvent::SkippedBinary {
            path: PathBuf::from("bin"),
        });
        reporter.report(RenameEvent::Failed {
            path: PathBuf::from("file"),
            operation: "write".to_string(),
            message: "Permission denied".to_string(),
        });
    }
}
