use std::fs;
use std::path::Path;

use tempfile::tempdir;

use mass_rename::prelude::{
    mass_replace, RecordingReporter, RenameConfig, RenameEvent, SubstitutionRule,
};

fn build_tree(root: &Path) {
    let deep = root.join("BGD_a").join("b_BGD").join("BGD");
    fs::create_dir_all(&deep).unwrap();
    fs::create_dir_all(root.join("BGD_a").join("plain")).unwrap();
    fs::create_dir_all(root.join("other").join("BGD_c")).unwrap();

    fs::write(root.join("BGD_top.txt"), "BGD").unwrap();
    fs::write(root.join("BGD_a").join("BGD_1.txt"), "one BGD").unwrap();
    fs::write(root.join("BGD_a").join("b_BGD").join("x.txt"), "BGD x").unwrap();
    fs::write(deep.join("BGD_deep.txt"), "deep BGD").unwrap();
    fs::write(root.join("BGD_a").join("plain").join("BGD.cfg"), "key=BGD").unwrap();
    fs::write(root.join("other").join("BGD_c").join("c.txt"), "c BGD").unwrap();
}

#[test]
fn test_directories_are_renamed_after_their_contents() {
    let temp_dir = tempdir().unwrap();
    build_tree(temp_dir.path());

    let config = RenameConfig::new(temp_dir.path(), SubstitutionRule::new("BGD", "XYZ").unwrap());
    let mut reporter = RecordingReporter::new();
    mass_replace(&config, &mut reporter).unwrap();
    let events = reporter.events;

    let mut renamed_directories = 0;
    for (index, event) in events.iter().enumerate() {
        let RenameEvent::DirectoryRenamed { from, .. } = event else {
            continue;
        };
        renamed_directories += 1;

        // Nothing inside the directory may happen after it was renamed
        for later in &events[index + 1..] {
            assert!(
                !later.path().starts_with(from),
                "{later:?} happened after {from:?} was renamed"
            );
        }
    }

    assert_eq!(renamed_directories, 4);
    assert!(events.iter().all(|event| !matches!(event, RenameEvent::Failed { .. })));
}

#[test]
fn test_passes_run_in_order_within_a_directory() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir(temp_dir.path().join("BGD_dir")).unwrap();
    fs::write(temp_dir.path().join("a_BGD.txt"), "BGD").unwrap();
    fs::write(temp_dir.path().join("b_BGD.txt"), "BGD").unwrap();

    let config = RenameConfig::new(temp_dir.path(), SubstitutionRule::new("BGD", "XYZ").unwrap());
    let mut reporter = RecordingReporter::new();
    mass_replace(&config, &mut reporter).unwrap();

    let kinds: Vec<&str> = reporter
        .events
        .iter()
        .map(|event| match event {
            RenameEvent::ContentChanged { .. } => "content",
            RenameEvent::FileRenamed { .. } => "file",
            RenameEvent::DirectoryRenamed { .. } => "directory",
            RenameEvent::SkippedBinary { .. } => "binary",
            RenameEvent::Failed { .. } => "failed",
        })
        .collect();

    assert_eq!(
        kinds,
        vec!["content", "content", "file", "file", "directory"]
    );
}

#[test]
fn test_final_tree_has_no_old_word_left() {
    let temp_dir = tempdir().unwrap();
    build_tree(temp_dir.path());

    let config = RenameConfig::new(temp_dir.path(), SubstitutionRule::new("BGD", "XYZ").unwrap());
    let mut reporter = RecordingReporter::new();
    mass_replace(&config, &mut reporter).unwrap();

    let deep = temp_dir
        .path()
        .join("XYZ_a")
        .join("b_XYZ")
        .join("XYZ")
        .join("XYZ_deep.txt");
    assert_eq!(fs::read_to_string(deep).unwrap(), "deep XYZ");
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("XYZ_a").join("plain").join("XYZ.cfg")).unwrap(),
        "key=XYZ"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("other").join("XYZ_c").join("c.txt")).unwrap(),
        "c XYZ"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("XYZ_top.txt")).unwrap(),
        "XYZ"
    );
}
