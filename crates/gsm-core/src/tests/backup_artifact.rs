use crate::BackupOrigin;

use chrono::{TimeZone, Utc};

#[test]
fn test_filename_encodes_origin_and_timestamp() {
    let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 45).unwrap();

    let manual = BackupOrigin::Manual.filename_at(at);
    let auto = BackupOrigin::Automatic.filename_at(at);

    assert_eq!(manual, "backup_2024-03-05T14-30-45-000Z.zip");
    assert_eq!(auto, "auto_2024-03-05T14-30-45-000Z.zip");
}

#[test]
fn test_filename_has_no_unsafe_characters() {
    let name = BackupOrigin::Automatic.filename_at(Utc::now());

    assert!(!name.contains(':'));
    assert_eq!(name.matches('.').count(), 1); // only the .zip extension
}

#[test]
fn test_of_filename_classifies_by_prefix() {
    assert_eq!(
        BackupOrigin::of_filename("auto_2024-03-05T14-30-45-000Z.zip"),
        Some(BackupOrigin::Automatic)
    );
    assert_eq!(
        BackupOrigin::of_filename("backup_2024-03-05T14-30-45-000Z.zip"),
        Some(BackupOrigin::Manual)
    );
    assert_eq!(BackupOrigin::of_filename("savegame.zip"), None);
}
