mod notifier;
mod retention;
mod rollback;
mod sampler;

use crate::InstallLayout;

use gsm_core::Profile;

use std::path::Path;

pub(crate) fn test_layout() -> InstallLayout {
    InstallLayout {
        executable: "enshrouded_server.exe".to_string(),
        config_file: "enshrouded_server.json".to_string(),
        save_dir: "savegame".to_string(),
        backup_dir: "backups_manager".to_string(),
    }
}

pub(crate) fn profile_at(install: &Path) -> Profile {
    Profile::new("alpha", install)
}

/// Seed the conventional save tree used by the round-trip tests.
pub(crate) fn seed_save(install: &Path) {
    let save = install.join("savegame");
    std::fs::create_dir_all(save.join("sub")).unwrap();
    std::fs::write(save.join("a.txt"), b"alpha save data").unwrap();
    std::fs::write(save.join("sub/b.txt"), b"nested bytes").unwrap();
}
