use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_defaults_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
    assert_eq!(config.manager.save_dir, "savegame");
    assert_eq!(config.manager.backup_dir, "backups_manager");
    assert_eq!(config.manager.sample_interval_secs, 5);
    assert_eq!(config.manager.retention_tick_secs, 300);
}

#[test]
#[serial]
fn given_empty_save_dir_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _save = EnvGuard::set("GSM_MANAGER_SAVE_DIR", "");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_save_dir_with_separator_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _save = EnvGuard::set("GSM_MANAGER_SAVE_DIR", "nested/savegame");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_save_dir_equals_backup_dir_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _save = EnvGuard::set("GSM_MANAGER_SAVE_DIR", "data");
    let _backup = EnvGuard::set("GSM_MANAGER_BACKUP_DIR", "data");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_zero_sample_interval_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _tick = EnvGuard::set("GSM_SAMPLE_INTERVAL_SECS", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_executable_env_override_when_load_then_applied() {
    // Given
    let _temp = setup_config_dir();
    let _exe = EnvGuard::set("GSM_MANAGER_EXECUTABLE", "valheim_server.x86_64");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
    assert_eq!(config.manager.executable, "valheim_server.x86_64");
}
