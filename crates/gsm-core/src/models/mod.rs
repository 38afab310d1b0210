pub mod backup_artifact;
pub mod profile;
pub mod resource_sample;
pub mod settings;
pub mod template;
pub mod tracked_process;
