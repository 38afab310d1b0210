//! JSON-document persistence for profiles, templates and settings.
//!
//! Each store owns one document under the data directory and rewrites it
//! wholesale on mutation, mirroring how the console has always persisted
//! its state. In-memory copies live behind tokio RwLocks so the stores
//! can be shared across handler tasks.

mod document;
mod error;
mod profile_store;
mod settings_store;
mod template_store;


pub use error::{Result, StoreError};
pub use profile_store::ProfileStore;
pub use settings_store::SettingsStore;
pub use template_store::TemplateStore;

const PROFILES_FILE: &str = "profiles.json";
const TEMPLATES_FILE: &str = "templates.json";
const SETTINGS_FILE: &str = "settings.json";
