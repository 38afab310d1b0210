//! Profile resolution shared by the profile-scoped handlers.

use crate::ApiError;

use gsm_core::Profile;
use gsm_manager::AppState;

/// Look up a profile by name, mapping absence to a 404.
pub async fn resolve_profile(state: &AppState, name: &str) -> Result<Profile, ApiError> {
    state
        .profiles
        .get(name)
        .await
        .ok_or_else(|| ApiError::not_found(format!("Profile {name} not found")))
}
