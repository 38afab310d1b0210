//! Fire-and-forget webhook notifications.

use gsm_core::Profile;

use log::{debug, warn};
use serde_json::json;

/// Lifecycle transitions that produce a webhook message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerEvent {
    Started,
    Stopped,
}

impl ServerEvent {
    fn default_message(self) -> &'static str {
        match self {
            ServerEvent::Started => "Server started.",
            ServerEvent::Stopped => "Server stopped.",
        }
    }
}

/// Posts status messages to a profile's webhook URL.
///
/// Delivery is fire-and-forget: the POST runs on its own task, failures
/// are logged at warn level, and the triggering operation never waits
/// for or learns about the outcome.
#[derive(Clone, Default)]
pub struct WebhookNotifier {
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Announce a lifecycle event, using the profile's configured
    /// message or the default when none is set.
    pub fn notify_event(&self, profile: &Profile, event: ServerEvent) {
        let configured = match event {
            ServerEvent::Started => &profile.webhook_start_msg,
            ServerEvent::Stopped => &profile.webhook_stop_msg,
        };

        let message = if configured.is_empty() {
            event.default_message().to_string()
        } else {
            configured.clone()
        };

        self.notify(profile, &message);
    }

    /// Post `**[<profile>]** <message>` to the profile's webhook.
    /// A no-op when the profile has no webhook configured.
    pub fn notify(&self, profile: &Profile, message: &str) {
        if !profile.has_webhook() {
            debug!("No webhook configured for profile {}", profile.name);
            return;
        }

        let client = self.client.clone();
        let url = profile.webhook_url.clone();
        let profile_name = profile.name.clone();
        let body = json!({ "content": format!("**[{}]** {}", profile.name, message) });

        tokio::spawn(async move {
            match client.post(&url).json(&body).send().await {
                Ok(response) if !response.status().is_success() => {
                    warn!(
                        "Webhook for profile {profile_name} returned {}",
                        response.status()
                    );
                }
                Ok(_) => {}
                Err(e) => warn!("Webhook delivery failed for profile {profile_name}: {e}"),
            }
        });
    }
}
