use crate::{ServerEvent, WebhookNotifier};

use gsm_core::Profile;

use serde_json::json;
use wiremock::matchers::{body_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn profile_with_webhook(url: &str) -> Profile {
    let mut profile = Profile::new("alpha", "/tmp/alpha");
    profile.webhook_url = url.to_string();
    profile
}

async fn settle() {
    // Delivery runs on a detached task; give it a moment to land.
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
}

#[tokio::test]
async fn test_notify_posts_formatted_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({ "content": "**[alpha]** Hello there" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = WebhookNotifier::new();
    notifier.notify(&profile_with_webhook(&server.uri()), "Hello there");

    settle().await;
}

#[tokio::test]
async fn test_start_event_uses_default_message_when_unset() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({ "content": "**[alpha]** Server started." })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = WebhookNotifier::new();
    notifier.notify_event(&profile_with_webhook(&server.uri()), ServerEvent::Started);

    settle().await;
}

#[tokio::test]
async fn test_stop_event_prefers_the_configured_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({ "content": "**[alpha]** Going down" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut profile = profile_with_webhook(&server.uri());
    profile.webhook_stop_msg = "Going down".to_string();

    let notifier = WebhookNotifier::new();
    notifier.notify_event(&profile, ServerEvent::Stopped);

    settle().await;
}

#[tokio::test]
async fn test_endpoint_failure_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = WebhookNotifier::new();
    notifier.notify(&profile_with_webhook(&server.uri()), "still fine");

    settle().await;
}

#[tokio::test]
async fn test_profile_without_webhook_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let notifier = WebhookNotifier::new();
    notifier.notify(&Profile::new("alpha", "/tmp/alpha"), "unheard");

    settle().await;
}
