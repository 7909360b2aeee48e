use homewatch_client::{ClientError, Notifier, TelegramClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn notify_posts_to_send_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botbot-token/sendMessage"))
        .and(body_json(json!({
            "chat_id": "424242",
            "text": "Привет, давай проверим твои ДЗ",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TelegramClient::with_client(server.uri(), "bot-token", reqwest::Client::new());

    client
        .notify("424242", "Привет, давай проверим твои ДЗ")
        .await
        .expect("send ok");
}

#[tokio::test]
async fn notify_fails_on_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = TelegramClient::with_client(server.uri(), "bad-token", reqwest::Client::new());

    let err = client.notify("424242", "hello").await.unwrap_err();
    assert!(matches!(err, ClientError::BadStatus { status: 401, .. }));
    // the bot token never leaks into the error text
    assert!(!err.to_string().contains("bad-token"));
}

#[tokio::test]
async fn notify_fails_on_unreachable_host() {
    let client =
        TelegramClient::with_client("http://127.0.0.1:9", "bot-token", reqwest::Client::new());

    let err = client.notify("424242", "hello").await.unwrap_err();
    assert!(matches!(err, ClientError::RequestFailed(_)));
}
