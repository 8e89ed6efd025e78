use reqwest::{multipart::Form, Client};

use crate::contact::{ContactError, ContactMessage, RelayReply};
use crate::settings::RelayConfig;

/// Forwards contact messages to the form relay as multipart form data.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    config: RelayConfig,
}

impl RelayClient {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    fn form(access_key: &str, msg: &ContactMessage) -> Form {
        msg.fields().into_iter().fold(
            Form::new().text("access_key", access_key.to_string()),
            |form, (key, value)| form.text(key, value.to_string()),
        )
    }

    /// Sends one message. The reply is returned as-is, a `success: false`
    /// reply is not an error at this layer.
    pub async fn send(&self, msg: &ContactMessage) -> Result<RelayReply, ContactError> {
        let access_key = self
            .config
            .access_key
            .as_deref()
            .ok_or(ContactError::NotConfigured)?;
        if !msg.is_complete() {
            return Err(ContactError::Incomplete);
        }

        let res = self
            .client
            .post(&self.config.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(Self::form(access_key, msg))
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res
            .bytes()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        // the relay answers rejections with a 4xx and a JSON body, prefer the body
        match serde_json::from_slice::<RelayReply>(&body) {
            Ok(reply) => {
                tracing::info!(status = %status, success = reply.success, "contact relay replied");
                Ok(reply)
            }
            Err(_) if !status.is_success() => Err(ContactError::Status(status)),
            Err(e) => Err(ContactError::Decode(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Multipart, http::StatusCode, routing::post, Router};
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<BTreeMap<String, String>>>>;

    async fn spawn_relay(status: StatusCode, body: &'static str) -> (String, Seen) {
        let seen: Seen = Arc::default();
        let recorder = seen.clone();
        let app = Router::new().route(
            "/submit",
            post(move |mut multipart: Multipart| {
                let recorder = recorder.clone();
                async move {
                    let mut fields = BTreeMap::new();
                    while let Ok(Some(field)) = multipart.next_field().await {
                        let name = field.name().unwrap_or_default().to_string();
                        let value = field.text().await.unwrap_or_default();
                        fields.insert(name, value);
                    }
                    recorder.lock().unwrap().push(fields);
                    (status, body)
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}/submit"), seen)
    }

    fn sample() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Let's build something".to_string(),
            botcheck: String::new(),
        }
    }

    #[tokio::test]
    async fn test_sends_all_fields() {
        let (endpoint, seen) = spawn_relay(StatusCode::OK, r#"{"success":true}"#).await;
        let client = RelayClient::new(RelayConfig::new(endpoint, "secret"));

        let reply = client.send(&sample()).await.unwrap();
        assert!(reply.success);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let keys = seen[0].keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(
            keys,
            ["access_key", "botcheck", "email", "message", "name", "subject"]
        );
        assert_eq!(seen[0]["access_key"], "secret");
        assert_eq!(seen[0]["botcheck"], "");
        assert_eq!(seen[0]["name"], "Ada");
    }

    #[tokio::test]
    async fn test_rejection_body_on_error_status() {
        let (endpoint, _) = spawn_relay(
            StatusCode::BAD_REQUEST,
            r#"{"success":false,"message":"Invalid access key"}"#,
        )
        .await;
        let client = RelayClient::new(RelayConfig::new(endpoint, "bad"));

        let reply = client.send(&sample()).await.unwrap();
        assert_eq!(
            reply.into_result(),
            Err(ContactError::Rejected(Some("Invalid access key".to_string())))
        );
    }

    #[tokio::test]
    async fn test_error_status_without_json() {
        let (endpoint, _) = spawn_relay(StatusCode::BAD_GATEWAY, "upstream down").await;
        let client = RelayClient::new(RelayConfig::new(endpoint, "secret"));

        let err = client.send(&sample()).await.unwrap_err();
        assert_eq!(err, ContactError::Status(StatusCode::BAD_GATEWAY));
    }

    #[tokio::test]
    async fn test_undecodable_success_body() {
        let (endpoint, _) = spawn_relay(StatusCode::OK, "<html></html>").await;
        let client = RelayClient::new(RelayConfig::new(endpoint, "secret"));

        let err = client.send(&sample()).await.unwrap_err();
        assert!(matches!(err, ContactError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_relay() {
        // bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = RelayClient::new(RelayConfig::new(format!("http://{addr}/submit"), "k"));

        let err = client.send(&sample()).await.unwrap_err();
        assert!(matches!(err, ContactError::Transport(_)));
        assert_eq!(err.user_message(), crate::contact::FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        let client = RelayClient::new(RelayConfig {
            endpoint: "http://127.0.0.1:1/submit".to_string(),
            access_key: None,
        });
        let err = client.send(&sample()).await.unwrap_err();
        assert_eq!(err, ContactError::NotConfigured);
    }

    #[tokio::test]
    async fn test_incomplete_message_is_not_sent() {
        let (endpoint, seen) = spawn_relay(StatusCode::OK, r#"{"success":true}"#).await;
        let client = RelayClient::new(RelayConfig::new(endpoint, "secret"));
        let mut msg = sample();
        msg.email = String::new();

        let err = client.send(&msg).await.unwrap_err();
        assert_eq!(err, ContactError::Incomplete);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_subject_is_forwarded() {
        let (endpoint, seen) = spawn_relay(StatusCode::OK, r#"{"success":true}"#).await;
        let client = RelayClient::new(RelayConfig::new(endpoint, "secret"));
        let mut msg = sample();
        msg.subject = " ".to_string();

        let reply = client.send(&msg).await.unwrap();
        assert!(reply.success);
        assert_eq!(seen.lock().unwrap()[0]["subject"], " ");
    }
}
