//! Webhook sink: POSTs each event as `{"content": "[KIND] message"}`.
//!
//! `notify()` spawns the request onto the current tokio runtime and returns
//! immediately. The HTTP client carries a timeout, so a stalled endpoint
//! only ever costs a background task. Spawned deliveries are tracked so
//! `flush()` can wait for them before the process exits.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use log::{debug, warn};
use reqwest::Url;
use serde::Serialize;
use tokio::task::JoinSet;

use super::{NotificationSink, NotifyKind, format_event};

/// Default upper bound on a single delivery attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub enum NotifyError {
    /// Endpoint URL could not be parsed or is not http(s).
    InvalidUrl(String),
    /// HTTP client could not be constructed.
    Client(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Endpoint answered with a non-success status.
    Api { status: u16 },
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::InvalidUrl(msg) => write!(f, "invalid webhook URL: {msg}"),
            NotifyError::Client(msg) => write!(f, "HTTP client error: {msg}"),
            NotifyError::Network(msg) => write!(f, "network error: {msg}"),
            NotifyError::Api { status } => write!(f, "webhook returned HTTP {status}"),
        }
    }
}

impl std::error::Error for NotifyError {}

#[derive(Serialize, Debug)]
struct WebhookPayload<'a> {
    content: &'a str,
}

#[derive(Clone)]
pub struct WebhookSink {
    url: Url,
    client: reqwest::Client,
    /// Deliveries spawned by `notify()` and not yet reaped.
    in_flight: Arc<Mutex<JoinSet<()>>>,
}

impl WebhookSink {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, NotifyError> {
        let url = Url::parse(url).map_err(|e| NotifyError::InvalidUrl(format!("{url}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(NotifyError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Client(e.to_string()))?;

        Ok(Self {
            url,
            client,
            in_flight: Arc::new(Mutex::new(JoinSet::new())),
        })
    }

    /// Send one already-formatted event and wait for the response.
    pub async fn deliver(&self, content: &str) -> Result<(), NotifyError> {
        post_event(&self.client, self.url.clone(), content).await
    }

    /// Number of spawned deliveries not yet reaped.
    pub fn in_flight(&self) -> usize {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

async fn post_event(client: &reqwest::Client, url: Url, content: &str) -> Result<(), NotifyError> {
    let response = client
        .post(url)
        .json(&WebhookPayload { content })
        .send()
        .await
        .map_err(|e| NotifyError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(NotifyError::Api {
            status: status.as_u16(),
        });
    }
    Ok(())
}

impl NotificationSink for WebhookSink {
    fn name(&self) -> &str {
        "webhook"
    }

    fn notify(&self, kind: NotifyKind, message: &str) {
        let content = format_event(kind, message);
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime available, dropping notification: {}", content);
            return;
        };

        let client = self.client.clone();
        let url = self.url.clone();
        let delivery = async move {
            match post_event(&client, url, &content).await {
                Ok(()) => debug!("Notification delivered: {}", content),
                Err(e) => debug!("Notification dropped ({}): {}", e, content),
            }
        };

        let mut set = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        // Reap finished deliveries so the set only holds live ones
        while set.try_join_next().is_some() {}
        set.spawn_on(delivery, &runtime);
    }

    fn flush(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        let mut pending = {
            let mut set = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *set)
        };
        debug!("Flushing {} pending notification(s)", pending.len());
        // Dropping `pending` early (e.g. on timeout) aborts what is left
        Box::pin(async move { while pending.join_next().await.is_some() {} })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = WebhookSink::new("ftp://example.com/hook", DEFAULT_TIMEOUT).err().unwrap();
        assert!(matches!(err, NotifyError::InvalidUrl(_)));
    }

    #[test]
    fn test_rejects_unparseable_url() {
        assert!(WebhookSink::new("::::", DEFAULT_TIMEOUT).is_err());
    }

    #[tokio::test]
    async fn test_deliver_posts_content_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(body_json(serde_json::json!({ "content": "[SUCCESS] Found entry: apple" })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let sink = WebhookSink::new(&format!("{}/hook", server.uri()), DEFAULT_TIMEOUT).unwrap();
        sink.deliver("[SUCCESS] Found entry: apple").await.unwrap();
    }

    #[tokio::test]
    async fn test_deliver_reports_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let sink = WebhookSink::new(&server.uri(), DEFAULT_TIMEOUT).unwrap();
        let err = sink.deliver("[ERROR] x").await.unwrap_err();
        assert!(matches!(err, NotifyError::Api { status: 500 }));
    }

    #[tokio::test]
    async fn test_deliver_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let sink = WebhookSink::new(&server.uri(), Duration::from_millis(100)).unwrap();
        let err = sink.deliver("[SUCCESS] slow").await.unwrap_err();
        assert!(matches!(err, NotifyError::Network(_)));
    }

    #[tokio::test]
    async fn test_notify_is_fire_and_forget() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let sink = WebhookSink::new(&server.uri(), DEFAULT_TIMEOUT).unwrap();
        sink.notify(NotifyKind::Error, "No match found for pattern: zz");

        // The request runs in the background; wait for it to land
        let mut received = Vec::new();
        for _ in 0..50 {
            received = server.received_requests().await.unwrap_or_default();
            if !received.is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert_eq!(received.len(), 1);
        let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
        assert_eq!(body["content"], "[ERROR] No match found for pattern: zz");
    }

    #[tokio::test]
    async fn test_notify_swallows_connection_failure() {
        // Port 9 (discard) is expected to refuse connections locally
        let sink = WebhookSink::new("http://127.0.0.1:9/hook", Duration::from_millis(200)).unwrap();
        sink.notify(NotifyKind::Success, "nobody listening");
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    #[test]
    fn test_notify_without_runtime_is_dropped() {
        let sink = WebhookSink::new("http://127.0.0.1:9/hook", DEFAULT_TIMEOUT).unwrap();
        sink.notify(NotifyKind::Success, "no runtime here");
        assert_eq!(sink.in_flight(), 0);
    }

    #[test]
    fn test_flush_delivers_before_runtime_shutdown() {
        // The endpoint lives on its own runtime so it outlives the sender's
        let server_rt = tokio::runtime::Runtime::new().unwrap();
        let server = server_rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(204))
                .mount(&server)
                .await;
            server
        });
        let uri = server.uri();

        let app_rt = tokio::runtime::Runtime::new().unwrap();
        app_rt.block_on(async {
            let sink = WebhookSink::new(&uri, DEFAULT_TIMEOUT).unwrap();
            sink.notify(NotifyKind::Error, "No file selected.");
            tokio::time::timeout(Duration::from_secs(5), sink.flush())
                .await
                .unwrap();
            assert_eq!(sink.in_flight(), 0);
        });
        drop(app_rt);

        let received = server_rt.block_on(server.received_requests()).unwrap();
        assert_eq!(received.len(), 1);
        let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
        assert_eq!(body["content"], "[ERROR] No file selected.");
    }

    #[tokio::test]
    async fn test_flush_gives_up_at_deadline() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let sink = WebhookSink::new(&server.uri(), DEFAULT_TIMEOUT).unwrap();
        sink.notify(NotifyKind::Success, "slow endpoint");

        let started = std::time::Instant::now();
        let flushed = tokio::time::timeout(Duration::from_millis(200), sink.flush()).await;
        assert!(flushed.is_err());
        assert!(started.elapsed() < Duration::from_secs(1));
        assert_eq!(sink.in_flight(), 0);
    }
}
