//! # Notifications
//!
//! Best-effort reporting of session events to an outside endpoint.
//!
//! The core only sees the [`NotificationSink`] trait. Delivery is
//! fire-and-forget: a sink never returns an error and never blocks the
//! caller for longer than it takes to hand the message off.
//!
//! ```text
//! SessionController ──notify()──▶ dyn NotificationSink
//!                                   ├── NoopSink      (no endpoint configured)
//!                                   └── WebhookSink   (POST, spawned on tokio)
//! ```

pub mod webhook;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub use webhook::WebhookSink;

/// Whether an event reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

impl NotifyKind {
    pub fn label(self) -> &'static str {
        match self {
            NotifyKind::Success => "SUCCESS",
            NotifyKind::Error => "ERROR",
        }
    }
}

impl fmt::Display for NotifyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Formats an event the way the endpoint receives it: `[KIND] message`.
pub fn format_event(kind: NotifyKind, message: &str) -> String {
    format!("[{kind}] {message}")
}

pub trait NotificationSink: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Report an event. Must not fail or stall the caller.
    fn notify(&self, kind: NotifyKind, message: &str);

    /// Resolves once every event handed to [`notify`](Self::notify) so far
    /// has been delivered or given up on. Callers bound it with
    /// `tokio::time::timeout` before the runtime shuts down.
    fn flush(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(std::future::ready(()))
    }
}

/// Lets one sink be shared between the session and whoever flushes it at exit.
impl<S: NotificationSink + ?Sized> NotificationSink for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn notify(&self, kind: NotifyKind, message: &str) {
        (**self).notify(kind, message)
    }

    fn flush(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        (**self).flush()
    }
}

/// Sink used when no endpoint is configured.
pub struct NoopSink;

impl NotificationSink for NoopSink {
    fn name(&self) -> &str {
        "noop"
    }

    fn notify(&self, _kind: NotifyKind, _message: &str) {}
}

/// Pick a sink from an optional endpoint URL. A blank or unusable URL
/// disables notifications.
pub fn sink_for(webhook_url: Option<&str>, timeout: std::time::Duration) -> Box<dyn NotificationSink> {
    let Some(url) = webhook_url.map(str::trim).filter(|u| !u.is_empty()) else {
        log::info!("No webhook configured, notifications disabled");
        return Box::new(NoopSink);
    };

    match WebhookSink::new(url, timeout) {
        Ok(sink) => {
            log::info!("Webhook notifications enabled");
            Box::new(sink)
        }
        Err(e) => {
            log::warn!("Webhook disabled: {}", e);
            Box::new(NoopSink)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_event_uppercases_kind() {
        assert_eq!(
            format_event(NotifyKind::Success, "Found entry: apple"),
            "[SUCCESS] Found entry: apple"
        );
        assert_eq!(
            format_event(NotifyKind::Error, "No entry to remove on undo."),
            "[ERROR] No entry to remove on undo."
        );
    }

    #[test]
    fn test_sink_for_without_url_is_noop() {
        assert_eq!(sink_for(None, Duration::from_secs(5)).name(), "noop");
        assert_eq!(sink_for(Some("   "), Duration::from_secs(5)).name(), "noop");
    }

    #[test]
    fn test_sink_for_malformed_url_is_noop() {
        let sink = sink_for(Some("not a url"), Duration::from_secs(5));
        assert_eq!(sink.name(), "noop");
    }

    #[test]
    fn test_sink_for_valid_url_is_webhook() {
        let sink = sink_for(Some("http://127.0.0.1:9/hook"), Duration::from_secs(5));
        assert_eq!(sink.name(), "webhook");
    }

    #[test]
    fn test_noop_sink_accepts_everything() {
        NoopSink.notify(NotifyKind::Error, "ignored");
    }

    #[test]
    fn test_kind_displays_as_label() {
        assert_eq!(NotifyKind::Success.to_string(), "SUCCESS");
        assert_eq!(NotifyKind::Error.to_string(), "ERROR");
    }

    #[tokio::test]
    async fn test_noop_flush_resolves_immediately() {
        tokio::time::timeout(Duration::from_millis(50), NoopSink.flush())
            .await
            .unwrap();
    }

    #[test]
    fn test_shared_sink_forwards_events() {
        let recorder = crate::test_support::RecordingSink::new();
        let shared: Arc<dyn NotificationSink> = Arc::new(recorder.clone());
        let boxed: Box<dyn NotificationSink> = Box::new(Arc::clone(&shared));

        boxed.notify(NotifyKind::Success, "Found entry: apple");
        assert_eq!(boxed.name(), "recording");
        assert_eq!(recorder.events(), vec!["[SUCCESS] Found entry: apple"]);
    }
}
