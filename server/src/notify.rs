//! Outbound review notification delivery
//!
//! The host consumes review notifications over a webhook. Without a
//! configured webhook URL the notifications are logged and dropped, which
//! keeps the moderation flow usable in development.

use async_trait::async_trait;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use std::sync::Arc;
use tracing::{debug, warn};

use artdex_types::notify_adapter::{NotifyAdapter, ReviewNotification};
use artdex_types::prelude::*;

/// Picks the notifier for the configured environment.
pub fn from_config(webhook_url: Option<&str>) -> AdResult<Arc<dyn NotifyAdapter>> {
	match webhook_url {
		Some(url) => Ok(Arc::new(WebhookNotifier::new(url)?)),
		None => Ok(Arc::new(NullNotifier)),
	}
}

/// Drops every notification, logging it at debug level.
#[derive(Debug)]
pub struct NullNotifier;

#[async_trait]
impl NotifyAdapter for NullNotifier {
	async fn notify_review(&self, note: &ReviewNotification) -> AdResult<()> {
		debug!(
			entry_id = %note.entry_id,
			status = %note.status,
			"no webhook configured, dropping review notification"
		);
		Ok(())
	}
}

/// POSTs each notification as JSON to the host's webhook endpoint.
pub struct WebhookNotifier {
	url: Box<str>,
	client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl std::fmt::Debug for WebhookNotifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WebhookNotifier").field("url", &self.url).finish()
	}
}

impl WebhookNotifier {
	pub fn new(url: &str) -> AdResult<Self> {
		let connector = HttpsConnectorBuilder::new()
			.with_native_roots()
			.map_err(|err| Error::ConfigError(format!("TLS init failed: {}", err)))?
			.https_or_http()
			.enable_http1()
			.enable_http2()
			.build();
		let client = Client::builder(TokioExecutor::new()).build(connector);

		Ok(Self { url: url.into(), client })
	}
}

#[async_trait]
impl NotifyAdapter for WebhookNotifier {
	async fn notify_review(&self, note: &ReviewNotification) -> AdResult<()> {
		let body =
			serde_json::to_vec(note).map_err(|err| Error::ValidationError(err.to_string()))?;

		let request = hyper::Request::builder()
			.method(hyper::Method::POST)
			.uri(self.url.as_ref())
			.header("Content-Type", "application/json")
			.body(Full::new(Bytes::from(body)))
			.map_err(|err| Error::ConfigError(format!("request build error: {}", err)))?;

		let response = self
			.client
			.request(request)
			.await
			.map_err(|err| Error::Io(std::io::Error::other(err.to_string())))?;

		let status = response.status();
		if status.is_success() {
			debug!(entry_id = %note.entry_id, "review notification delivered");
			Ok(())
		} else {
			warn!(entry_id = %note.entry_id, status = %status, "review webhook refused notification");
			Err(Error::Io(std::io::Error::other(format!("webhook returned {}", status))))
		}
	}
}

// vim: ts=4
