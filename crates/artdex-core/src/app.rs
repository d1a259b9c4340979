//! App builder - constructs the shared application state

use std::sync::Arc;

use artdex_types::art_store::ArtStore;
use artdex_types::notify_adapter::NotifyAdapter;

use crate::prelude::*;
use crate::settings::service::SettingsService;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared state behind every request handler.
#[derive(Debug)]
pub struct AppState {
	pub art_store: Arc<dyn ArtStore>,
	pub notify_adapter: Arc<dyn NotifyAdapter>,
	pub settings: SettingsService,
}

pub type App = Arc<AppState>;

/// Adapter slots filled by the binary before `build`.
#[derive(Default)]
pub struct AppBuilder {
	art_store: Option<Arc<dyn ArtStore>>,
	notify_adapter: Option<Arc<dyn NotifyAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		AppBuilder::default()
	}

	pub fn art_store(mut self, art_store: Arc<dyn ArtStore>) -> Self {
		self.art_store = Some(art_store);
		self
	}

	pub fn notify_adapter(mut self, notify_adapter: Arc<dyn NotifyAdapter>) -> Self {
		self.notify_adapter = Some(notify_adapter);
		self
	}

	/// Builds the app state and loads persisted settings over the defaults.
	pub async fn build(self) -> AdResult<App> {
		let art_store =
			self.art_store.ok_or_else(|| Error::ConfigError("art store not configured".into()))?;
		let notify_adapter = self
			.notify_adapter
			.ok_or_else(|| Error::ConfigError("notify adapter not configured".into()))?;

		let settings = SettingsService::new(art_store.clone());
		settings.load().await?;

		info!(version = VERSION, "artdex app state initialized");
		Ok(Arc::new(AppState { art_store, notify_adapter, settings }))
	}
}

// vim: ts=4
