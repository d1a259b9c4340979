//! Artdex server binary
//!
//! Wires the SQLite store and the configured notify adapter into the app
//! state and serves the HTTP surface.

use std::sync::Arc;
use std::{env, path};

use artdex_art_store_sqlite::ArtStoreSqlite;
use artdex_core::AppBuilder;
use artdex_types::prelude::*;
use tracing::info;

mod notify;
mod routes;

pub struct Config {
	pub listen: String,
	pub data_dir: path::PathBuf,
	pub notify_webhook_url: Option<String>,
}

impl Config {
	fn from_env() -> Self {
		Config {
			listen: env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
			data_dir: path::PathBuf::from(env::var("DATA_DIR").unwrap_or("./data".to_string())),
			notify_webhook_url: env::var("NOTIFY_WEBHOOK_URL").ok(),
		}
	}
}

#[tokio::main]
async fn main() -> AdResult<()> {
	let config = Config::from_env();

	tokio::fs::create_dir_all(&config.data_dir).await?;
	let art_store = Arc::new(ArtStoreSqlite::new(config.data_dir.join("art.db")).await?);
	let notify_adapter = notify::from_config(config.notify_webhook_url.as_deref())?;

	let app = AppBuilder::new()
		.art_store(art_store)
		.notify_adapter(notify_adapter)
		.build()
		.await?;

	let router = routes::init(app);

	let listener = tokio::net::TcpListener::bind(&config.listen).await?;
	info!(listen = %config.listen, "artdex server listening");
	axum::serve(listener, router).await?;

	Ok(())
}

// vim: ts=4
