//! SQLite-backed implementation of the art store contract.
//!
//! Stores art entries and the settings key-value rows in a single
//! database file. Entry updates run in one transaction per id, which
//! gives the per-id atomicity the contract asks for.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;
use tracing::warn;

use artdex_types::art_store::{ArtEntry, ArtStore, CreateArtEntry, ListArtOptions, UpdateArtEntry};
use artdex_types::prelude::*;

mod entry;
mod schema;
mod setting;
mod utils;

#[derive(Debug)]
pub struct ArtStoreSqlite {
	db: SqlitePool,
}

impl ArtStoreSqlite {
	pub async fn new(path: impl AsRef<Path>) -> AdResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		Ok(Self { db })
	}
}

#[async_trait]
impl ArtStore for ArtStoreSqlite {
	// Entries
	//********
	async fn create_entry(&self, draft: CreateArtEntry) -> AdResult<ArtEntry> {
		entry::create(&self.db, draft).await
	}

	async fn read_entry(&self, art_id: EntryId) -> AdResult<ArtEntry> {
		entry::read(&self.db, art_id).await
	}

	async fn update_entry(&self, art_id: EntryId, update: &UpdateArtEntry) -> AdResult<ArtEntry> {
		entry::update(&self.db, art_id, update).await
	}

	async fn list_entries(
		&self,
		opts: &ListArtOptions,
		page: &Pagination,
	) -> AdResult<Vec<ArtEntry>> {
		entry::list(&self.db, opts, page).await
	}

	async fn count_entries_since(&self, submitter: PlayerId, since: Timestamp) -> AdResult<u32> {
		entry::count_since(&self.db, submitter, since).await
	}

	// Settings
	//*********
	async fn read_setting(&self, name: &str) -> AdResult<Option<serde_json::Value>> {
		setting::read(&self.db, name).await
	}

	async fn update_setting(&self, name: &str, value: Option<serde_json::Value>) -> AdResult<()> {
		setting::update(&self.db, name, value).await
	}
}

// vim: ts=4
