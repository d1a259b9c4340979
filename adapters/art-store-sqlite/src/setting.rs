//! Settings key-value store management
//!
//! Handles persistent storage of service settings as JSON values.

use sqlx::{Row, SqlitePool};
use tracing::warn;

use artdex_types::prelude::*;

/// Read a single setting by name
pub(crate) async fn read(db: &SqlitePool, name: &str) -> AdResult<Option<serde_json::Value>> {
	let row = sqlx::query("SELECT value FROM settings WHERE name = ?")
		.bind(name)
		.fetch_optional(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(row.and_then(|r| {
		let value: Option<String> = r.get("value");
		value.and_then(|v| serde_json::from_str(&v).ok())
	}))
}

/// Update or create a setting
pub(crate) async fn update(
	db: &SqlitePool,
	name: &str,
	value: Option<serde_json::Value>,
) -> AdResult<()> {
	if let Some(val) = value {
		let value_str = val.to_string();
		sqlx::query("INSERT OR REPLACE INTO settings (name, value) VALUES (?, ?)")
			.bind(name)
			.bind(value_str)
			.execute(db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;
	} else {
		// Delete setting if value is None
		sqlx::query("DELETE FROM settings WHERE name = ?")
			.bind(name)
			.execute(db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;
	}

	Ok(())
}

// vim: ts=4
