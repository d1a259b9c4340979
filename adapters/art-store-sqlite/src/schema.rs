//! Database schema initialization

use sqlx::sqlite::SqlitePool;

pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Art entries //
	/////////////////
	// AUTOINCREMENT keeps ids monotonic and never reused, which the
	// cursor pagination relies on.
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS art_entries (
		art_id integer PRIMARY KEY AUTOINCREMENT,
		ball_id integer NOT NULL,
		submitter_id integer NOT NULL,
		title text,
		description text,
		media_url text NOT NULL,
		status char(1) NOT NULL DEFAULT 'P',	-- 'P' - Pending, 'A' - Approved, 'R' - Rejected
		enabled boolean NOT NULL DEFAULT true,
		created_at datetime NOT NULL DEFAULT (unixepoch()),
		reviewer_id integer,
		reviewed_at datetime,
		rejection_reason text
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query(
		"CREATE INDEX IF NOT EXISTS idx_art_entries_ball ON art_entries(ball_id, status, enabled)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query(
		"CREATE INDEX IF NOT EXISTS idx_art_entries_submitter ON art_entries(submitter_id, created_at)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_art_entries_status ON art_entries(status, art_id)")
		.execute(&mut *tx)
		.await?;

	// Settings //
	//////////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
		name text NOT NULL,
		value text,
		PRIMARY KEY(name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
