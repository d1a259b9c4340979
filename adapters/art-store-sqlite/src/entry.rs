//! Art entry persistence
//!
//! Create, read, atomic update, filtered listing, and the quota count.
//! `update` runs as a single transaction: read current state, validate
//! the status transition, apply, re-read.

use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use artdex_types::art_store::{
	ArtEntry, CreateArtEntry, ListArtOptions, ListOrder, ReviewDecision, UpdateArtEntry,
};
use artdex_types::prelude::*;

use crate::utils::{collect_res, inspect, map_res, push_patch};

const ENTRY_COLUMNS: &str = "art_id, ball_id, submitter_id, title, description, media_url, \
	status, enabled, created_at, reviewer_id, reviewed_at, rejection_reason";

fn map_entry(row: &SqliteRow) -> Result<ArtEntry, sqlx::Error> {
	let code: &str = row.try_get("status")?;
	let status = ArtStatus::from_code(code).ok_or_else(|| sqlx::Error::ColumnDecode {
		index: "status".into(),
		source: format!("unknown status code '{}'", code).into(),
	})?;

	Ok(ArtEntry {
		art_id: EntryId(row.try_get("art_id")?),
		ball: BallId(row.try_get("ball_id")?),
		submitter: PlayerId(row.try_get("submitter_id")?),
		title: row.try_get("title")?,
		description: row.try_get("description")?,
		media_url: row.try_get("media_url")?,
		status,
		enabled: row.try_get("enabled")?,
		created_at: Timestamp(row.try_get("created_at")?),
		reviewer: row.try_get::<Option<i64>, _>("reviewer_id")?.map(PlayerId),
		reviewed_at: row.try_get::<Option<i64>, _>("reviewed_at")?.map(Timestamp),
		rejection_reason: row.try_get("rejection_reason")?,
	})
}

/// A decided entry never returns to Pending; every other pair in the
/// table is reachable (Pending can go either way, decisions can be
/// re-reviewed to the opposite decision).
pub(crate) fn validate_transition(_current: ArtStatus, target: ArtStatus) -> AdResult<()> {
	match target {
		ArtStatus::Pending => {
			Err(Error::InvalidTransition("an entry cannot be moved back to pending"))
		}
		ArtStatus::Approved | ArtStatus::Rejected => Ok(()),
	}
}

pub(crate) async fn create(db: &SqlitePool, draft: CreateArtEntry) -> AdResult<ArtEntry> {
	let sql = format!(
		"INSERT INTO art_entries (ball_id, submitter_id, title, description, media_url, status)
		VALUES (?, ?, ?, ?, ?, ?) RETURNING {ENTRY_COLUMNS}"
	);
	let res = sqlx::query(&sql)
		.bind(draft.ball.0)
		.bind(draft.submitter.0)
		.bind(&draft.title)
		.bind(&draft.description)
		.bind(&draft.media_url)
		.bind(draft.status.as_code())
		.fetch_one(db)
		.await;

	map_res(res, map_entry)
}

pub(crate) async fn read(db: &SqlitePool, art_id: EntryId) -> AdResult<ArtEntry> {
	let sql = format!("SELECT {ENTRY_COLUMNS} FROM art_entries WHERE art_id = ?");
	let res = sqlx::query(&sql).bind(art_id.0).fetch_one(db).await;

	map_res(res, map_entry)
}

pub(crate) async fn update(
	db: &SqlitePool,
	art_id: EntryId,
	update: &UpdateArtEntry,
) -> AdResult<ArtEntry> {
	let mut tx = db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	let sql = format!("SELECT {ENTRY_COLUMNS} FROM art_entries WHERE art_id = ?");
	let res = sqlx::query(&sql).bind(art_id.0).fetch_one(&mut *tx).await;
	let current = map_res(res, map_entry)?;

	// Re-deciding to the current status leaves the review columns alone.
	let review = match &update.review {
		Some(action) if action.decision.target_status() == current.status => None,
		Some(action) => {
			validate_transition(current.status, action.decision.target_status())?;
			Some(action)
		}
		None => None,
	};

	let mut query = sqlx::QueryBuilder::new("UPDATE art_entries SET ");
	let mut has_updates = false;
	has_updates = push_patch!(query, has_updates, "title", &update.title);
	has_updates = push_patch!(query, has_updates, "description", &update.description);
	if let Some(enabled) = update.enabled {
		if has_updates {
			query.push(", ");
		}
		query.push("enabled=").push_bind(enabled);
		has_updates = true;
	}
	if let Some(action) = review {
		if has_updates {
			query.push(", ");
		}
		query.push("status=").push_bind(action.decision.target_status().as_code());
		query.push(", reviewer_id=").push_bind(action.reviewer.0);
		query.push(", reviewed_at=").push_bind(action.reviewed_at.0);
		match &action.decision {
			ReviewDecision::Approve => {
				query.push(", rejection_reason=NULL");
			}
			ReviewDecision::Reject { reason } => {
				query.push(", rejection_reason=").push_bind(reason.clone());
			}
		}
		has_updates = true;
	}

	if !has_updates {
		return Ok(current);
	}

	query.push(" WHERE art_id=").push_bind(art_id.0);
	query.build().execute(&mut *tx).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	let res = sqlx::query(&sql).bind(art_id.0).fetch_one(&mut *tx).await;
	let entry = map_res(res, map_entry)?;

	tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;
	Ok(entry)
}

pub(crate) async fn list(
	db: &SqlitePool,
	opts: &ListArtOptions,
	page: &Pagination,
) -> AdResult<Vec<ArtEntry>> {
	let mut query = sqlx::QueryBuilder::new(format!(
		"SELECT {ENTRY_COLUMNS} FROM art_entries WHERE 1=1"
	));

	if let Some(ball) = opts.ball {
		query.push(" AND ball_id=").push_bind(ball.0);
	}
	if let Some(submitter) = opts.submitter {
		query.push(" AND submitter_id=").push_bind(submitter.0);
	}
	if let Some(status) = opts.status {
		query.push(" AND status=").push_bind(status.as_code());
	}
	if let Some(enabled) = opts.enabled {
		query.push(" AND enabled=").push_bind(enabled);
	}
	if let Some(q) = &opts.q {
		let like = format!("%{}%", q);
		query
			.push(" AND (title LIKE ")
			.push_bind(like.clone())
			.push(" OR description LIKE ")
			.push_bind(like)
			.push(")");
	}

	// Cursor over art_id: monotonic ids make pages stable while rows are
	// inserted concurrently.
	match opts.order {
		ListOrder::CreatedDesc => {
			if let Some(cursor) = page.cursor {
				query.push(" AND art_id<").push_bind(cursor.0);
			}
			query.push(" ORDER BY art_id DESC");
		}
		ListOrder::CreatedAsc => {
			if let Some(cursor) = page.cursor {
				query.push(" AND art_id>").push_bind(cursor.0);
			}
			query.push(" ORDER BY art_id ASC");
		}
	}
	query.push(" LIMIT ").push_bind(i64::from(page.limit()));

	let rows =
		query.build().fetch_all(db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(map_entry))
}

pub(crate) async fn count_since(
	db: &SqlitePool,
	submitter: PlayerId,
	since: Timestamp,
) -> AdResult<u32> {
	let res = sqlx::query(
		"SELECT COUNT(*) AS cnt FROM art_entries WHERE submitter_id = ? AND created_at >= ?",
	)
	.bind(submitter.0)
	.bind(since.0)
	.fetch_one(db)
	.await;

	map_res(res, |row| row.try_get::<i64, _>("cnt").map(|n| n.max(0) as u32))
}


// vim: ts=4
