//! Per-submitter daily submission quota
//!
//! The quota is a pure read over the store: it counts entries created in
//! the trailing 24-hour window and compares against the configured limit.
//! The "increment" is implicit in a later successful create, so a failed
//! submission needs no counter rollback. Two submissions racing past the
//! check may both commit and overshoot the limit by the number of racers
//! minus one; that slack is accepted.

use std::sync::Arc;

use artdex_types::art_store::ArtStore;

use crate::prelude::*;

/// Length of the rolling quota window.
pub const WINDOW_SECONDS: i64 = 24 * 60 * 60;

/// Fails with `RateLimitExceeded` when the submitter has already used up
/// the daily quota. A limit of zero blocks all submissions.
pub async fn check_daily_quota(
	store: &Arc<dyn ArtStore>,
	submitter: PlayerId,
	limit: u32,
	now: Timestamp,
) -> AdResult<()> {
	if limit == 0 {
		return Err(Error::RateLimitExceeded { limit });
	}

	let since = now.sub_seconds(WINDOW_SECONDS);
	let count = store.count_entries_since(submitter, since).await?;
	if count >= limit {
		debug!(submitter = %submitter, count, limit, "daily submission quota exhausted");
		return Err(Error::RateLimitExceeded { limit });
	}

	Ok(())
}

// vim: ts=4
