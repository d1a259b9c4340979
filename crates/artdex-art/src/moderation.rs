//! Moderation service
//!
//! Drives the review state machine. Each successful transition out of the
//! current state is committed in the store first; the notification request
//! is emitted afterwards, so a slow or failing notification never holds
//! back the transition.

use artdex_types::art_store::{
	ArtEntry, ListArtOptions, ListOrder, ReviewAction, ReviewDecision, UpdateArtEntry,
};
use artdex_types::notify_adapter::ReviewNotification;

use crate::prelude::*;

/// Pending entries, oldest first - FIFO triage order.
pub async fn list_pending(app: &App, page: &Pagination) -> AdResult<Vec<ArtEntry>> {
	let opts = ListArtOptions {
		status: Some(ArtStatus::Pending),
		order: ListOrder::CreatedAsc,
		..Default::default()
	};
	app.art_store.list_entries(&opts, page).await
}

/// Approves an entry. Approving an already-approved entry is a no-op
/// success and emits no notification.
pub async fn approve(
	app: &App,
	art_id: EntryId,
	reviewer: PlayerId,
	now: Timestamp,
) -> AdResult<ArtEntry> {
	let current = app.art_store.read_entry(art_id).await?;
	if current.status == ArtStatus::Approved {
		debug!(art_id = %art_id, "entry already approved, nothing to do");
		return Ok(current);
	}

	let update = UpdateArtEntry {
		review: Some(ReviewAction {
			decision: ReviewDecision::Approve,
			reviewer,
			reviewed_at: now,
		}),
		..Default::default()
	};
	let entry = app.art_store.update_entry(art_id, &update).await?;

	info!(art_id = %art_id, reviewer = %reviewer, "art entry approved");
	emit_review_notification(app, &entry).await;
	Ok(entry)
}

/// Rejects an entry with an optional reason. Rejecting an already-rejected
/// entry is a no-op success; the stored reason is kept.
pub async fn reject(
	app: &App,
	art_id: EntryId,
	reviewer: PlayerId,
	reason: Option<Box<str>>,
	now: Timestamp,
) -> AdResult<ArtEntry> {
	let current = app.art_store.read_entry(art_id).await?;
	if current.status == ArtStatus::Rejected {
		debug!(art_id = %art_id, "entry already rejected, nothing to do");
		return Ok(current);
	}

	let update = UpdateArtEntry {
		review: Some(ReviewAction {
			decision: ReviewDecision::Reject { reason },
			reviewer,
			reviewed_at: now,
		}),
		..Default::default()
	};
	let entry = app.art_store.update_entry(art_id, &update).await?;

	info!(art_id = %art_id, reviewer = %reviewer, "art entry rejected");
	emit_review_notification(app, &entry).await;
	Ok(entry)
}

/// Best-effort batch approve: every id is attempted, one failure never
/// aborts the rest. The caller gets a per-id result manifest.
pub async fn bulk_approve(
	app: &App,
	art_ids: &[EntryId],
	reviewer: PlayerId,
	now: Timestamp,
) -> Vec<(EntryId, AdResult<ArtEntry>)> {
	let mut manifest = Vec::with_capacity(art_ids.len());
	for &art_id in art_ids {
		manifest.push((art_id, approve(app, art_id, reviewer, now).await));
	}
	manifest
}

/// Best-effort batch reject; the same reason applies to every entry.
pub async fn bulk_reject(
	app: &App,
	art_ids: &[EntryId],
	reviewer: PlayerId,
	reason: Option<Box<str>>,
	now: Timestamp,
) -> Vec<(EntryId, AdResult<ArtEntry>)> {
	let mut manifest = Vec::with_capacity(art_ids.len());
	for &art_id in art_ids {
		manifest.push((art_id, reject(app, art_id, reviewer, reason.clone(), now).await));
	}
	manifest
}

/// Toggles visibility independent of review status.
pub async fn set_enabled(app: &App, art_id: EntryId, enabled: bool) -> AdResult<ArtEntry> {
	let update = UpdateArtEntry { enabled: Some(enabled), ..Default::default() };
	let entry = app.art_store.update_entry(art_id, &update).await?;
	info!(art_id = %art_id, enabled, "art entry visibility changed");
	Ok(entry)
}

/// Emits the notification request for a committed transition. Delivery is
/// the host's concern; failure is logged and never surfaced.
async fn emit_review_notification(app: &App, entry: &ArtEntry) {
	let Some(reviewer) = entry.reviewer else {
		// A freshly decided entry always carries its reviewer.
		warn!(art_id = %entry.art_id, "decided entry without reviewer, skipping notification");
		return;
	};

	let note = ReviewNotification {
		entry_id: entry.art_id,
		ball: entry.ball,
		submitter: entry.submitter,
		status: entry.status,
		reviewer,
		reason: entry.rejection_reason.clone(),
	};

	if let Err(err) = app.notify_adapter.notify_review(&note).await {
		warn!(art_id = %entry.art_id, error = %err, "review notification failed");
	}
}

// vim: ts=4
