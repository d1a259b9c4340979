//! Read-only query facade enforcing the visibility rules

use artdex_core::extract::AuthCtx;
use artdex_types::art_store::{ArtEntry, ListArtOptions};

use crate::prelude::*;

/// Approved, enabled artwork for a ball, newest first. Fails closed with
/// an empty list when viewing is switched off.
pub async fn view_for_ball(app: &App, ball: BallId, page: &Pagination) -> AdResult<Vec<ArtEntry>> {
	if !app.settings.get().viewing_enabled {
		return Ok(Vec::new());
	}

	let opts = ListArtOptions {
		ball: Some(ball),
		status: Some(ArtStatus::Approved),
		enabled: Some(true),
		..Default::default()
	};
	app.art_store.list_entries(&opts, page).await
}

/// Single-entry detail. Approved and enabled entries are public; artists
/// always see their own submissions; moderators see everything. Everyone
/// else gets `NotVisible` - distinct from `NotFound`, matching the host's
/// "no permission" reply for an entry that does exist.
pub async fn info(
	app: &App,
	art_id: EntryId,
	requester: Option<&AuthCtx>,
) -> AdResult<ArtEntry> {
	let entry = app.art_store.read_entry(art_id).await?;

	let public = entry.status == ArtStatus::Approved && entry.enabled;
	let own = requester.is_some_and(|auth| auth.player == entry.submitter);
	let moderator = requester.is_some_and(AuthCtx::is_moderator);

	if public || own || moderator {
		Ok(entry)
	} else {
		Err(Error::NotVisible)
	}
}

// vim: ts=4
