//! End-to-end art workflow tests
//!
//! Drives the submission, moderation, and view services over the real
//! SQLite store with a recording notify adapter.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use tempfile::TempDir;

use artdex_art::{moderation, submission, view};
use artdex_art_store_sqlite::ArtStoreSqlite;
use artdex_core::extract::AuthCtx;
use artdex_core::settings::types::UpdateArtSettings;
use artdex_core::{App, AppBuilder};
use artdex_types::error::{AdResult, Error};
use artdex_types::notify_adapter::{NotifyAdapter, ReviewNotification};
use artdex_types::types::{ArtStatus, BallId, EntryId, Pagination, PlayerId, Timestamp};

#[derive(Debug, Default)]
struct RecordingNotifier {
	notes: Mutex<Vec<ReviewNotification>>,
}

#[async_trait]
impl NotifyAdapter for RecordingNotifier {
	async fn notify_review(&self, note: &ReviewNotification) -> AdResult<()> {
		self.notes.lock().push(note.clone());
		Ok(())
	}
}

/// Notify adapter that always fails delivery.
#[derive(Debug)]
struct FailingNotifier;

#[async_trait]
impl NotifyAdapter for FailingNotifier {
	async fn notify_review(&self, _note: &ReviewNotification) -> AdResult<()> {
		Err(Error::DbError)
	}
}

async fn test_app() -> (App, Arc<RecordingNotifier>, TempDir) {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let store = Arc::new(
		ArtStoreSqlite::new(temp.path().join("art.db")).await.expect("Failed to create store"),
	);
	let notifier = Arc::new(RecordingNotifier::default());
	let app = AppBuilder::default()
		.art_store(store)
		.notify_adapter(notifier.clone())
		.build()
		.await
		.expect("Failed to build app");

	(app, notifier, temp)
}

fn params(ball: i64) -> submission::SubmitParams {
	submission::SubmitParams {
		ball: BallId(ball),
		media_url: "https://cdn.example.com/art/1.png".into(),
		title: Some("Shiny".into()),
		description: None,
	}
}

fn ctx(player: i64, roles: &[&str]) -> AuthCtx {
	AuthCtx {
		player: PlayerId(player),
		roles: roles.iter().map(|r| (*r).to_owned().into_boxed_str()).collect(),
	}
}

fn player_ctx(player: i64) -> AuthCtx {
	ctx(player, &[])
}

fn moderator_ctx(player: i64) -> AuthCtx {
	ctx(player, &["MOD"])
}

// Submission //
//************//

#[tokio::test]
async fn submit_creates_pending_entry() {
	let (app, _notifier, _temp) = test_app().await;

	let entry = submission::submit(&app, PlayerId(42), params(7), Timestamp::now())
		.await
		.expect("Should submit");

	assert_eq!(entry.status, ArtStatus::Pending);
	assert_eq!(entry.submitter, PlayerId(42));
	assert_eq!(entry.ball, BallId(7));
	assert!(entry.enabled);
	assert!(entry.reviewer.is_none());
}

#[tokio::test]
async fn submit_fails_when_submissions_disabled() {
	let (app, _notifier, _temp) = test_app().await;
	app.settings
		.update(UpdateArtSettings { submissions_enabled: Some(false), ..Default::default() })
		.await
		.expect("Should update settings");

	let res = submission::submit(&app, PlayerId(42), params(7), Timestamp::now()).await;

	assert!(matches!(res, Err(Error::FeatureDisabled(_))));
	let pending = moderation::list_pending(&app, &Pagination::default()).await.unwrap();
	assert!(pending.is_empty());
}

#[tokio::test]
async fn feature_toggle_is_checked_before_media_url() {
	let (app, _notifier, _temp) = test_app().await;
	app.settings
		.update(UpdateArtSettings { submissions_enabled: Some(false), ..Default::default() })
		.await
		.expect("Should update settings");

	let mut p = params(7);
	p.media_url = "not a url".into();
	let res = submission::submit(&app, PlayerId(42), p, Timestamp::now()).await;

	assert!(matches!(res, Err(Error::FeatureDisabled(_))));
}

#[tokio::test]
async fn invalid_media_url_writes_nothing() {
	let (app, _notifier, _temp) = test_app().await;

	let mut p = params(7);
	p.media_url = "ftp://example.com/a.png".into();
	let res = submission::submit(&app, PlayerId(42), p, Timestamp::now()).await;

	assert!(matches!(res, Err(Error::InvalidMedia(_))));
	let pending = moderation::list_pending(&app, &Pagination::default()).await.unwrap();
	assert!(pending.is_empty());
}

#[tokio::test]
async fn quota_blocks_after_limit_is_reached() {
	let (app, _notifier, _temp) = test_app().await;
	app.settings
		.update(UpdateArtSettings { max_submissions_per_day: Some(2), ..Default::default() })
		.await
		.expect("Should update settings");

	let now = Timestamp::now();
	submission::submit(&app, PlayerId(42), params(1), now).await.expect("First should pass");
	submission::submit(&app, PlayerId(42), params(2), now).await.expect("Second should pass");
	let res = submission::submit(&app, PlayerId(42), params(3), now).await;

	assert!(matches!(res, Err(Error::RateLimitExceeded { limit: 2 })));

	// The quota is per submitter.
	submission::submit(&app, PlayerId(43), params(1), now)
		.await
		.expect("Other submitter is unaffected");
}

#[tokio::test]
async fn quota_of_zero_blocks_all_submissions() {
	let (app, _notifier, _temp) = test_app().await;
	app.settings
		.update(UpdateArtSettings { max_submissions_per_day: Some(0), ..Default::default() })
		.await
		.expect("Should update settings");

	let res = submission::submit(&app, PlayerId(42), params(1), Timestamp::now()).await;

	assert!(matches!(res, Err(Error::RateLimitExceeded { limit: 0 })));
}

#[tokio::test]
async fn auto_approval_when_review_not_required() {
	let (app, _notifier, _temp) = test_app().await;
	app.settings
		.update(UpdateArtSettings { require_approval: Some(false), ..Default::default() })
		.await
		.expect("Should update settings");

	let entry = submission::submit(&app, PlayerId(42), params(7), Timestamp::now())
		.await
		.expect("Should submit");

	assert_eq!(entry.status, ArtStatus::Approved);
	let visible = view::view_for_ball(&app, BallId(7), &Pagination::default()).await.unwrap();
	assert_eq!(visible.len(), 1);
}

// Moderation //
//************//

#[tokio::test]
async fn approve_commits_and_notifies() {
	let (app, notifier, _temp) = test_app().await;
	let entry = submission::submit(&app, PlayerId(42), params(7), Timestamp::now())
		.await
		.expect("Should submit");

	let now = Timestamp::now();
	let approved =
		moderation::approve(&app, entry.art_id, PlayerId(100), now).await.expect("Should approve");

	assert_eq!(approved.status, ArtStatus::Approved);
	assert_eq!(approved.reviewer, Some(PlayerId(100)));
	assert_eq!(approved.reviewed_at, Some(now));

	let notes = notifier.notes.lock();
	assert_eq!(notes.len(), 1);
	assert_eq!(notes[0].entry_id, entry.art_id);
	assert_eq!(notes[0].submitter, PlayerId(42));
	assert_eq!(notes[0].status, ArtStatus::Approved);
	assert_eq!(notes[0].reviewer, PlayerId(100));
	assert!(notes[0].reason.is_none());
}

#[tokio::test]
async fn re_approving_is_noop_without_notification() {
	let (app, notifier, _temp) = test_app().await;
	let entry = submission::submit(&app, PlayerId(42), params(7), Timestamp::now())
		.await
		.expect("Should submit");

	moderation::approve(&app, entry.art_id, PlayerId(100), Timestamp::now())
		.await
		.expect("Should approve");
	let again = moderation::approve(&app, entry.art_id, PlayerId(200), Timestamp::now())
		.await
		.expect("Re-approve should be a no-op success");

	assert_eq!(again.reviewer, Some(PlayerId(100)));
	assert_eq!(notifier.notes.lock().len(), 1);
}

#[tokio::test]
async fn reject_stores_reason_and_notifies() {
	let (app, notifier, _temp) = test_app().await;
	let entry = submission::submit(&app, PlayerId(42), params(7), Timestamp::now())
		.await
		.expect("Should submit");

	let rejected = moderation::reject(
		&app,
		entry.art_id,
		PlayerId(100),
		Some("blurry".into()),
		Timestamp::now(),
	)
	.await
	.expect("Should reject");

	assert_eq!(rejected.status, ArtStatus::Rejected);
	assert_eq!(rejected.rejection_reason.as_deref(), Some("blurry"));

	let notes = notifier.notes.lock();
	assert_eq!(notes.len(), 1);
	assert_eq!(notes[0].status, ArtStatus::Rejected);
	assert_eq!(notes[0].reason.as_deref(), Some("blurry"));
}

#[tokio::test]
async fn notification_failure_never_fails_the_decision() {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let store = Arc::new(
		ArtStoreSqlite::new(temp.path().join("art.db")).await.expect("Failed to create store"),
	);
	let app = AppBuilder::default()
		.art_store(store)
		.notify_adapter(Arc::new(FailingNotifier))
		.build()
		.await
		.expect("Failed to build app");

	let entry = submission::submit(&app, PlayerId(42), params(7), Timestamp::now())
		.await
		.expect("Should submit");
	let approved = moderation::approve(&app, entry.art_id, PlayerId(100), Timestamp::now()).await;

	assert!(approved.is_ok());
}

#[tokio::test]
async fn list_pending_is_oldest_first() {
	let (app, _notifier, _temp) = test_app().await;
	let first = submission::submit(&app, PlayerId(42), params(1), Timestamp::now())
		.await
		.expect("Should submit");
	let second = submission::submit(&app, PlayerId(42), params(2), Timestamp::now())
		.await
		.expect("Should submit");
	moderation::approve(&app, first.art_id, PlayerId(100), Timestamp::now())
		.await
		.expect("Should approve");
	let third = submission::submit(&app, PlayerId(42), params(3), Timestamp::now())
		.await
		.expect("Should submit");

	let pending = moderation::list_pending(&app, &Pagination::default()).await.unwrap();

	assert_eq!(pending.len(), 2);
	assert_eq!(pending[0].art_id, second.art_id);
	assert_eq!(pending[1].art_id, third.art_id);
}

#[tokio::test]
async fn bulk_approve_reports_per_id_results() {
	let (app, notifier, _temp) = test_app().await;
	let a = submission::submit(&app, PlayerId(42), params(1), Timestamp::now())
		.await
		.expect("Should submit");
	let b = submission::submit(&app, PlayerId(42), params(2), Timestamp::now())
		.await
		.expect("Should submit");
	let missing = EntryId(9999);

	let results = moderation::bulk_approve(
		&app,
		&[a.art_id, missing, b.art_id],
		PlayerId(100),
		Timestamp::now(),
	)
	.await;

	assert_eq!(results.len(), 3);
	assert!(results[0].1.is_ok());
	assert!(matches!(results[1].1, Err(Error::NotFound)));
	assert!(results[2].1.is_ok());

	// One notification per successful transition.
	assert_eq!(notifier.notes.lock().len(), 2);
}

#[tokio::test]
async fn bulk_reject_applies_one_reason_to_all() {
	let (app, _notifier, _temp) = test_app().await;
	let a = submission::submit(&app, PlayerId(42), params(1), Timestamp::now())
		.await
		.expect("Should submit");
	let b = submission::submit(&app, PlayerId(42), params(2), Timestamp::now())
		.await
		.expect("Should submit");

	let results = moderation::bulk_reject(
		&app,
		&[a.art_id, b.art_id],
		PlayerId(100),
		Some("off-topic".into()),
		Timestamp::now(),
	)
	.await;

	for (_, res) in results {
		let entry = res.expect("Should reject");
		assert_eq!(entry.status, ArtStatus::Rejected);
		assert_eq!(entry.rejection_reason.as_deref(), Some("off-topic"));
	}
}

// Viewing //
//*********//

#[tokio::test]
async fn view_excludes_pending_rejected_and_disabled() {
	let (app, _notifier, _temp) = test_app().await;
	let now = Timestamp::now();
	let _pending = submission::submit(&app, PlayerId(42), params(7), now).await.unwrap();
	let approved = submission::submit(&app, PlayerId(42), params(7), now).await.unwrap();
	let rejected = submission::submit(&app, PlayerId(42), params(7), now).await.unwrap();
	let hidden = submission::submit(&app, PlayerId(42), params(7), now).await.unwrap();

	moderation::approve(&app, approved.art_id, PlayerId(100), now).await.unwrap();
	moderation::reject(&app, rejected.art_id, PlayerId(100), None, now).await.unwrap();
	moderation::approve(&app, hidden.art_id, PlayerId(100), now).await.unwrap();
	moderation::set_enabled(&app, hidden.art_id, false).await.unwrap();

	let visible = view::view_for_ball(&app, BallId(7), &Pagination::default()).await.unwrap();

	assert_eq!(visible.len(), 1);
	assert_eq!(visible[0].art_id, approved.art_id);
}

#[tokio::test]
async fn view_fails_closed_when_viewing_disabled() {
	let (app, _notifier, _temp) = test_app().await;
	let entry = submission::submit(&app, PlayerId(42), params(7), Timestamp::now())
		.await
		.expect("Should submit");
	moderation::approve(&app, entry.art_id, PlayerId(100), Timestamp::now())
		.await
		.expect("Should approve");

	app.settings
		.update(UpdateArtSettings { viewing_enabled: Some(false), ..Default::default() })
		.await
		.expect("Should update settings");

	let visible = view::view_for_ball(&app, BallId(7), &Pagination::default()).await.unwrap();
	assert!(visible.is_empty());
}

#[tokio::test]
async fn info_visibility_rules() {
	let (app, _notifier, _temp) = test_app().await;
	let entry = submission::submit(&app, PlayerId(42), params(7), Timestamp::now())
		.await
		.expect("Should submit");

	// Pending: owner and moderator see it, others get NotVisible.
	assert!(view::info(&app, entry.art_id, Some(&player_ctx(42))).await.is_ok());
	assert!(view::info(&app, entry.art_id, Some(&moderator_ctx(500))).await.is_ok());
	assert!(matches!(
		view::info(&app, entry.art_id, Some(&player_ctx(43))).await,
		Err(Error::NotVisible)
	));
	assert!(matches!(view::info(&app, entry.art_id, None).await, Err(Error::NotVisible)));

	// Approved and enabled: public.
	moderation::approve(&app, entry.art_id, PlayerId(100), Timestamp::now())
		.await
		.expect("Should approve");
	assert!(view::info(&app, entry.art_id, None).await.is_ok());

	// Disabled again: back to owner and moderator only.
	moderation::set_enabled(&app, entry.art_id, false).await.expect("Should disable");
	assert!(matches!(view::info(&app, entry.art_id, None).await, Err(Error::NotVisible)));
	assert!(view::info(&app, entry.art_id, Some(&player_ctx(42))).await.is_ok());
}

#[tokio::test]
async fn info_missing_entry_is_not_found() {
	let (app, _notifier, _temp) = test_app().await;

	let res = view::info(&app, EntryId(9999), Some(&moderator_ctx(1))).await;

	assert!(matches!(res, Err(Error::NotFound)));
}

// vim: ts=4
