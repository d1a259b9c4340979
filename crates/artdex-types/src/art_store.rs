//! Art store adapter contract.
//!
//! The store owns persistence of art entries and the settings key-value
//! rows. Any backend is acceptable as long as `update_entry` is atomic
//! per-id and listings can be ordered by creation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::error::AdResult;
use crate::types::{ArtStatus, BallId, EntryId, Pagination, Patch, PlayerId, Timestamp};

/// A stored art submission.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtEntry {
	#[serde(rename = "id")]
	pub art_id: EntryId,
	pub ball: BallId,
	pub submitter: PlayerId,
	pub title: Option<Box<str>>,
	pub description: Option<Box<str>>,
	pub media_url: Box<str>,
	pub status: ArtStatus,
	pub enabled: bool,
	pub created_at: Timestamp,
	pub reviewer: Option<PlayerId>,
	pub reviewed_at: Option<Timestamp>,
	pub rejection_reason: Option<Box<str>>,
}

/// Draft handed to `create_entry`. Id and creation time are assigned by the
/// store; new entries are always enabled.
#[derive(Clone, Debug)]
pub struct CreateArtEntry {
	pub ball: BallId,
	pub submitter: PlayerId,
	pub title: Option<Box<str>>,
	pub description: Option<Box<str>>,
	pub media_url: Box<str>,
	pub status: ArtStatus,
}

/// Review decision applied through `update_entry`.
#[derive(Clone, Debug)]
pub enum ReviewDecision {
	Approve,
	Reject { reason: Option<Box<str>> },
}

impl ReviewDecision {
	pub fn target_status(&self) -> ArtStatus {
		match self {
			ReviewDecision::Approve => ArtStatus::Approved,
			ReviewDecision::Reject { .. } => ArtStatus::Rejected,
		}
	}
}

/// A committed review action: decision plus audit fields, set together.
#[derive(Clone, Debug)]
pub struct ReviewAction {
	pub decision: ReviewDecision,
	pub reviewer: PlayerId,
	pub reviewed_at: Timestamp,
}

/// Partial update of an entry. Undefined fields stay untouched. The review
/// field drives the status state machine and its audit columns atomically.
#[derive(Clone, Debug, Default)]
pub struct UpdateArtEntry {
	pub title: Patch<Box<str>>,
	pub description: Patch<Box<str>>,
	pub enabled: Option<bool>,
	pub review: Option<ReviewAction>,
}

/// Listing order. Ids are monotonic, so id order equals creation order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListOrder {
	/// Newest first (display surfaces)
	#[default]
	CreatedDesc,
	/// Oldest first (FIFO moderation triage)
	CreatedAsc,
}

/// Filter predicate combination for `list_entries`.
#[derive(Clone, Debug, Default)]
pub struct ListArtOptions {
	pub ball: Option<BallId>,
	pub submitter: Option<PlayerId>,
	pub status: Option<ArtStatus>,
	pub enabled: Option<bool>,
	/// Free-text match over title and description
	pub q: Option<Box<str>>,
	pub order: ListOrder,
}

#[async_trait]
pub trait ArtStore: Debug + Send + Sync {
	// Entries
	//********
	async fn create_entry(&self, draft: CreateArtEntry) -> AdResult<ArtEntry>;
	async fn read_entry(&self, art_id: EntryId) -> AdResult<ArtEntry>;

	/// Applies the update atomically for the given id. Fails with
	/// `Error::InvalidTransition` when the review action violates the
	/// status invariants; re-deciding to the current status returns the
	/// entry unchanged.
	async fn update_entry(&self, art_id: EntryId, update: &UpdateArtEntry) -> AdResult<ArtEntry>;

	async fn list_entries(
		&self,
		opts: &ListArtOptions,
		page: &Pagination,
	) -> AdResult<Vec<ArtEntry>>;

	/// Number of entries by `submitter` created at or after `since`.
	async fn count_entries_since(&self, submitter: PlayerId, since: Timestamp) -> AdResult<u32>;

	// Settings
	//*********
	async fn read_setting(&self, name: &str) -> AdResult<Option<serde_json::Value>>;
	async fn update_setting(&self, name: &str, value: Option<serde_json::Value>) -> AdResult<()>;
}

// vim: ts=4
