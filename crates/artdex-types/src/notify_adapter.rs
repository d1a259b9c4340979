//! Outbound notification contract.
//!
//! The service emits a notification *request* after a committed review
//! transition; delivery to the submitter (DM, embed, whatever the host
//! prefers) is entirely the host's concern. Implementations must treat the
//! call as fire-and-forget: a delivery failure is logged by the caller and
//! never surfaced to the moderation operation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::error::AdResult;
use crate::types::{ArtStatus, BallId, EntryId, PlayerId};

/// Payload describing a committed review transition.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewNotification {
	pub entry_id: EntryId,
	pub ball: BallId,
	pub submitter: PlayerId,
	pub status: ArtStatus,
	pub reviewer: PlayerId,
	pub reason: Option<Box<str>>,
}

#[async_trait]
pub trait NotifyAdapter: Debug + Send + Sync {
	async fn notify_review(&self, note: &ReviewNotification) -> AdResult<()>;
}

// vim: ts=4
