//! HTTP handlers for the art command surface
//!
//! Each endpoint maps 1:1 to an inbound host command: submit, view, info,
//! review (list pending), approve, reject. The router in the server crate
//! layers the moderator guard over the review endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use artdex_core::extract::{Auth, OptionalAuth};
use artdex_types::art_store::ArtEntry;
use artdex_types::types::ApiResponse;

use crate::prelude::*;
use crate::{moderation, submission, view};

// Player surface //
//****************//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
	pub ball: BallId,
	pub media_url: Box<str>,
	pub title: Option<Box<str>>,
	pub description: Option<Box<str>>,
}

/// POST /api/art - submit artwork for a ball
pub async fn post_submit(
	State(app): State<App>,
	Auth(auth): Auth,
	Json(req): Json<SubmitRequest>,
) -> AdResult<(StatusCode, Json<ApiResponse<ArtEntry>>)> {
	let params = submission::SubmitParams {
		ball: req.ball,
		media_url: req.media_url,
		title: req.title,
		description: req.description,
	};
	let entry = submission::submit(&app, auth.player, params, Timestamp::now()).await?;
	Ok((StatusCode::CREATED, Json(ApiResponse::new(entry))))
}

/// GET /api/ball/{ball_id}/art - approved artwork for a ball
pub async fn get_ball_art(
	State(app): State<App>,
	Path(ball_id): Path<i64>,
	Query(page): Query<Pagination>,
) -> AdResult<(StatusCode, Json<ApiResponse<Vec<ArtEntry>>>)> {
	let entries = view::view_for_ball(&app, BallId(ball_id), &page).await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(entries))))
}

/// GET /api/art/{art_id} - detail of a single entry
pub async fn get_art_info(
	State(app): State<App>,
	OptionalAuth(auth): OptionalAuth,
	Path(art_id): Path<i64>,
) -> AdResult<(StatusCode, Json<ApiResponse<ArtEntry>>)> {
	let entry = view::info(&app, EntryId(art_id), auth.as_ref()).await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(entry))))
}

// Review surface //
//****************//

/// GET /api/art/review/pending - triage queue, oldest first
pub async fn get_review_pending(
	State(app): State<App>,
	Auth(_auth): Auth,
	Query(page): Query<Pagination>,
) -> AdResult<(StatusCode, Json<ApiResponse<Vec<ArtEntry>>>)> {
	let entries = moderation::list_pending(&app, &page).await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(entries))))
}

/// POST /api/art/{art_id}/approve
pub async fn post_approve(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(art_id): Path<i64>,
) -> AdResult<(StatusCode, Json<ApiResponse<ArtEntry>>)> {
	let entry =
		moderation::approve(&app, EntryId(art_id), auth.player, Timestamp::now()).await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(entry))))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequest {
	pub reason: Option<Box<str>>,
}

/// POST /api/art/{art_id}/reject
pub async fn post_reject(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(art_id): Path<i64>,
	Json(req): Json<RejectRequest>,
) -> AdResult<(StatusCode, Json<ApiResponse<ArtEntry>>)> {
	let entry =
		moderation::reject(&app, EntryId(art_id), auth.player, req.reason, Timestamp::now())
			.await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(entry))))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReviewRequest {
	pub ids: Vec<EntryId>,
	pub reason: Option<Box<str>>,
}

/// One line of a bulk manifest; `code` is the stable error code when the
/// id failed.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResultItem {
	pub id: EntryId,
	pub ok: bool,
	pub code: Option<&'static str>,
}

fn into_manifest(results: Vec<(EntryId, AdResult<ArtEntry>)>) -> Vec<BulkResultItem> {
	results
		.into_iter()
		.map(|(id, res)| match res {
			Ok(_) => BulkResultItem { id, ok: true, code: None },
			Err(err) => BulkResultItem { id, ok: false, code: Some(err.code()) },
		})
		.collect()
}

/// POST /api/art/review/approve - best-effort batch
pub async fn post_bulk_approve(
	State(app): State<App>,
	Auth(auth): Auth,
	Json(req): Json<BulkReviewRequest>,
) -> AdResult<(StatusCode, Json<ApiResponse<Vec<BulkResultItem>>>)> {
	let results =
		moderation::bulk_approve(&app, &req.ids, auth.player, Timestamp::now()).await;
	Ok((StatusCode::OK, Json(ApiResponse::new(into_manifest(results)))))
}

/// POST /api/art/review/reject - best-effort batch
pub async fn post_bulk_reject(
	State(app): State<App>,
	Auth(auth): Auth,
	Json(req): Json<BulkReviewRequest>,
) -> AdResult<(StatusCode, Json<ApiResponse<Vec<BulkResultItem>>>)> {
	let results =
		moderation::bulk_reject(&app, &req.ids, auth.player, req.reason, Timestamp::now()).await;
	Ok((StatusCode::OK, Json(ApiResponse::new(into_manifest(results)))))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetEnabledRequest {
	pub enabled: bool,
}

/// PATCH /api/art/{art_id}/enabled - visibility toggle
pub async fn patch_enabled(
	State(app): State<App>,
	Auth(_auth): Auth,
	Path(art_id): Path<i64>,
	Json(req): Json<SetEnabledRequest>,
) -> AdResult<(StatusCode, Json<ApiResponse<ArtEntry>>)> {
	let entry = moderation::set_enabled(&app, EntryId(art_id), req.enabled).await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(entry))))
}

// vim: ts=4
