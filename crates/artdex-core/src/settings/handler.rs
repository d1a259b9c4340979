//! Administrative settings endpoints (moderator-gated in the router)

use axum::{extract::State, http::StatusCode, Json};

use crate::extract::Auth;
use crate::prelude::*;
use artdex_types::types::ApiResponse;

use super::types::{ArtSettings, UpdateArtSettings};

/// GET /api/art/settings
pub async fn get_settings(
	State(app): State<App>,
	Auth(_auth): Auth,
) -> AdResult<(StatusCode, Json<ApiResponse<ArtSettings>>)> {
	Ok((StatusCode::OK, Json(ApiResponse::new(app.settings.get()))))
}

/// PATCH /api/art/settings
pub async fn patch_settings(
	State(app): State<App>,
	Auth(auth): Auth,
	Json(patch): Json<UpdateArtSettings>,
) -> AdResult<(StatusCode, Json<ApiResponse<ArtSettings>>)> {
	info!(admin = %auth.player, "updating art settings");
	let settings = app.settings.update(patch).await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(settings))))
}

// vim: ts=4
