use axum::{middleware, routing::{get, patch, post}, Router};

use artdex_art::handler as art;
use artdex_core::extract::{host_auth, require_auth, require_moderator};
use artdex_core::settings::handler as settings;
use artdex_core::App;

pub fn init(app: App) -> Router {
	let public_router = Router::new()
		.route("/api/ball/{ball_id}/art", get(art::get_ball_art))
		.route("/api/art/{art_id}", get(art::get_art_info));

	let submit_router = Router::new()
		.route("/api/art", post(art::post_submit))
		.layer(middleware::from_fn(require_auth));

	let review_router = Router::new()
		.route("/api/art/review/pending", get(art::get_review_pending))
		.route("/api/art/review/approve", post(art::post_bulk_approve))
		.route("/api/art/review/reject", post(art::post_bulk_reject))
		.route("/api/art/{art_id}/approve", post(art::post_approve))
		.route("/api/art/{art_id}/reject", post(art::post_reject))
		.route("/api/art/{art_id}/enabled", patch(art::patch_enabled))
		.route(
			"/api/art/settings",
			get(settings::get_settings).patch(settings::patch_settings),
		)
		.layer(middleware::from_fn(require_moderator));

	Router::new()
		.merge(public_router)
		.merge(submit_router)
		.merge(review_router)
		.layer(middleware::from_fn(host_auth))
		.with_state(app)
}

// vim: ts=4
