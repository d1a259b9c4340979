//! Submission service
//!
//! Validates and creates art entries. Checks run in a fixed order and the
//! first failure wins; nothing is written on failure.

use url::Url;

use artdex_types::art_store::{ArtEntry, CreateArtEntry};

use crate::prelude::*;
use crate::rate_limit;

/// Player-provided submission fields.
#[derive(Clone, Debug)]
pub struct SubmitParams {
	pub ball: BallId,
	pub media_url: Box<str>,
	pub title: Option<Box<str>>,
	pub description: Option<Box<str>>,
}

/// Creates an art entry for `submitter`.
///
/// Check order: feature toggle, URL shape, daily quota. The initial status
/// is Approved when approval is not required, Pending otherwise.
pub async fn submit(
	app: &App,
	submitter: PlayerId,
	params: SubmitParams,
	now: Timestamp,
) -> AdResult<ArtEntry> {
	let settings = app.settings.get();

	if !settings.submissions_enabled {
		return Err(Error::FeatureDisabled("art submissions"));
	}

	validate_media_url(&params.media_url)?;

	rate_limit::check_daily_quota(
		&app.art_store,
		submitter,
		settings.max_submissions_per_day,
		now,
	)
	.await?;

	let status =
		if settings.require_approval { ArtStatus::Pending } else { ArtStatus::Approved };

	let entry = app
		.art_store
		.create_entry(CreateArtEntry {
			ball: params.ball,
			submitter,
			title: params.title,
			description: params.description,
			media_url: params.media_url,
			status,
		})
		.await?;

	info!(
		art_id = %entry.art_id,
		submitter = %submitter,
		ball = %entry.ball,
		status = %entry.status,
		"art entry submitted"
	);
	Ok(entry)
}

/// Syntactic media URL check: must parse as an absolute http(s) URL with a
/// host. Content validation is out of scope.
fn validate_media_url(raw: &str) -> AdResult<()> {
	let url = Url::parse(raw).map_err(|err| Error::InvalidMedia(err.to_string()))?;

	if url.scheme() != "http" && url.scheme() != "https" {
		return Err(Error::InvalidMedia(format!("unsupported scheme '{}'", url.scheme())));
	}
	if url.host_str().is_none() {
		return Err(Error::InvalidMedia("missing host".into()));
	}

	Ok(())
}


// vim: ts=4
