//! Settings types

use serde::{Deserialize, Serialize};

/// Storage keys in the store's settings table, one per field.
pub const SETTING_SUBMISSIONS_ENABLED: &str = "art.submissions_enabled";
pub const SETTING_VIEWING_ENABLED: &str = "art.viewing_enabled";
pub const SETTING_REQUIRE_APPROVAL: &str = "art.require_approval";
pub const SETTING_MAX_SUBMISSIONS_PER_DAY: &str = "art.max_submissions_per_day";

/// Process-wide art submission configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtSettings {
	/// Accept new submissions
	pub submissions_enabled: bool,
	/// Serve approved art to viewers
	pub viewing_enabled: bool,
	/// If false, new entries are created directly as Approved
	pub require_approval: bool,
	/// Per-submitter quota in a rolling 24h window. Zero means no
	/// submissions are allowed; there is no "unlimited" sentinel.
	pub max_submissions_per_day: u32,
}

impl Default for ArtSettings {
	fn default() -> Self {
		ArtSettings {
			submissions_enabled: true,
			viewing_enabled: true,
			require_approval: true,
			max_submissions_per_day: 5,
		}
	}
}

/// Partial administrative update; absent fields stay unchanged.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateArtSettings {
	pub submissions_enabled: Option<bool>,
	pub viewing_enabled: Option<bool>,
	pub require_approval: Option<bool>,
	pub max_submissions_per_day: Option<u32>,
}

// vim: ts=4
