//! Settings service with store persistence and a write-through cache

use parking_lot::RwLock;
use std::sync::Arc;

use artdex_types::art_store::ArtStore;
use artdex_types::error::AdResult;
use tracing::{info, warn};

use super::types::{
	ArtSettings, UpdateArtSettings, SETTING_MAX_SUBMISSIONS_PER_DAY, SETTING_REQUIRE_APPROVAL,
	SETTING_SUBMISSIONS_ENABLED, SETTING_VIEWING_ENABLED,
};

/// Main interface for reading and updating the singleton settings.
///
/// The cache is write-through under the lock, so a `get` after a committed
/// `update` always observes the new values.
#[derive(Debug)]
pub struct SettingsService {
	store: Arc<dyn ArtStore>,
	current: RwLock<ArtSettings>,
}

impl SettingsService {
	pub fn new(store: Arc<dyn ArtStore>) -> Self {
		Self { store, current: RwLock::new(ArtSettings::default()) }
	}

	/// Loads persisted values over the defaults. A stored value of the
	/// wrong JSON type is ignored with a warning rather than failing
	/// startup.
	pub async fn load(&self) -> AdResult<()> {
		let mut settings = ArtSettings::default();

		if let Some(v) = self.read_bool(SETTING_SUBMISSIONS_ENABLED).await? {
			settings.submissions_enabled = v;
		}
		if let Some(v) = self.read_bool(SETTING_VIEWING_ENABLED).await? {
			settings.viewing_enabled = v;
		}
		if let Some(v) = self.read_bool(SETTING_REQUIRE_APPROVAL).await? {
			settings.require_approval = v;
		}
		if let Some(value) = self.store.read_setting(SETTING_MAX_SUBMISSIONS_PER_DAY).await? {
			match value.as_u64() {
				Some(v) if v <= u64::from(u32::MAX) => {
					settings.max_submissions_per_day = v as u32;
				}
				_ => warn!(
					setting = SETTING_MAX_SUBMISSIONS_PER_DAY,
					"ignoring stored setting with invalid value"
				),
			}
		}

		*self.current.write() = settings;
		Ok(())
	}

	/// Current settings snapshot.
	pub fn get(&self) -> ArtSettings {
		*self.current.read()
	}

	/// Administrative update: persists each changed field, then swaps the
	/// cache so subsequent reads observe the committed values.
	pub async fn update(&self, patch: UpdateArtSettings) -> AdResult<ArtSettings> {
		if let Some(v) = patch.submissions_enabled {
			self.store.update_setting(SETTING_SUBMISSIONS_ENABLED, Some(v.into())).await?;
		}
		if let Some(v) = patch.viewing_enabled {
			self.store.update_setting(SETTING_VIEWING_ENABLED, Some(v.into())).await?;
		}
		if let Some(v) = patch.require_approval {
			self.store.update_setting(SETTING_REQUIRE_APPROVAL, Some(v.into())).await?;
		}
		if let Some(v) = patch.max_submissions_per_day {
			self.store.update_setting(SETTING_MAX_SUBMISSIONS_PER_DAY, Some(v.into())).await?;
		}

		let mut current = self.current.write();
		if let Some(v) = patch.submissions_enabled {
			current.submissions_enabled = v;
		}
		if let Some(v) = patch.viewing_enabled {
			current.viewing_enabled = v;
		}
		if let Some(v) = patch.require_approval {
			current.require_approval = v;
		}
		if let Some(v) = patch.max_submissions_per_day {
			current.max_submissions_per_day = v;
		}

		info!(settings = ?*current, "art settings updated");
		Ok(*current)
	}

	async fn read_bool(&self, name: &str) -> AdResult<Option<bool>> {
		match self.store.read_setting(name).await? {
			None => Ok(None),
			Some(value) => match value.as_bool() {
				Some(v) => Ok(Some(v)),
				None => {
					warn!(setting = name, "ignoring stored setting with invalid value");
					Ok(None)
				}
			},
		}
	}
}

// vim: ts=4
