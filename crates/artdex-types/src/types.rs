//! Common types used throughout the Artdex service.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// EntryId //
//*********//
/// Identity of an art entry. Assigned monotonically by the store and never
/// reused. User-facing surfaces render it as `#`-prefixed uppercase hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub i64);

impl std::fmt::Display for EntryId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{:X}", self.0)
	}
}

impl std::str::FromStr for EntryId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let hex = s.trim().trim_start_matches('#');
		i64::from_str_radix(hex, 16).map(EntryId)
	}
}

impl Serialize for EntryId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for EntryId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(EntryId(i64::deserialize(deserializer)?))
	}
}

// BallId / PlayerId //
//*******************//
/// Opaque reference to a catalog item in the host application. Never
/// dereferenced here; resolution to display names is the host's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BallId(pub i64);

/// Opaque reference to a player (submitter or reviewer) in the host
/// application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayerId(pub i64);

macro_rules! impl_id_serde {
	($name:ident) => {
		impl std::fmt::Display for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				write!(f, "{}", self.0)
			}
		}

		impl Serialize for $name {
			fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
			where
				S: serde::Serializer,
			{
				serializer.serialize_i64(self.0)
			}
		}

		impl<'de> Deserialize<'de> for $name {
			fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
			where
				D: serde::Deserializer<'de>,
			{
				Ok($name(i64::deserialize(deserializer)?))
			}
		}
	};
}

impl_id_serde!(BallId);
impl_id_serde!(PlayerId);

// Timestamp //
//***********//
/// Unix timestamp in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub i64);

impl Timestamp {
	pub fn now() -> Self {
		let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
		Timestamp(res.as_secs() as i64)
	}

	pub fn add_seconds(self, seconds: i64) -> Self {
		Timestamp(self.0 + seconds)
	}

	pub fn sub_seconds(self, seconds: i64) -> Self {
		Timestamp(self.0 - seconds)
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

// ArtStatus //
//***********//
/// Review lifecycle state of an art entry.
///
/// Allowed transitions: Pending -> Approved, Pending -> Rejected, and
/// explicit re-review Approved <-> Rejected. A decided entry never returns
/// to Pending. Re-deciding to the current status is a no-op success.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtStatus {
	Pending,
	Approved,
	Rejected,
}

impl ArtStatus {
	/// Single-character code used by store adapters.
	pub fn as_code(self) -> &'static str {
		match self {
			ArtStatus::Pending => "P",
			ArtStatus::Approved => "A",
			ArtStatus::Rejected => "R",
		}
	}

	pub fn from_code(code: &str) -> Option<Self> {
		match code {
			"P" => Some(ArtStatus::Pending),
			"A" => Some(ArtStatus::Approved),
			"R" => Some(ArtStatus::Rejected),
			_ => None,
		}
	}
}

impl std::fmt::Display for ArtStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ArtStatus::Pending => write!(f, "pending"),
			ArtStatus::Approved => write!(f, "approved"),
			ArtStatus::Rejected => write!(f, "rejected"),
		}
	}
}

// Pagination //
//************//
pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Cursor pagination over entry ids. Ids are assigned monotonically, so id
/// order matches creation order and pages stay stable while new entries are
/// inserted concurrently.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct Pagination {
	/// Page size; clamped to [1, MAX_PAGE_LIMIT], defaults to
	/// DEFAULT_PAGE_LIMIT.
	pub limit: Option<u32>,
	/// Last entry id seen on the previous page.
	pub cursor: Option<EntryId>,
}

impl Pagination {
	pub fn limit(&self) -> u32 {
		self.limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT)
	}
}

// Patch //
//*******//
/// Three-state partial update field: leave unchanged, clear, or set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Patch<T> {
	#[default]
	Undefined,
	Null,
	Value(T),
}

impl<T> From<Option<T>> for Patch<T> {
	fn from(opt: Option<T>) -> Self {
		match opt {
			Some(v) => Patch::Value(v),
			None => Patch::Undefined,
		}
	}
}

// ApiResponse //
//*************//
/// Uniform success envelope for the HTTP surface.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
	pub data: T,
}

impl<T> ApiResponse<T> {
	pub fn new(data: T) -> Self {
		Self { data }
	}
}


// vim: ts=4
