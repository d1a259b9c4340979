pub use crate::error::{AdResult, Error};
pub use crate::types::{ArtStatus, BallId, EntryId, Pagination, Patch, PlayerId, Timestamp};

// vim: ts=4
