pub use crate::app::App;
pub use artdex_types::error::{AdResult, Error};
pub use artdex_types::types::{ArtStatus, BallId, EntryId, Pagination, Patch, PlayerId, Timestamp};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
