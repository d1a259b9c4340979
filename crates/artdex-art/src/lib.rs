//! Art submission and moderation module
//!
//! Lets players attach custom artwork to catalog items ("balls"), subject
//! to moderation.
//!
//! # Features
//!
//! - Submission with per-submitter daily quota and URL validation
//! - Review state machine (pending / approved / rejected) with re-review
//! - Bulk approve/reject with per-id result manifests
//! - Visibility rules for public listings and per-entry info
//! - Notification requests emitted after committed review transitions
//!
//! # Settings
//!
//! Behaviour is driven by the settings subsystem in `artdex-core`:
//! - `art.submissions_enabled` - accept new submissions
//! - `art.viewing_enabled` - serve approved art to viewers
//! - `art.require_approval` - new entries start as pending
//! - `art.max_submissions_per_day` - rolling 24h quota per submitter

pub mod handler;
pub mod moderation;
pub mod rate_limit;
pub mod submission;
pub mod view;

mod prelude;

// vim: ts=4
