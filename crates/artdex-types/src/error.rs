//! Error surface shared by every Artdex crate.
//!
//! Each variant maps to a stable error code so the host dispatcher can pick
//! its own wording; the service never dictates user-facing copy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub type AdResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Unknown entry id
	NotFound,
	/// Entry exists but the requester may not see it
	NotVisible,
	/// Status change violates the review state machine
	InvalidTransition(&'static str),
	/// Media URL failed the well-formedness check
	InvalidMedia(String),
	/// Submissions or viewing switched off in settings
	FeatureDisabled(&'static str),
	/// Daily submission quota exhausted
	RateLimitExceeded { limit: u32 },
	/// Malformed request data
	ValidationError(String),
	/// Caller lacks the required role
	PermissionDenied,
	/// Bad server configuration
	ConfigError(String),
	/// Store failure (details already logged at the adapter)
	DbError,

	// externals
	Io(std::io::Error),
}

impl Error {
	/// Stable machine-readable code, part of the API contract.
	pub fn code(&self) -> &'static str {
		match self {
			Error::NotFound => "E-NOT-FOUND",
			Error::NotVisible => "E-NOT-VISIBLE",
			Error::InvalidTransition(_) => "E-INVALID-TRANSITION",
			Error::InvalidMedia(_) => "E-INVALID-MEDIA",
			Error::FeatureDisabled(_) => "E-FEATURE-DISABLED",
			Error::RateLimitExceeded { .. } => "E-RATE-LIMITED",
			Error::ValidationError(_) => "E-VALIDATION",
			Error::PermissionDenied => "E-PERMISSION-DENIED",
			Error::ConfigError(_) | Error::DbError | Error::Io(_) => "E-INTERNAL",
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::NotVisible => write!(f, "not visible to requester"),
			Error::InvalidTransition(msg) => write!(f, "invalid status transition: {}", msg),
			Error::InvalidMedia(msg) => write!(f, "invalid media url: {}", msg),
			Error::FeatureDisabled(what) => write!(f, "{} disabled", what),
			Error::RateLimitExceeded { limit } => {
				write!(f, "daily submission limit of {} reached", limit)
			}
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::ConfigError(msg) => write!(f, "config error: {}", msg),
			Error::DbError => write!(f, "database error"),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let status = match &self {
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::NotVisible | Error::PermissionDenied => StatusCode::FORBIDDEN,
			Error::InvalidTransition(_) => StatusCode::CONFLICT,
			Error::InvalidMedia(_) | Error::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
			Error::FeatureDisabled(_) => StatusCode::SERVICE_UNAVAILABLE,
			Error::RateLimitExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
			Error::ConfigError(_) | Error::DbError | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		};

		let details = match &self {
			Error::RateLimitExceeded { limit } => Some(serde_json::json!({ "limit": limit })),
			_ => None,
		};

		let body = serde_json::json!({
			"error": {
				"code": self.code(),
				"message": self.to_string(),
				"details": details,
			}
		});

		(status, Json(body)).into_response()
	}
}


// vim: ts=4
