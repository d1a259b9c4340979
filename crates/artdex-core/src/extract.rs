//! Host-asserted identity extractors and route guards.
//!
//! The host dispatcher authenticates its users itself and fronts this
//! service; it asserts the acting player through the `X-Player-Id` and
//! `X-Player-Roles` headers. Authorization policy stays with the host —
//! this layer only turns the assertion into an `Auth` extension and gates
//! moderator routes on the asserted role.

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::prelude::*;

/// Role the host asserts for moderators.
pub const ROLE_MODERATOR: &str = "MOD";
/// Role the host asserts for administrators; implies moderator.
pub const ROLE_ADMIN: &str = "ADM";

// AuthCtx //
//*********//
#[derive(Clone, Debug)]
pub struct AuthCtx {
	pub player: PlayerId,
	pub roles: Box<[Box<str>]>,
}

impl AuthCtx {
	pub fn is_moderator(&self) -> bool {
		self.roles.iter().any(|r| r.as_ref() == ROLE_MODERATOR || r.as_ref() == ROLE_ADMIN)
	}
}

// Auth //
//******//
#[derive(Clone, Debug)]
pub struct Auth(pub AuthCtx);

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(auth) = parts.extensions.get::<Auth>().cloned() {
			Ok(auth)
		} else {
			Err(Error::PermissionDenied)
		}
	}
}

// OptionalAuth //
//**************//
/// Auth extractor that doesn't fail when the host asserted no identity
#[derive(Clone, Debug)]
pub struct OptionalAuth(pub Option<AuthCtx>);

impl<S> FromRequestParts<S> for OptionalAuth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let auth = parts.extensions.get::<Auth>().cloned().map(|a| a.0);
		Ok(OptionalAuth(auth))
	}
}

/// Parses the identity headers into an `Auth` extension when present.
pub async fn host_auth(mut req: Request, next: Next) -> Result<Response, Error> {
	let player = req
		.headers()
		.get("x-player-id")
		.and_then(|v| v.to_str().ok())
		.and_then(|v| v.parse::<i64>().ok());

	if let Some(player) = player {
		let roles: Box<[Box<str>]> = req
			.headers()
			.get("x-player-roles")
			.and_then(|v| v.to_str().ok())
			.map(|v| {
				v.split(',')
					.map(str::trim)
					.filter(|r| !r.is_empty())
					.map(|r| r.to_owned().into_boxed_str())
					.collect()
			})
			.unwrap_or_default();

		req.extensions_mut().insert(Auth(AuthCtx { player: PlayerId(player), roles }));
	}

	Ok(next.run(req).await)
}

/// Rejects requests without an asserted identity.
pub async fn require_auth(req: Request, next: Next) -> Result<Response, Error> {
	if req.extensions().get::<Auth>().is_none() {
		return Err(Error::PermissionDenied);
	}
	Ok(next.run(req).await)
}

/// Rejects requests whose asserted identity lacks a moderator role.
pub async fn require_moderator(req: Request, next: Next) -> Result<Response, Error> {
	match req.extensions().get::<Auth>() {
		Some(auth) if auth.0.is_moderator() => Ok(next.run(req).await),
		_ => Err(Error::PermissionDenied),
	}
}


// vim: ts=4
