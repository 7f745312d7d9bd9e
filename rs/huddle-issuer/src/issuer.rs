use axum::http::StatusCode;
use huddle_token::{AccessToken, Key, TokenError, VideoGrant};
use serde::Deserialize;

/// Room used when the caller doesn't name one.
pub const DEFAULT_ROOM: &str = "default";

/// The JSON body accepted by the token endpoint.
///
/// `identity` is required but modeled as an option so a missing field is our
/// validation error, not a deserialization failure.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TokenRequest {
	pub identity: Option<String>,
	pub room: Option<String>,
}

/// Mints room-scoped access tokens for validated requests.
///
/// Stateless across requests; the only held state is the signing key, which is
/// immutable after startup.
#[derive(Clone)]
pub struct Issuer {
	key: Key,
}

impl Issuer {
	pub fn new(key: Key) -> Self {
		Self { key }
	}

	/// Validate the request and sign a token granting entry to its room.
	pub fn issue(&self, request: TokenRequest) -> Result<String, IssueError> {
		let identity = request
			.identity
			.filter(|identity| !identity.is_empty())
			.ok_or(IssueError::MissingIdentity)?;

		let room = request.room.unwrap_or_else(|| DEFAULT_ROOM.to_string());

		tracing::debug!(%identity, %room, "issuing token");

		let token = AccessToken::new(&self.key, identity)
			.with_grant(VideoGrant::room_join(room))
			.to_jwt()?;

		Ok(token)
	}
}

/// Why a token request was refused.
///
/// Caller-input problems map to 400; a signing failure means the key/secret
/// configuration is broken and maps to 500.
#[derive(thiserror::Error, Debug)]
pub enum IssueError {
	#[error("Identity is required")]
	MissingIdentity,

	#[error("failed to sign token: {0}")]
	Signing(#[from] TokenError),
}

impl IssueError {
	pub fn status(&self) -> StatusCode {
		match self {
			Self::MissingIdentity => StatusCode::BAD_REQUEST,
			Self::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}
