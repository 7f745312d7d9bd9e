use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{Claims, Key, TokenError, VideoGrant};

/// Default token lifetime, matching the vendor SDK's default.
pub const DEFAULT_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// Builder for a signed access token bound to a participant identity.
///
/// ```
/// use huddle_token::{AccessToken, Key, VideoGrant};
///
/// let key = Key::new("devkey", "secret");
/// let token = AccessToken::new(&key, "alice")
/// 	.with_grant(VideoGrant::room_join("lobby"))
/// 	.to_jwt()
/// 	.unwrap();
/// ```
pub struct AccessToken<'a> {
	key: &'a Key,
	identity: String,
	ttl: Duration,
	grant: VideoGrant,
}

impl<'a> AccessToken<'a> {
	pub fn new(key: &'a Key, identity: impl Into<String>) -> Self {
		Self {
			key,
			identity: identity.into(),
			ttl: DEFAULT_TTL,
			grant: VideoGrant::default(),
		}
	}

	pub fn with_ttl(mut self, ttl: Duration) -> Self {
		self.ttl = ttl;
		self
	}

	pub fn with_grant(mut self, grant: VideoGrant) -> Self {
		self.grant = grant;
		self
	}

	/// Sign the token, producing the opaque bearer string.
	pub fn to_jwt(&self) -> Result<String, TokenError> {
		let now = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.unwrap_or_default()
			.as_secs();

		let claims = Claims {
			iss: self.key.api_key().to_string(),
			sub: self.identity.clone(),
			nbf: now,
			exp: now + self.ttl.as_secs(),
			video: self.grant.clone(),
		};

		self.key.sign(&claims)
	}
}
