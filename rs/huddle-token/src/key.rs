use std::fmt;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::{Claims, TokenError};

/// An issuer key/secret pair used to sign and verify access tokens.
///
/// Tokens are signed with HMAC-SHA256; the media server shares the same secret
/// and accepts any token that verifies against it.
#[derive(Clone)]
pub struct Key {
	api_key: String,
	secret: String,
}

impl Key {
	pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
		Self {
			api_key: api_key.into(),
			secret: secret.into(),
		}
	}

	/// The public identifier of this key, embedded as the token issuer.
	pub fn api_key(&self) -> &str {
		&self.api_key
	}

	/// Sign the claims, producing the opaque bearer string.
	pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
		if self.api_key.is_empty() || self.secret.is_empty() {
			return Err(TokenError::EmptyKey);
		}

		let key = EncodingKey::from_secret(self.secret.as_bytes());
		Ok(jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &key)?)
	}

	/// Decode a bearer string, checking the signature and expiration.
	pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
		let key = DecodingKey::from_secret(self.secret.as_bytes());
		let validation = Validation::new(Algorithm::HS256);
		let data = jsonwebtoken::decode::<Claims>(token, &key, &validation)?;
		Ok(data.claims)
	}
}

// The secret must never end up in logs.
impl fmt::Debug for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Key").field("api_key", &self.api_key).finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::VideoGrant;

	fn claims(exp: u64) -> Claims {
		Claims {
			iss: "devkey".into(),
			sub: "alice".into(),
			nbf: 0,
			exp,
			video: VideoGrant::room_join("lobby"),
		}
	}

	fn far_future() -> u64 {
		use std::time::{SystemTime, UNIX_EPOCH};
		SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs() + 3600
	}

	#[test]
	fn test_sign_verify() {
		let key = Key::new("devkey", "secret");
		let claims = claims(far_future());

		let token = key.sign(&claims).unwrap();
		assert!(!token.is_empty());

		let decoded = key.verify(&token).unwrap();
		assert_eq!(decoded, claims);
	}

	#[test]
	fn test_wrong_secret_rejected() {
		let key = Key::new("devkey", "secret");
		let token = key.sign(&claims(far_future())).unwrap();

		let other = Key::new("devkey", "other");
		assert!(other.verify(&token).is_err());
	}

	#[test]
	fn test_expired_rejected() {
		let key = Key::new("devkey", "secret");
		// Well past the default validation leeway.
		let token = key.sign(&claims(1)).unwrap();

		assert!(key.verify(&token).is_err());
	}

	#[test]
	fn test_empty_secret_rejected() {
		let key = Key::new("devkey", "");
		assert!(matches!(key.sign(&claims(far_future())), Err(TokenError::EmptyKey)));
	}

	#[test]
	fn test_garbage_rejected() {
		let key = Key::new("devkey", "secret");
		assert!(key.verify("not-a-token").is_err());
	}

	#[test]
	fn test_debug_redacts_secret() {
		let key = Key::new("devkey", "hunter2");
		let debug = format!("{:?}", key);
		assert!(debug.contains("devkey"));
		assert!(!debug.contains("hunter2"));
	}
}
