use serde::{Deserialize, Serialize};

/// The claim set embedded in a signed access token.
///
/// `iss` identifies the signing key, `sub` is the participant identity, and
/// `video` carries the media permissions. All timestamps are seconds since the
/// UNIX epoch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
	/// The issuer key that signed this token.
	pub iss: String,

	/// The participant identity the token is bound to.
	pub sub: String,

	/// Not valid before.
	pub nbf: u64,

	/// Expiration.
	pub exp: u64,

	/// The media grant attached to this token.
	#[serde(default, skip_serializing_if = "VideoGrant::is_none")]
	pub video: VideoGrant,
}

/// Permissions for the media server, serialized in the camelCase form it expects.
///
/// Unset fields are omitted from the wire so the server applies its defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoGrant {
	/// The room this grant is scoped to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub room: Option<String>,

	/// Allowed to join the room.
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	pub room_join: bool,

	/// Allowed to publish local tracks.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub can_publish: Option<bool>,

	/// Allowed to subscribe to remote tracks.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub can_subscribe: Option<bool>,
}

impl VideoGrant {
	/// A grant allowing the holder to join the given room.
	pub fn room_join(room: impl Into<String>) -> Self {
		Self {
			room: Some(room.into()),
			room_join: true,
			..Default::default()
		}
	}

	/// True when no permission has been granted.
	pub fn is_none(&self) -> bool {
		*self == Self::default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_grant_camel_case() {
		let grant = VideoGrant::room_join("lobby");
		let json = serde_json::to_value(&grant).unwrap();

		assert_eq!(json["room"], "lobby");
		assert_eq!(json["roomJoin"], true);
		// Unset permissions must not appear on the wire.
		assert!(json.get("canPublish").is_none());
		assert!(json.get("canSubscribe").is_none());
	}

	#[test]
	fn test_empty_grant_omitted() {
		let claims = Claims {
			iss: "key".into(),
			sub: "alice".into(),
			nbf: 0,
			exp: 60,
			video: VideoGrant::default(),
		};

		let json = serde_json::to_value(&claims).unwrap();
		assert!(json.get("video").is_none());
	}

	#[test]
	fn test_claims_round_trip() {
		let claims = Claims {
			iss: "key".into(),
			sub: "alice".into(),
			nbf: 100,
			exp: 200,
			video: VideoGrant::room_join("lobby"),
		};

		let json = serde_json::to_string(&claims).unwrap();
		let decoded: Claims = serde_json::from_str(&json).unwrap();
		assert_eq!(decoded, claims);
	}
}
