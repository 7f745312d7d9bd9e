/// Failures while producing or verifying an access token.
#[derive(thiserror::Error, Debug)]
pub enum TokenError {
	/// The issuer key or secret is empty; a deployment problem, not caller input.
	#[error("issuer key or secret is empty")]
	EmptyKey,

	#[error("jwt error: {0}")]
	Jwt(#[from] jsonwebtoken::errors::Error),
}
