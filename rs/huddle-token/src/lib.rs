//! Access token generation and validation for the Huddle media service.
//!
//! Mints the short-lived bearer tokens the media server expects: an HS256
//! signature over a claim set binding a participant identity to a room grant.
//!
//! See [`AccessToken`] for minting tokens and [`Key`] for key management.

mod claims;
mod error;
mod key;
mod token;

pub use claims::*;
pub use error::*;
pub use key::*;
pub use token::*;
