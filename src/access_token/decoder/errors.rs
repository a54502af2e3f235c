use josekit::JoseError;
use thiserror::Error;

use crate::owner_id::OwnerIdParseError;

#[derive(Debug, Error)]
pub enum AccessTokenDecoderError {
    #[error(transparent)]
    Verification(#[from] JoseError),

    #[error("missing claim {claim} in access token")]
    ClaimMissing { claim: &'static str },

    #[error("invalid subject claim in access token: {0}")]
    InvalidSubject(#[from] OwnerIdParseError),
}
