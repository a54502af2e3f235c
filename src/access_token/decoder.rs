use std::str::FromStr;

use josekit::jwk::Jwk;
use josekit::jws::EdDSA;
use josekit::jws::alg::eddsa::EddsaJwsVerifier;
use josekit::jwt;
use log::info;
use time::OffsetDateTime;

use crate::access_token::data::AccessTokenData;
use crate::owner_id::OwnerId;
use errors::AccessTokenDecoderError;

pub mod errors;

/// Verifies bearer tokens minted by the authentication collaborator.
/// The subject claim carries the owner identifier.
pub struct AccessTokenDecoder {
    verifier: EddsaJwsVerifier,
}

impl AccessTokenDecoder {
    pub fn from_jwk(jwk: &Jwk) -> Result<Self, AccessTokenDecoderError> {
        Ok(
            AccessTokenDecoder {
                verifier: EdDSA.verifier_from_jwk(jwk)?,
            }
        )
    }

    /// Decode the access token.
    ///
    /// # Errors
    /// All possible error values signify incorrect token data. Validity
    /// window checks are the caller's job; the decoded `not_before` and
    /// `expires_at` are returned for it.
    pub fn decode_token(
        &self,
        token: impl AsRef<[u8]>,
    ) -> Result<AccessTokenData, AccessTokenDecoderError> {
        let token = token.as_ref();
        let (payload, _) = jwt::decode_with_verifier(
            token,
            &self.verifier,
        )?;
        let owner = payload.subject()
            .map(OwnerId::from_str)
            .transpose()
            .map_err(|e| {
                info!(
                    "invalid subject in access token {}: {e}",
                    String::from_utf8_lossy(token),
                );
                AccessTokenDecoderError::InvalidSubject(e)
            })?
            .ok_or_else(|| missing_claim(token, "subject"))?;
        let not_before = payload.not_before()
            .map(OffsetDateTime::from)
            .ok_or_else(|| missing_claim(token, "not_before"))?;
        let expires_at = payload.expires_at()
            .map(OffsetDateTime::from)
            .ok_or_else(|| missing_claim(token, "expires_at"))?;
        Ok(
            AccessTokenData {
                owner,
                not_before,
                expires_at,
            }
        )
    }
}

fn missing_claim(token: &[u8], claim: &'static str) -> AccessTokenDecoderError {
    info!(
        "missing claim {claim} in access token {}",
        String::from_utf8_lossy(token),
    );
    AccessTokenDecoderError::ClaimMissing { claim }
}
