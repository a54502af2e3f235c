use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use josekit::JoseError;
use josekit::jwk::Jwk;
use josekit::jwk::alg::ed::EdCurve;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MakeJwtKeyError {
    #[error("failed generating jwt key")]
    Generation(#[from] JoseError),

    #[error("jwt key serialization failed")]
    Serialization(#[from] serde_json::Error),

    #[error("failed writing generated jwt key")]
    Io(#[from] io::Error),
}

/// Generates the Ed25519 pair the daemon verifies access tokens with.
/// The private key file is only readable by its owner.
pub fn make_jwt_key(
    jwt_private_key: &Path,
    jwt_public_key: &Path,
) -> Result<(), MakeJwtKeyError> {
    let private_key = Jwk::generate_ed_key(EdCurve::Ed25519)?;
    let public_key = private_key.to_public_key()?;
    write_key(jwt_private_key, &private_key, true)?;
    write_key(jwt_public_key, &public_key, false)?;
    Ok(())
}

fn write_key(
    path: &Path,
    key: &Jwk,
    restrict: bool,
) -> Result<(), MakeJwtKeyError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    if restrict {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    #[cfg(not(unix))]
    let _ = restrict;
    let mut file = options.open(path)?;
    file.write_all((serde_json::to_string_pretty(key)? + "\n").as_bytes())?;
    Ok(())
}
