use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use crate::bin_constants::{
    DEFAULT_JWT_PRIVATE_KEY,
    DEFAULT_JWT_PUBLIC_KEY,
    DEFAULT_NOTE_COLOR,
};
use crate::owner_id::OwnerId;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AppConfig {
    pub jwt_private_key: PathBuf,
    pub jwt_public_key: PathBuf,

    /// Swatch applied to notes created without a color.
    pub default_color: String,

    /// When set, the store is seeded with sample notes for this owner
    /// at startup.
    pub demo_owner: Option<OwnerId>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            jwt_private_key: DEFAULT_JWT_PRIVATE_KEY.into(),
            jwt_public_key: DEFAULT_JWT_PUBLIC_KEY.into(),
            default_color: DEFAULT_NOTE_COLOR.to_owned(),
            demo_owner: None,
        }
    }
}
