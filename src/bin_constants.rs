pub const DEFAULT_CONFIG_FILE: &str = "/etc/quicknotes/quicknotes.toml";
pub const DEFAULT_JWT_PRIVATE_KEY: &str = "/etc/quicknotes/jwt_private_key.json";
pub const DEFAULT_JWT_PUBLIC_KEY: &str = "/etc/quicknotes/jwt_public_key.json";
pub const APP_CONFIG_ENV_PREFIX: &str = "QUICKNOTES_";

pub const DEFAULT_NOTE_COLOR: &str = "#ffffff";
