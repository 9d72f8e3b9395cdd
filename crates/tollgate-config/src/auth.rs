use secrecy::SecretString;
use serde::Deserialize;

/// Authentication and token configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// HMAC signing secret for issued tokens
    pub secret: SecretString,
    /// Access token lifetime in seconds
    #[serde(default = "default_access_ttl_secs")]
    pub access_ttl_secs: i64,
    /// Refresh token lifetime in seconds
    #[serde(default = "default_refresh_ttl_secs")]
    pub refresh_ttl_secs: i64,
    /// Accounts allowed to log in
    #[serde(default)]
    pub users: Vec<UserConfig>,
}

/// A single configured account
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    /// Login name, unique across the user list
    pub username: String,
    /// Plaintext password (demo service; no persistence layer)
    pub password: SecretString,
}

const fn default_access_ttl_secs() -> i64 {
    // 15 minutes
    900
}

const fn default_refresh_ttl_secs() -> i64 {
    // 7 days
    604_800
}
