//! Builder for test configurations

use secrecy::SecretString;
use tollgate_config::{AuthConfig, Config, ServerConfig, UserConfig};

/// Builds a [`Config`] with sensible test defaults
///
/// Defaults to one user (`alice`/`s3cret`) and production-length token
/// lifetimes.
pub struct ConfigBuilder {
    secret: String,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
    users: Vec<(String, String)>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            secret: "integration-test-secret".to_owned(),
            access_ttl_secs: 900,
            refresh_ttl_secs: 604_800,
            users: vec![("alice".to_owned(), "s3cret".to_owned())],
        }
    }

    pub fn with_user(mut self, username: &str, password: &str) -> Self {
        self.users.push((username.to_owned(), password.to_owned()));
        self
    }

    pub fn with_access_ttl_secs(mut self, secs: i64) -> Self {
        self.access_ttl_secs = secs;
        self
    }

    pub fn with_refresh_ttl_secs(mut self, secs: i64) -> Self {
        self.refresh_ttl_secs = secs;
        self
    }

    pub fn build(self) -> Config {
        Config {
            server: ServerConfig { listen_address: None },
            auth: AuthConfig {
                secret: SecretString::from(self.secret),
                access_ttl_secs: self.access_ttl_secs,
                refresh_ttl_secs: self.refresh_ttl_secs,
                users: self
                    .users
                    .into_iter()
                    .map(|(username, password)| UserConfig {
                        username,
                        password: SecretString::from(password),
                    })
                    .collect(),
            },
        }
    }
}
