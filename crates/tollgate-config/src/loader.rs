use std::collections::HashSet;
use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails,
    /// or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config: Self = toml::from_str(&raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the signing secret is empty, a token lifetime
    /// is not positive, no users are configured, or usernames collide
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.auth.secret.expose_secret().is_empty() {
            anyhow::bail!("auth.secret must not be empty");
        }

        if self.auth.access_ttl_secs <= 0 {
            anyhow::bail!("auth.access_ttl_secs must be positive");
        }
        if self.auth.refresh_ttl_secs <= 0 {
            anyhow::bail!("auth.refresh_ttl_secs must be positive");
        }

        if self.auth.users.is_empty() {
            anyhow::bail!("at least one user must be configured");
        }

        let mut seen = HashSet::new();
        for user in &self.auth.users {
            if user.username.is_empty() {
                anyhow::bail!("usernames must not be empty");
            }
            if !seen.insert(user.username.as_str()) {
                anyhow::bail!("duplicate username '{}'", user.username);
            }
        }

        Ok(())
    }
}
