use crate::domain::{ContactConfig, ContactParams};
use crate::ports::ConfigProvider;

/// Static configuration provider with hardcoded values.
///
/// Useful for testing and development. For production, use `TomlConfigProvider`.
#[derive(Debug, Clone)]
pub struct StaticConfigProvider {
    bootstrap_contacts: Vec<ContactParams>,
    config: ContactConfig,
}

impl StaticConfigProvider {
    /// Create with default config and no bootstrap contacts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bootstrap_contacts: Vec::new(),
            config: ContactConfig::default(),
        }
    }

    /// Create with specified bootstrap contacts.
    #[must_use]
    pub fn with_bootstrap_contacts(mut self, contacts: Vec<ContactParams>) -> Self {
        self.bootstrap_contacts = contacts;
        self
    }

    /// Create with specified liveness config.
    #[must_use]
    pub fn with_config(mut self, config: ContactConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for StaticConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get_bootstrap_contacts(&self) -> Vec<ContactParams> {
        self.bootstrap_contacts.clone()
    }

    fn get_contact_config(&self) -> ContactConfig {
        self.config.clone()
    }
}

// ============================================================================
// TomlConfigProvider - Config File Loading (requires "config" feature)
// ============================================================================

#[cfg(feature = "config")]
mod toml_config {
    use super::*;
    use crate::domain::{ConfigError, Timestamp, DEFAULT_STALE_AFTER_MS};
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;
    use tracing::{debug, info};

    /// Configuration file structure.
    #[derive(Debug, Deserialize)]
    struct ConfigFile {
        #[serde(default)]
        bootstrap: Vec<BootstrapEntry>,
        #[serde(default)]
        liveness: LivenessFile,
    }

    #[derive(Debug, Deserialize)]
    struct BootstrapEntry {
        address: Option<String>,
        port: Option<i64>,
        node_id: Option<String>,
        last_seen: Option<u64>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct LivenessFile {
        stale_after_ms: Option<u64>,
    }

    /// TOML-based configuration provider.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [liveness]
    /// stale_after_ms = 3600000
    ///
    /// [[bootstrap]]
    /// address = "192.168.1.100"
    /// port = 1337
    ///
    /// [[bootstrap]]
    /// address = "10.0.0.1"
    /// port = 1337
    /// node_id = "cbffb2e4ac71a5511dd7185c34552973098ed6af"
    /// ```
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        bootstrap_contacts: Vec<ContactParams>,
        config: ContactConfig,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if the file cannot be read, parsed, or validated.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            })?;

            let provider = Self::parse(&content)?;
            info!(
                path = %path.as_ref().display(),
                bootstrap = provider.bootstrap_contacts.len(),
                "Loaded contact configuration"
            );
            Ok(provider)
        }

        /// Parse configuration from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            let config = ContactConfig::new(
                file.liveness
                    .stale_after_ms
                    .unwrap_or(DEFAULT_STALE_AFTER_MS),
            )?;

            let bootstrap_contacts: Vec<_> = file
                .bootstrap
                .into_iter()
                .map(|entry| ContactParams {
                    address: entry.address,
                    port: entry.port,
                    node_id: entry.node_id,
                    last_seen: entry.last_seen.map(Timestamp::from_millis),
                })
                .collect();

            debug!(
                stale_after_ms = config.stale_after_ms,
                bootstrap = bootstrap_contacts.len(),
                "Parsed contact configuration"
            );

            Ok(Self {
                bootstrap_contacts,
                config,
            })
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn get_bootstrap_contacts(&self) -> Vec<ContactParams> {
            self.bootstrap_contacts.clone()
        }

        fn get_contact_config(&self) -> ContactConfig {
            self.config.clone()
        }
    }
}

#[cfg(feature = "config")]
pub use toml_config::TomlConfigProvider;
