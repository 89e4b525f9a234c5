//! # Server Configuration
//!
//! Optional TOML configuration for the HTTP server. Command-line flags
//! override file values, which override the built-in defaults.
//!
//! ```toml
//! # pitwall.toml
//! host = "0.0.0.0"
//! port = 8080
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::api::ApiError;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Host the server binds to when neither flag nor config file sets one.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port the server binds to when neither flag nor config file sets one.
pub const DEFAULT_PORT: u16 = 3000;

// =============================================================================
// CONFIG FILE
// =============================================================================

/// Server settings parsed from a TOML file. Every field is optional so a
/// partial file only overrides what it names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
}

impl ServerConfig {
    /// Load settings from a TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ApiError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApiError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        toml::from_str(&content).map_err(|e| {
            ApiError::Config(format!("Failed to parse config file {}: {e}", path.display()))
        })
    }

    /// Resolve the bind address, applying flag overrides and defaults.
    #[must_use]
    pub fn resolve(&self, host_flag: Option<String>, port_flag: Option<u16>) -> (String, u16) {
        let host = host_flag
            .or_else(|| self.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = port_flag.or(self.port).unwrap_or(DEFAULT_PORT);
        (host, port)
    }
}

// =============================================================================
// TESTS
// =============================================================================
