//! Remote-execution configuration
//!
//! Resolves the `SSH_WRAP_*` settings into an immutable snapshot that drives
//! command wrapping. The loader is the only code in the crate that touches
//! the process environment; everything downstream works from the resolved
//! [`RemoteExecConfig`] value.

use std::env;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

/// Environment key enabling remote mode (`true`/`1`/`yes`, default off)
pub const ENV_ENABLED: &str = "SSH_WRAP_ENABLED";

/// Environment key for the remote login user (required when enabled)
pub const ENV_USER: &str = "SSH_WRAP_USER";

/// Environment key for the remote host (required when enabled)
pub const ENV_HOST: &str = "SSH_WRAP_HOST";

/// Environment key for the SSH port (default `22`)
pub const ENV_PORT: &str = "SSH_WRAP_PORT";

/// Environment key for the private key path (optional)
pub const ENV_KEY: &str = "SSH_WRAP_KEY";

/// Default SSH port
///
/// Flag emission compares spellings, not numeric values: a configured port
/// of `"022"` still gets an explicit `-p` flag.
pub const DEFAULT_PORT: &str = "22";

/// Parse the remote-mode enable flag.
///
/// Truthy values are `true`, `1`, and `yes`, case-insensitively. Anything
/// else, including an unset variable, is falsy.
pub fn parse_enabled_flag(value: Option<&str>) -> bool {
    match value {
        Some(v) => matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"),
        None => false,
    }
}

/// Resolved remote-execution configuration
///
/// Immutable after construction. When `enabled` is true, `user` and `host`
/// are guaranteed non-empty; construction fails otherwise. When disabled the
/// remaining fields are recorded but inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteExecConfig {
    enabled: bool,
    user: String,
    host: String,
    port: String,
    key_path: Option<String>,
}

impl RemoteExecConfig {
    /// Resolve configuration from the process environment.
    ///
    /// Call again to pick up a changed environment; there is no cached
    /// process-wide instance.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if remote mode is enabled with a missing
    /// user or host.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key-value source.
    ///
    /// [`RemoteExecConfig::from_env`] delegates here. Tests resolve from
    /// literal values without touching the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if remote mode is enabled with a missing
    /// user or host. The user is validated before the host.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let enabled = parse_enabled_flag(lookup(ENV_ENABLED).as_deref());
        let user = lookup(ENV_USER).unwrap_or_default();
        let host = lookup(ENV_HOST).unwrap_or_default();
        let port = lookup(ENV_PORT)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PORT.to_string());
        let key_path = lookup(ENV_KEY).filter(|k| !k.is_empty());

        let config = Self {
            enabled,
            user,
            host,
            port,
            key_path,
        };
        config.validate()?;

        if config.enabled {
            config.check_key_path();
            info!(
                "remote mode enabled: {}@{}:{}",
                config.user, config.host, config.port
            );
        } else {
            debug!("remote mode disabled - commands run locally");
        }

        Ok(config)
    }

    /// Create a disabled configuration; wrapping becomes the identity.
    pub fn local() -> Self {
        Self {
            enabled: false,
            user: String::new(),
            host: String::new(),
            port: DEFAULT_PORT.to_string(),
            key_path: None,
        }
    }

    /// Create an enabled configuration from literal values.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingUser`] or [`ConfigError::MissingHost`]
    /// when the respective value is empty.
    pub fn remote(user: impl Into<String>, host: impl Into<String>) -> Result<Self> {
        let config = Self {
            enabled: true,
            user: user.into(),
            host: host.into(),
            port: DEFAULT_PORT.to_string(),
            key_path: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the SSH port
    #[must_use]
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    /// Set the private key path (may contain a leading `~`)
    #[must_use]
    pub fn with_key_path(mut self, path: impl Into<String>) -> Self {
        self.key_path = Some(path.into());
        self
    }

    /// Whether remote mode is enabled
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Remote login user (empty when disabled)
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Remote host (empty when disabled)
    pub fn host(&self) -> &str {
        &self.host
    }

    /// SSH port as configured
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Private key path as configured, without tilde expansion
    pub fn key_path(&self) -> Option<&str> {
        self.key_path.as_deref()
    }

    fn validate(&self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        if self.user.is_empty() {
            return Err(ConfigError::MissingUser);
        }
        if self.host.is_empty() {
            return Err(ConfigError::MissingHost);
        }
        Ok(())
    }

    /// Advisory check that the configured key exists locally.
    ///
    /// A missing file is only a warning: the key may be provided by an agent
    /// or exist solely on the remote side.
    fn check_key_path(&self) {
        if let Some(ref key) = self.key_path {
            let expanded = shellexpand::tilde(key);
            if !Path::new(expanded.as_ref()).exists() {
                warn!("SSH key file not found: {}", key);
            }
        }
    }
}
