//! Command wrapping
//!
//! [`SshWrapper`] rewrites a command intended for local execution into the
//! equivalent `ssh` invocation when remote mode is enabled. It never spawns
//! anything itself; callers pass the returned command to their own process
//! launcher, treating the final element of a wrapped list as one opaque
//! argument to `ssh`.

use serde::Serialize;
use tracing::debug;

use crate::config::{RemoteExecConfig, DEFAULT_PORT};
use crate::error::Result;
use crate::escape::quote;

/// Fixed ssh options for unattended connections to ephemeral or
/// frequently-rotated hosts. Host keys are neither checked nor persisted,
/// so callers that need host-key verification must not use this wrapper.
const COMPAT_OPTIONS: [&str; 6] = [
    "-o",
    "StrictHostKeyChecking=no",
    "-o",
    "UserKnownHostsFile=/dev/null",
    "-o",
    "LogLevel=ERROR",
];

/// Connection details as seen by callers
///
/// Every optional field is `None` while remote mode is disabled, even if
/// the underlying configuration recorded values for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionInfo {
    /// Whether remote mode is enabled
    pub enabled: bool,

    /// Remote login user
    pub user: Option<String>,

    /// Remote host
    pub host: Option<String>,

    /// SSH port
    pub port: Option<String>,

    /// Private key path
    pub key: Option<String>,
}

/// Command transformer driven by a resolved [`RemoteExecConfig`]
///
/// # Examples
///
/// ```
/// use ssh_wrap::{RemoteExecConfig, SshWrapper};
///
/// let wrapper = SshWrapper::new(RemoteExecConfig::remote("alice", "10.0.0.5")?);
/// let wrapped = wrapper.wrap(&["kubectl", "get", "pods"]);
/// assert_eq!(wrapped.first().map(String::as_str), Some("ssh"));
/// assert_eq!(wrapped.last().map(String::as_str), Some("kubectl get pods"));
/// # Ok::<(), ssh_wrap::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SshWrapper {
    config: RemoteExecConfig,
}

impl SshWrapper {
    /// Create a wrapper from an already-resolved configuration.
    pub fn new(config: RemoteExecConfig) -> Self {
        Self { config }
    }

    /// Resolve configuration from the process environment and build a wrapper.
    ///
    /// # Errors
    /// Returns [`crate::ConfigError`] if remote mode is enabled with a
    /// missing user or host.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(RemoteExecConfig::from_env()?))
    }

    /// Whether commands will be rewritten to run remotely.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled()
    }

    /// The configuration driving this wrapper.
    pub fn config(&self) -> &RemoteExecConfig {
        &self.config
    }

    /// Connection details, with all fields absent while disabled.
    pub fn connection_info(&self) -> ConnectionInfo {
        if self.config.enabled() {
            ConnectionInfo {
                enabled: true,
                user: Some(self.config.user().to_string()),
                host: Some(self.config.host().to_string()),
                port: Some(self.config.port().to_string()),
                key: self.config.key_path().map(str::to_string),
            }
        } else {
            ConnectionInfo {
                enabled: false,
                user: None,
                host: None,
                port: None,
                key: None,
            }
        }
    }

    /// Wrap an argument list for remote execution.
    ///
    /// In local mode the arguments come back unchanged. In remote mode the
    /// result is an `ssh` invocation whose final element is the original
    /// arguments joined into a single shell-quoted string; the remote shell
    /// receives that element as one argument and re-parses it, so embedded
    /// spaces and quotes survive as literal data.
    ///
    /// ```text
    /// ["kubectl", "get", "pods"] -> ["ssh", ..., "alice@10.0.0.5", "kubectl get pods"]
    /// ```
    pub fn wrap<S: AsRef<str>>(&self, cmd: &[S]) -> Vec<String> {
        if !self.config.enabled() {
            return cmd.iter().map(|arg| arg.as_ref().to_string()).collect();
        }

        let mut ssh_cmd = vec!["ssh".to_string()];

        let port = self.config.port();
        if !port.is_empty() && port != DEFAULT_PORT {
            ssh_cmd.push("-p".to_string());
            ssh_cmd.push(port.to_string());
        }

        if let Some(key) = self.config.key_path() {
            ssh_cmd.push("-i".to_string());
            ssh_cmd.push(shellexpand::tilde(key).into_owned());
        }

        ssh_cmd.extend(COMPAT_OPTIONS.iter().map(|opt| (*opt).to_string()));

        ssh_cmd.push(format!("{}@{}", self.config.user(), self.config.host()));

        let remote_command = cmd
            .iter()
            .map(|arg| quote(arg.as_ref()))
            .collect::<Vec<_>>()
            .join(" ");
        ssh_cmd.push(remote_command);

        debug!("wrapped command: {}", ssh_cmd.join(" "));
        ssh_cmd
    }

    /// Wrap a shell command string for remote execution.
    ///
    /// The caller's string is already in shell syntax, so it is quoted as a
    /// single unit and re-parsed on the remote side; pipes and redirects in
    /// `cmd` run remotely, not locally.
    ///
    /// ```text
    /// "kubectl get pods | grep Running"
    ///     -> "ssh ... alice@10.0.0.5 'kubectl get pods | grep Running'"
    /// ```
    pub fn wrap_shell(&self, cmd: &str) -> String {
        if !self.config.enabled() {
            return cmd.to_string();
        }

        let mut ssh_cmd = String::from("ssh");

        let port = self.config.port();
        if !port.is_empty() && port != DEFAULT_PORT {
            ssh_cmd.push_str(" -p ");
            ssh_cmd.push_str(port);
        }

        if let Some(key) = self.config.key_path() {
            let expanded = shellexpand::tilde(key);
            ssh_cmd.push_str(" -i ");
            ssh_cmd.push_str(&quote(&expanded));
        }

        for opt in COMPAT_OPTIONS {
            ssh_cmd.push(' ');
            ssh_cmd.push_str(opt);
        }

        ssh_cmd.push(' ');
        ssh_cmd.push_str(self.config.user());
        ssh_cmd.push('@');
        ssh_cmd.push_str(self.config.host());
        ssh_cmd.push(' ');
        ssh_cmd.push_str(&quote(cmd));

        debug!("wrapped shell command: {}", ssh_cmd);
        ssh_cmd
    }
}
