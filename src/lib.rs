//! ssh-wrap - transparent SSH wrapping for local commands
//!
//! This crate rewrites commands intended for local execution so they run on
//! a remote host over SSH instead, when remote mode is configured. It is a
//! command transformer, not an executor: nothing here spawns a process. The
//! caller passes every command it is about to run through [`SshWrapper`] and
//! executes whatever comes back.
//!
//! # Environment Variables
//!
//! - `SSH_WRAP_ENABLED` - Enable remote mode (`true`/`1`/`yes`, default: off)
//! - `SSH_WRAP_USER` - SSH username (required if enabled)
//! - `SSH_WRAP_HOST` - SSH host or IP (required if enabled)
//! - `SSH_WRAP_PORT` - SSH port (optional, default: 22)
//! - `SSH_WRAP_KEY` - Path to SSH private key (optional)
//!
//! # Example
//!
//! ```
//! use ssh_wrap::{RemoteExecConfig, SshWrapper};
//!
//! // Disabled configuration: wrapping is the identity.
//! let wrapper = SshWrapper::new(RemoteExecConfig::local());
//! assert_eq!(wrapper.wrap(&["kubectl", "get", "pods"]), ["kubectl", "get", "pods"]);
//!
//! // Enabled: the command is rewritten as an ssh invocation.
//! let config = RemoteExecConfig::remote("alice", "10.0.0.5")?.with_port("2222");
//! let wrapper = SshWrapper::new(config);
//! let wrapped = wrapper.wrap(&["kubectl", "get", "pods"]);
//! assert_eq!(wrapped[0], "ssh");
//! assert_eq!(wrapped.last().map(String::as_str), Some("kubectl get pods"));
//! # Ok::<(), ssh_wrap::ConfigError>(())
//! ```
//!
//! Production callers usually resolve the configuration once from the
//! environment with [`SshWrapper::from_env`] and share the wrapper.

pub mod config;
pub mod error;
pub mod escape;
pub mod wrap;

// Re-exports for convenience
pub use config::{parse_enabled_flag, RemoteExecConfig, DEFAULT_PORT};
pub use error::{ConfigError, Result};
pub use escape::quote;
pub use wrap::{ConnectionInfo, SshWrapper};
