//! Shell configuration

use std::path::PathBuf;

use clap::ValueEnum;

/// What to do with the rest of a line once one of its tokens is rejected.
///
/// Division by zero never triggers this policy; it is reported and the line
/// carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BatchPolicy {
    /// Report the rejected token and keep evaluating the line
    #[default]
    Continue,
    /// Report the rejected token and skip the remainder of the line
    Abort,
}

/// Settings for one shell session.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Batch policy for lines containing rejected tokens
    pub policy: BatchPolicy,

    /// Whether to print the welcome banner on startup
    pub banner: bool,

    /// Prompt shown before each line
    pub prompt: String,

    /// Optional file to load and persist line history
    pub history: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            policy: BatchPolicy::Continue,
            banner: true,
            prompt: "Enter command: ".to_string(),
            history: None,
        }
    }
}

impl ShellConfig {
    /// Create a config with a specific batch policy.
    pub fn with_policy(policy: BatchPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }
}
