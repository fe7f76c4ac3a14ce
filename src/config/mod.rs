//! Configuration layer for the hookcast binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//!
//! # Priority
//!
//! Each value is taken from the first source that sets it:
//!
//! 1. **Explicit CLI arguments** (`--url`, `--username`, `--avatar-url`)
//! 2. **TOML config file** (`[webhook]` section)
//!
//! `url` is required. `username` and `avatar_url` are optional and become
//! the client's default identity.
//!
//! The webhook URL embeds the token; [`ValidatedConfig`]'s `Display`
//! output redacts it so the configuration can be logged.

mod cli;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command, EmbedArgs, ModifyArgs, SendArgs};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, WebhookSection, default_config_template};
pub use validated::{ValidatedConfig, expand_tilde, write_default_config};
