//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Hookcast: send messages to a chat webhook
///
/// Posts text, embeds, link buttons and file attachments to a webhook,
/// and inspects, renames or deletes the webhook itself.
#[derive(Debug, Parser)]
#[command(name = "hookcast")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Webhook URL, including id and token
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Default display name for sent messages
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Default avatar URL for sent messages
    #[arg(long = "avatar-url", global = true)]
    pub avatar_url: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for hookcast
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "hookcast.toml")]
        output: PathBuf,
    },

    /// Send a message
    Send(SendArgs),

    /// Print the webhook descriptor
    Info,

    /// Change the webhook's name, avatar or channel
    Modify(ModifyArgs),

    /// Delete the webhook
    Delete,
}

/// Arguments of the `send` subcommand.
#[derive(Debug, Default, Args)]
pub struct SendArgs {
    /// Message text
    #[arg(long)]
    pub content: Option<String>,

    /// Send as text-to-speech
    #[arg(long)]
    pub tts: bool,

    /// Create a thread with this name (forum channels)
    #[arg(long = "thread-name")]
    pub thread_name: Option<String>,

    /// Raw message flags bitfield
    #[arg(long)]
    pub flags: Option<u64>,

    /// File to attach (can be specified multiple times)
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub embed: EmbedArgs,

    /// Link button in 'Label=URL' format (can be specified multiple times)
    #[arg(long = "link-button", value_name = "LABEL=URL", value_parser = parse_key_value)]
    pub link_buttons: Vec<(String, String)>,
}

/// Embed options of the `send` subcommand.
///
/// No embed is attached unless at least one of these is given.
#[derive(Debug, Default, Args)]
pub struct EmbedArgs {
    /// Embed title
    #[arg(long)]
    pub title: Option<String>,

    /// Embed description
    #[arg(long)]
    pub description: Option<String>,

    /// URL the embed title links to
    #[arg(long = "embed-url")]
    pub embed_url: Option<String>,

    /// Embed color as '#RRGGBB' or 'RRGGBB' (six digits are always hex), or a decimal number
    #[arg(long)]
    pub color: Option<String>,

    /// Image URL or 'attachment://NAME'
    #[arg(long)]
    pub image: Option<String>,

    /// Thumbnail URL
    #[arg(long)]
    pub thumbnail: Option<String>,

    /// Footer text
    #[arg(long)]
    pub footer: Option<String>,

    /// Footer icon URL
    #[arg(long = "footer-icon")]
    pub footer_icon: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Timestamp; current time if given without a value
    #[arg(long, num_args = 0..=1, value_name = "DATE")]
    pub timestamp: Option<Option<String>>,

    /// Field in 'Name=Value' format (can be specified multiple times)
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub fields: Vec<(String, String)>,

    /// Inline field in 'Name=Value' format (can be specified multiple times)
    #[arg(long = "inline-field", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub inline_fields: Vec<(String, String)>,
}

impl EmbedArgs {
    /// Returns true if no embed option was given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.embed_url.is_none()
            && self.color.is_none()
            && self.image.is_none()
            && self.thumbnail.is_none()
            && self.footer.is_none()
            && self.footer_icon.is_none()
            && self.author.is_none()
            && self.timestamp.is_none()
            && self.fields.is_empty()
            && self.inline_fields.is_empty()
    }
}

/// Arguments of the `modify` subcommand.
#[derive(Debug, Default, Args)]
pub struct ModifyArgs {
    /// New default name
    #[arg(long)]
    pub name: Option<String>,

    /// New avatar as an image data URI
    #[arg(long)]
    pub avatar: Option<String>,

    /// Channel to move the webhook to
    #[arg(long = "channel-id")]
    pub channel_id: Option<String>,
}

/// Splits `key=value` at the first `=`.
///
/// The key is trimmed; the value is kept verbatim so URLs and text survive.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected 'KEY=VALUE', got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning clap's error.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown or malformed arguments.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }
}
