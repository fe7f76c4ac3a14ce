//! Application execution logic.
//!
//! Turns a parsed subcommand into one webhook call: builds the message
//! from `send` options, reads attachments from disk, and returns the
//! JSON the API answered with.

use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use thiserror::Error;

use hookcast::builders::{Button, ColorInput, Embed, ValidationError};
use hookcast::config::{Command, EmbedArgs, ModifyArgs, SendArgs, ValidatedConfig, expand_tilde};
use hookcast::message::MessageBuilder;
use hookcast::model::{Attachment, ButtonData, ButtonStyle, ExecuteData, ModifyWebhookOptions};
use hookcast::webhook::{HttpClient, WebhookClient, WebhookError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Buttons per action row accepted by the API.
const BUTTONS_PER_ROW: usize = 5;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// A message option failed validation.
    #[error("Invalid message: {0}")]
    Validation(#[from] ValidationError),

    /// The webhook call failed.
    #[error(transparent)]
    Webhook(#[from] WebhookError),

    /// Failed to read an attachment.
    #[error("Failed to read attachment '{}': {source}", path.display())]
    FileRead {
        /// Path to the attachment
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Attachment path without a usable file name.
    #[error("Attachment path '{}' has no file name", path.display())]
    InvalidAttachment {
        /// Path to the attachment
        path: PathBuf,
    },

    /// `send` was given nothing to send.
    #[error("Nothing to send: use --content, an embed option, --file or --link-button")]
    EmptyMessage,

    /// `modify` was given nothing to change.
    #[error("Nothing to modify: use --name, --avatar or --channel-id")]
    EmptyModify,
}

impl RunError {
    /// Returns true for errors caused by the command line rather than the
    /// network or the filesystem.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::EmptyMessage | Self::EmptyModify
        )
    }
}

/// Creates the webhook client with the configured default identity.
#[must_use]
pub fn create_webhook<H: HttpClient>(client: H, config: &ValidatedConfig) -> WebhookClient<H> {
    let webhook = WebhookClient::new(client, config.url.clone());

    if let Some(ref username) = config.username {
        webhook.set_username(username.as_str());
    }
    if let Some(ref avatar_url) = config.avatar_url {
        webhook.set_avatar(avatar_url.as_str());
    }

    webhook
}

/// Executes a subcommand against the webhook.
///
/// `init` needs no webhook and is handled before configuration is loaded;
/// it yields `null` here.
///
/// # Errors
///
/// Returns [`RunError`] if the message is invalid, an attachment cannot be
/// read, or the webhook call fails.
pub async fn execute<H: HttpClient>(
    webhook: &WebhookClient<H>,
    command: &Command,
) -> Result<Value, RunError> {
    match command {
        Command::Init { .. } => Ok(Value::Null),
        Command::Send(args) => {
            let data = build_execute_data(args).await?;
            tracing::info!(
                embeds = data.embeds.as_ref().map_or(0, Vec::len),
                files = data.files.len(),
                "Sending message"
            );
            Ok(webhook.execute(data).await?)
        }
        Command::Info => {
            let object = webhook.get().await?;
            Ok(serde_json::to_value(object).map_err(WebhookError::Serialize)?)
        }
        Command::Modify(args) => {
            let options = modify_options(args)?;
            let object = webhook.modify(&options).await?;
            Ok(serde_json::to_value(object).map_err(WebhookError::Serialize)?)
        }
        Command::Delete => {
            tracing::info!("Deleting webhook");
            Ok(webhook.delete().await?)
        }
    }
}

/// Builds the execute body for `send`, reading attachments from disk.
async fn build_execute_data(args: &SendArgs) -> Result<ExecuteData, RunError> {
    let message = build_message(args)?;
    let files = read_attachments(&args.files).await?;

    let payload = message.into_payload();
    if payload.content.is_none()
        && payload.embeds.is_empty()
        && payload.components.is_empty()
        && files.is_empty()
    {
        return Err(RunError::EmptyMessage);
    }

    let mut data = ExecuteData::from(payload);
    data.tts = args.tts.then_some(true);
    data.thread_name.clone_from(&args.thread_name);
    data.flags = args.flags;
    data.files = files;
    Ok(data)
}

/// Builds the message (text, embed, link buttons) from `send` options.
fn build_message(args: &SendArgs) -> Result<MessageBuilder, ValidationError> {
    let mut message = MessageBuilder::new(args.content.as_deref());

    if !args.embed.is_empty() {
        message.add_embed(build_embed(&args.embed)?);
    }

    let buttons: Vec<ButtonData> = args
        .link_buttons
        .iter()
        .map(|(label, url)| {
            let mut button = Button::link(url.as_str());
            button
                .set_label(label.as_str())
                .set_style(ButtonStyle::Link);
            button.to_json()
        })
        .collect();

    // Buttons only render inside an action row
    for row in buttons.chunks(BUTTONS_PER_ROW) {
        message.add_component(json!({ "type": 1, "components": row }));
    }

    Ok(message)
}

/// Builds an embed from the embed options, validating each value.
fn build_embed(args: &EmbedArgs) -> Result<Embed, ValidationError> {
    let mut embed = Embed::new();

    if let Some(ref title) = args.title {
        embed.set_title(title)?;
    }
    if let Some(ref description) = args.description {
        embed.set_description(description)?;
    }
    if let Some(ref url) = args.embed_url {
        embed.set_url(url)?;
    }
    if let Some(ref color) = args.color {
        embed.set_color(parse_color(color))?;
    }
    if let Some(ref image) = args.image {
        embed.set_image(image)?;
    }
    if let Some(ref thumbnail) = args.thumbnail {
        embed.set_thumbnail(thumbnail)?;
    }
    if args.footer.is_some() || args.footer_icon.is_some() {
        let text = args.footer.clone().unwrap_or_default();
        embed.set_footer(args.footer_icon.as_deref(), text)?;
    }
    if let Some(ref author) = args.author {
        embed.set_author(author, None, None)?;
    }
    match args.timestamp {
        Some(Some(ref value)) => {
            embed.set_timestamp_str(value)?;
        }
        Some(None) => {
            embed.set_timestamp();
        }
        None => {}
    }
    for (name, value) in &args.fields {
        embed.add_field(name, value, false)?;
    }
    for (name, value) in &args.inline_fields {
        embed.add_field(name, value, true)?;
    }

    Ok(embed)
}

/// Six hex digits (with or without `#`) are `RRGGBB`; other numeric input
/// is a decimal color value; anything else is reported as a bad hex code.
fn parse_color(value: &str) -> ColorInput {
    let value = value.trim();
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return ColorInput::from(value);
    }
    value
        .parse::<i64>()
        .map_or_else(|_| ColorInput::from(value), ColorInput::Number)
}

fn modify_options(args: &ModifyArgs) -> Result<ModifyWebhookOptions, RunError> {
    let options = ModifyWebhookOptions {
        name: args.name.clone(),
        avatar: args.avatar.clone(),
        channel_id: args.channel_id.clone(),
    };

    if options.is_empty() {
        return Err(RunError::EmptyModify);
    }
    Ok(options)
}

/// Reads each file into an attachment named after its file name.
async fn read_attachments(paths: &[PathBuf]) -> Result<Vec<Attachment>, RunError> {
    let mut attachments = Vec::with_capacity(paths.len());

    for path in paths {
        let path = expand_tilde(path);
        let name = file_name(&path)?;
        let data = tokio::fs::read(&path)
            .await
            .map_err(|source| RunError::FileRead {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(name, bytes = data.len(), "Attachment loaded");
        attachments.push(Attachment::new(name, data));
    }

    Ok(attachments)
}

fn file_name(path: &Path) -> Result<String, RunError> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(ToString::to_string)
        .ok_or_else(|| RunError::InvalidAttachment {
            path: path.to_path_buf(),
        })
}
