//! Webhook descriptor and request bodies.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Component, EmbedData};

/// Webhook descriptor returned by `GET` and `PATCH`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookObject {
    pub id: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// User that created the webhook (absent when fetched by token)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    #[serde(default)]
    pub name: Option<String>,

    /// Avatar hash
    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Body returned by `GET` and `PATCH`.
///
/// A webhook descriptor when the body has that shape, otherwise the JSON
/// as received (an API error object, for example).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WebhookReply {
    Webhook(WebhookObject),
    Other(serde_json::Value),
}

impl WebhookReply {
    /// Returns the descriptor, if the body was one.
    #[must_use]
    pub const fn webhook(&self) -> Option<&WebhookObject> {
        match self {
            Self::Webhook(object) => Some(object),
            Self::Other(_) => None,
        }
    }

    /// Returns true if the body was not a webhook descriptor.
    #[must_use]
    pub const fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

/// Minimal user record embedded in a [`WebhookObject`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,

    #[serde(default)]
    pub discriminator: Option<String>,

    #[serde(default)]
    pub avatar: Option<String>,
}

/// Body of a `PATCH` (modify) request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyWebhookOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Avatar image data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

impl ModifyWebhookOptions {
    /// Returns true if no option is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.avatar.is_none() && self.channel_id.is_none()
    }
}

/// Mention categories allowed to ping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionType {
    Roles,
    Users,
    Everyone,
}

/// Controls which mentions in `content` actually notify.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedMentions {
    #[serde(default)]
    pub parse: Vec<MentionType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replied_user: Option<bool>,
}

impl AllowedMentions {
    /// Suppresses every mention.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}

/// A file uploaded alongside an execute request.
///
/// The same `name` is used for the multipart part name and its filename,
/// so embeds can reference it as `attachment://<name>`.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub data: Vec<u8>,
}

impl Attachment {
    #[must_use]
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Reference usable in embed image, thumbnail and footer icon URLs.
    #[must_use]
    pub fn reference(&self) -> String {
        format!("attachment://{}", self.name)
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("name", &self.name)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Body of an execute (`POST`) request.
///
/// `files` never appears in the JSON body; when non-empty the request is
/// sent as multipart with the JSON under `payload_json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecuteData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<EmbedData>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,

    /// Message flag bits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,

    /// Creates a thread with this name (forum channel webhooks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<String>,

    #[serde(skip)]
    pub files: Vec<Attachment>,
}

impl ExecuteData {
    /// Creates a plain text message.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Attaches a file.
    #[must_use]
    pub fn with_file(mut self, file: Attachment) -> Self {
        self.files.push(file);
        self
    }

    /// Sets the per-message username override.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the per-message avatar override.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }
}
