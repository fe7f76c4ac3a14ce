//! Wire types for the webhook API.
//!
//! These are the plain serde shapes sent to and received from the remote
//! endpoint. Builders in [`crate::builders`] produce them; values parsed
//! from JSON can also be used directly.

mod component;
mod embed;
mod webhook;

#[cfg(test)]
mod model_tests;

pub use component::{ButtonData, ButtonStyle, Component, ComponentEmoji, ComponentType};
pub use embed::{EmbedAuthor, EmbedData, EmbedField, EmbedFooter, EmbedMedia};
pub use webhook::{
    AllowedMentions, Attachment, ExecuteData, MentionType, ModifyWebhookOptions, User,
    WebhookObject, WebhookReply,
};
