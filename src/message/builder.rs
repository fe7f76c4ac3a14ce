//! Message builder.

use serde::{Deserialize, Serialize};

use crate::model::{Component, EmbedData};

/// Aggregate message snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessagePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default)]
    pub embeds: Vec<EmbedData>,

    #[serde(default)]
    pub components: Vec<Component>,
}

/// Composes embeds, components and content into one message.
///
/// Embeds and components are accepted either as builders
/// ([`crate::builders::Embed`], [`crate::builders::Button`]), which are
/// converted through their `to_json`, or as plain wire values, which are
/// appended unchanged.
///
/// ```
/// use hookcast::builders::{Button, Embed};
/// use hookcast::message::MessageBuilder;
/// use hookcast::model::EmbedData;
///
/// # fn main() -> Result<(), hookcast::builders::ValidationError> {
/// let mut embed = Embed::new();
/// embed.set_title("Nightly build")?;
///
/// let mut message = MessageBuilder::new(Some("Build report"));
/// message
///     .add_embed(&embed)
///     .add_embed(EmbedData::default())
///     .add_component(Button::link("https://ci.example.com/runs/42"));
///
/// assert_eq!(message.to_json().embeds.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageBuilder {
    data: MessagePayload,
}

impl MessageBuilder {
    /// Creates a message with optional text content.
    #[must_use]
    pub fn new<S: Into<String>>(content: Option<S>) -> Self {
        Self {
            data: MessagePayload {
                content: content.map(Into::into),
                ..MessagePayload::default()
            },
        }
    }

    /// Replaces the text content.
    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.data.content = Some(content.into());
        self
    }

    /// Appends an embed.
    pub fn add_embed(&mut self, embed: impl Into<EmbedData>) -> &mut Self {
        self.data.embeds.push(embed.into());
        self
    }

    /// Removes the embed at `index`; out-of-range indices are ignored.
    pub fn remove_embed(&mut self, index: usize) -> &mut Self {
        if index < self.data.embeds.len() {
            self.data.embeds.remove(index);
        }
        self
    }

    /// Removes all embeds.
    pub fn clear_embeds(&mut self) -> &mut Self {
        self.data.embeds.clear();
        self
    }

    /// Appends a component.
    pub fn add_component(&mut self, component: impl Into<Component>) -> &mut Self {
        self.data.components.push(component.into());
        self
    }

    #[must_use]
    pub fn embeds(&self) -> &[EmbedData] {
        &self.data.embeds
    }

    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.data.components
    }

    /// Returns a snapshot of the message.
    #[must_use]
    pub fn to_json(&self) -> MessagePayload {
        self.data.clone()
    }

    /// Consumes the builder, returning its payload.
    #[must_use]
    pub fn into_payload(self) -> MessagePayload {
        self.data
    }
}
