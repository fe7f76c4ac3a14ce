//! Message composition.
//!
//! [`MessageBuilder`] collects embeds, components and text content into a
//! [`MessagePayload`], which converts into [`ExecuteData`] for sending.

mod builder;

#[cfg(test)]
mod builder_tests;

pub use builder::{MessageBuilder, MessagePayload};

use crate::model::ExecuteData;

impl From<MessagePayload> for ExecuteData {
    fn from(payload: MessagePayload) -> Self {
        Self {
            content: payload.content,
            embeds: Some(payload.embeds),
            components: Some(payload.components),
            ..Self::default()
        }
    }
}

impl From<MessageBuilder> for ExecuteData {
    fn from(builder: MessageBuilder) -> Self {
        builder.into_payload().into()
    }
}
