//! Hookcast: a chat webhook client
//!
//! A library for composing rich messages (embeds, buttons, attachments)
//! and delivering them to a webhook endpoint, plus reading, modifying and
//! deleting the webhook itself.
//!
//! # Example
//!
//! ```no_run
//! use hookcast::builders::Embed;
//! use hookcast::message::MessageBuilder;
//! use hookcast::model::ExecuteData;
//! use hookcast::webhook::{ReqwestClient, WebhookClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut embed = Embed::new();
//! embed.set_title("Deploy finished")?.set_color("#2ecc71")?;
//!
//! let mut message = MessageBuilder::new(Some("v1.2.0 is live"));
//! message.add_embed(&embed);
//!
//! let url = url::Url::parse("https://discord.com/api/webhooks/123/token")?;
//! let webhook = WebhookClient::new(ReqwestClient::new(), url);
//! webhook.execute(ExecuteData::from(message)).await?;
//! # Ok(())
//! # }
//! ```

pub mod builders;
pub mod config;
pub mod message;
pub mod model;
pub mod time;
pub mod webhook;
