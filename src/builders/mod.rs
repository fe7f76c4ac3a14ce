//! Validating builders for embeds and buttons.
//!
//! This module provides:
//! - Rich embed construction with per-setter validation ([`Embed`])
//! - Button construction with an explicit action variant ([`Button`])
//! - Color input accepted by [`Embed::set_color`] ([`ColorInput`])
//! - The shared URL pattern check ([`is_valid_url`])
//!
//! Every limit is checked when a value is set, so a builder never holds
//! data the remote API would reject for length or format.

mod button;
mod embed;
mod error;
mod pattern;


pub use button::{Button, ButtonAction};
pub use embed::{ColorInput, Embed, limits};
pub use error::ValidationError;
pub use pattern::{ATTACHMENT_SCHEME, is_valid_url};
