//! Button builder.

use crate::model::{ButtonData, ButtonStyle, Component, ComponentEmoji, ComponentType};

/// What happens when a button is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Sends an interaction carrying this identifier.
    CustomId(String),
    /// Opens an external link.
    Url(String),
}

impl Default for ButtonAction {
    fn default() -> Self {
        Self::CustomId(String::new())
    }
}

/// Builder for a message button.
///
/// Setters do not validate. The action is exactly one of a custom id or a
/// URL; [`Button::set_url`] and [`Button::set_custom_id`] switch between
/// them.
///
/// ```
/// use hookcast::builders::Button;
/// use hookcast::model::ButtonStyle;
///
/// let mut docs = Button::link("https://example.com/docs");
/// docs.set_label("Docs").set_style(ButtonStyle::Link).set_emoji("📖");
///
/// let wire = docs.to_json();
/// assert_eq!(wire.custom_id, "");
/// assert_eq!(wire.url.as_deref(), Some("https://example.com/docs"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    label: Option<String>,
    style: Option<ButtonStyle>,
    action: ButtonAction,
    emoji: Option<ComponentEmoji>,
    disabled: Option<bool>,
}

impl Button {
    /// Creates a button with an empty custom id.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interaction button.
    #[must_use]
    pub fn custom(custom_id: impl Into<String>) -> Self {
        Self {
            action: ButtonAction::CustomId(custom_id.into()),
            ..Self::default()
        }
    }

    /// Creates a link button.
    #[must_use]
    pub fn link(url: impl Into<String>) -> Self {
        Self {
            action: ButtonAction::Url(url.into()),
            ..Self::default()
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    pub const fn set_style(&mut self, style: ButtonStyle) -> &mut Self {
        self.style = Some(style);
        self
    }

    /// Makes this an interaction button.
    pub fn set_custom_id(&mut self, custom_id: impl Into<String>) -> &mut Self {
        self.action = ButtonAction::CustomId(custom_id.into());
        self
    }

    /// Makes this a link button.
    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.action = ButtonAction::Url(url.into());
        self
    }

    /// Sets the emoji; a bare string becomes `{ "name": ... }`.
    pub fn set_emoji(&mut self, emoji: impl Into<ComponentEmoji>) -> &mut Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub const fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.disabled = Some(disabled);
        self
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub const fn style(&self) -> Option<ButtonStyle> {
        self.style
    }

    #[must_use]
    pub const fn action(&self) -> &ButtonAction {
        &self.action
    }

    #[must_use]
    pub const fn emoji(&self) -> Option<&ComponentEmoji> {
        self.emoji.as_ref()
    }

    #[must_use]
    pub const fn disabled(&self) -> Option<bool> {
        self.disabled
    }

    /// Returns the wire form.
    ///
    /// `style` defaults to primary and `custom_id` is always present, empty
    /// for link buttons.
    #[must_use]
    pub fn to_json(&self) -> ButtonData {
        let (custom_id, url) = match &self.action {
            ButtonAction::CustomId(id) => (id.clone(), None),
            ButtonAction::Url(url) => (String::new(), Some(url.clone())),
        };

        ButtonData {
            kind: ComponentType::Button,
            label: self.label.clone(),
            style: self.style.unwrap_or_default(),
            custom_id,
            url,
            emoji: self.emoji.clone(),
            disabled: self.disabled,
        }
    }
}

/// A wire button with a `url` becomes a link button; otherwise its
/// `custom_id` is used.
impl From<ButtonData> for Button {
    fn from(data: ButtonData) -> Self {
        let action = match data.url {
            Some(url) => ButtonAction::Url(url),
            None => ButtonAction::CustomId(data.custom_id),
        };

        Self {
            label: data.label,
            style: Some(data.style),
            action,
            emoji: data.emoji,
            disabled: data.disabled,
        }
    }
}

impl From<&Button> for ButtonData {
    fn from(button: &Button) -> Self {
        button.to_json()
    }
}

impl From<&Button> for Component {
    fn from(button: &Button) -> Self {
        Self::Button(button.to_json())
    }
}

impl From<Button> for Component {
    fn from(button: Button) -> Self {
        Self::Button(button.to_json())
    }
}
