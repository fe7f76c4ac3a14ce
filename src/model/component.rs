//! Message component wire shapes.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Component type discriminator.
///
/// Only buttons are modelled; other component kinds pass through as
/// [`Component::Raw`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ComponentType {
    #[default]
    Button = 2,
}

/// Visual style of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ButtonStyle {
    #[default]
    Primary = 1,
    Secondary = 2,
    Success = 3,
    Danger = 4,
    Link = 5,
}

/// Emoji shown on a button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEmoji {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
}

impl From<&str> for ComponentEmoji {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<String> for ComponentEmoji {
    fn from(name: String) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }
}

/// A button as it appears on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonData {
    #[serde(rename = "type")]
    pub kind: ComponentType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default)]
    pub style: ButtonStyle,

    /// Always present on the wire; empty for link buttons
    #[serde(default)]
    pub custom_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// Any message component.
///
/// Buttons are typed; everything else (action rows, select menus) is kept
/// as untyped JSON and sent unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Component {
    Button(ButtonData),
    Raw(serde_json::Value),
}

impl From<ButtonData> for Component {
    fn from(button: ButtonData) -> Self {
        Self::Button(button)
    }
}

impl From<serde_json::Value> for Component {
    fn from(value: serde_json::Value) -> Self {
        Self::Raw(value)
    }
}
