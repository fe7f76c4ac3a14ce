//! Rich embed builder.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};

use crate::model::{EmbedAuthor, EmbedData, EmbedField, EmbedFooter, EmbedMedia};
use crate::time::{Clock, SystemClock};

use super::ValidationError;
use super::pattern::{char_len, hex_digits, is_valid_media_url, is_valid_url};

/// Length and count limits enforced by [`Embed`].
pub mod limits {
    /// Maximum title length in characters.
    pub const TITLE: usize = 256;
    /// Maximum description length in characters.
    pub const DESCRIPTION: usize = 4096;
    /// Maximum footer text length in characters.
    pub const FOOTER_TEXT: usize = 2048;
    /// Maximum author name length in characters.
    pub const AUTHOR_NAME: usize = 256;
    /// Maximum field name length in characters.
    pub const FIELD_NAME: usize = 256;
    /// Maximum field value length in characters.
    pub const FIELD_VALUE: usize = 1024;
    /// Maximum number of fields per embed.
    pub const FIELDS: usize = 25;
    /// Largest valid color (`#FFFFFF`).
    pub const MAX_COLOR: u32 = 0xFF_FFFF;
}

/// Color accepted by [`Embed::set_color`].
///
/// Either a number in `0..=0xFFFFFF` or a hex string `#RRGGBB` / `RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    Number(i64),
    Hex(String),
}

impl ColorInput {
    /// Resolves the input to a 24-bit color.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ColorOutOfRange`] for numbers outside the
    /// RGB range and [`ValidationError::InvalidHexCode`] for malformed strings.
    pub fn resolve(&self) -> Result<u32, ValidationError> {
        match self {
            Self::Number(n) => u32::try_from(*n)
                .ok()
                .filter(|c| *c <= limits::MAX_COLOR)
                .ok_or(ValidationError::ColorOutOfRange(*n)),
            Self::Hex(s) => hex_digits(s)
                .and_then(|digits| u32::from_str_radix(digits, 16).ok())
                .ok_or_else(|| ValidationError::InvalidHexCode(s.clone())),
        }
    }
}

impl From<u32> for ColorInput {
    fn from(n: u32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl From<i32> for ColorInput {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl From<i64> for ColorInput {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        Self::Hex(s.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        Self::Hex(s)
    }
}

impl TryFrom<&serde_json::Value> for ColorInput {
    type Error = ValidationError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::String(s) => Ok(Self::Hex(s.clone())),
            Value::Number(n) => Ok(Self::Number(json_number_color(n))),
            Value::Null => Err(ValidationError::InvalidColorType { received: "null" }),
            Value::Bool(_) => Err(ValidationError::InvalidColorType {
                received: "boolean",
            }),
            Value::Array(_) => Err(ValidationError::InvalidColorType { received: "array" }),
            Value::Object(_) => Err(ValidationError::InvalidColorType {
                received: "object",
            }),
        }
    }
}

/// Integral numbers (`255` or `255.0`) keep their value; fractional or huge
/// ones map to `i64::MAX`, which can never be a valid color.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn json_number_color(n: &serde_json::Number) -> i64 {
    if let Some(value) = n.as_i64() {
        return value;
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= f64::from(limits::MAX_COLOR) => f as i64,
        _ => i64::MAX,
    }
}

/// Builder for a rich embed.
///
/// Setters validate their input and return `&mut Self`, so calls chain
/// with `?`:
///
/// ```
/// use hookcast::builders::Embed;
///
/// # fn main() -> Result<(), hookcast::builders::ValidationError> {
/// let mut embed = Embed::new();
/// embed
///     .set_title("Deploy finished")?
///     .set_color("#2ecc71")?
///     .add_field("Region", "eu-west-1", true)?;
/// assert_eq!(embed.color(), Some(0x2E_CC71));
/// # Ok(())
/// # }
/// ```
///
/// A failed setter leaves the embed unchanged.
///
/// # Serialization
///
/// [`Embed::to_json`] emits title, description, url, color, timestamp,
/// footer, image and thumbnail. Author and fields are held by the builder
/// but are not part of that snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    timestamp: Option<DateTime<Utc>>,
    color: Option<u32>,
    footer: Option<EmbedFooter>,
    image: Option<EmbedMedia>,
    thumbnail: Option<EmbedMedia>,
    author: Option<EmbedAuthor>,
    fields: Vec<EmbedField>,
}

impl Embed {
    /// Creates an empty embed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TitleTooLong`] above 256 characters.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let title = title.into();
        if char_len(&title) > limits::TITLE {
            return Err(ValidationError::TitleTooLong);
        }

        self.title = Some(title);
        Ok(self)
    }

    /// Sets the description.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DescriptionTooLong`] above 4096 characters.
    pub fn set_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        let description = description.into();
        if char_len(&description) > limits::DESCRIPTION {
            return Err(ValidationError::DescriptionTooLong);
        }

        self.description = Some(description);
        Ok(self)
    }

    /// Sets the color from a number or a hex string.
    ///
    /// # Errors
    ///
    /// See [`ColorInput::resolve`].
    pub fn set_color(&mut self, color: impl Into<ColorInput>) -> Result<&mut Self, ValidationError> {
        self.color = Some(color.into().resolve()?);
        Ok(self)
    }

    /// Sets the link target of the title.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUrl`] if the value does not look
    /// like an `http(s)` or `www.` URL.
    pub fn set_url(&mut self, url: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let url = url.into();
        if !is_valid_url(&url) {
            return Err(ValidationError::InvalidUrl(url));
        }

        self.url = Some(url);
        Ok(self)
    }

    /// Sets the timestamp to the current time.
    pub fn set_timestamp(&mut self) -> &mut Self {
        self.set_timestamp_from(&SystemClock)
    }

    /// Sets the timestamp to the current time of `clock`.
    pub fn set_timestamp_from(&mut self, clock: &impl Clock) -> &mut Self {
        self.set_timestamp_at(DateTime::<Utc>::from(clock.now()))
    }

    /// Sets the timestamp to an exact instant.
    pub fn set_timestamp_at(&mut self, timestamp: DateTime<Utc>) -> &mut Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Parses and sets the timestamp.
    ///
    /// Accepts RFC 3339, RFC 2822, `YYYY-MM-DD[(T| )HH:MM:SS[.fff]]` (read
    /// as UTC) and a bare `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] if no format matches.
    pub fn set_timestamp_str(&mut self, timestamp: &str) -> Result<&mut Self, ValidationError> {
        let parsed = parse_timestamp(timestamp)?;
        Ok(self.set_timestamp_at(parsed))
    }

    /// Sets the timestamp from milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] when out of range.
    pub fn set_timestamp_millis(&mut self, millis: i64) -> Result<&mut Self, ValidationError> {
        let parsed = DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| ValidationError::InvalidTimestamp(millis.to_string()))?;
        Ok(self.set_timestamp_at(parsed))
    }

    /// Sets the footer text and optional icon.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::FooterTooLong`] above 2048 characters, or
    /// [`ValidationError::InvalidUrl`] if the icon is neither an
    /// `attachment://` reference nor a URL.
    pub fn set_footer(
        &mut self,
        icon_url: Option<&str>,
        text: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        let text = text.into();
        if char_len(&text) > limits::FOOTER_TEXT {
            return Err(ValidationError::FooterTooLong);
        }

        if let Some(icon) = icon_url {
            if !is_valid_media_url(icon) {
                return Err(ValidationError::InvalidUrl(icon.to_string()));
            }
        }

        self.footer = Some(EmbedFooter {
            text,
            icon_url: icon_url.map(ToString::to_string),
        });
        Ok(self)
    }

    /// Sets the main image.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUrl`] unless the value is an
    /// `attachment://` reference or a URL.
    pub fn set_image(&mut self, url: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let url = url.into();
        if !is_valid_media_url(&url) {
            return Err(ValidationError::InvalidUrl(url));
        }

        self.image = Some(EmbedMedia { url });
        Ok(self)
    }

    /// Sets the thumbnail.
    ///
    /// Unlike [`Embed::set_image`], `attachment://` references are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUrl`] unless the value is a URL.
    pub fn set_thumbnail(&mut self, url: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let url = url.into();
        if !is_valid_url(&url) {
            return Err(ValidationError::InvalidUrl(url));
        }

        self.thumbnail = Some(EmbedMedia { url });
        Ok(self)
    }

    /// Sets the author name.
    ///
    /// `url` and `icon_url` are accepted for call-site compatibility but are
    /// not stored; only the name reaches the author block.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AuthorNameTooLong`] above 256 characters.
    pub fn set_author(
        &mut self,
        name: impl Into<String>,
        url: Option<&str>,
        icon_url: Option<&str>,
    ) -> Result<&mut Self, ValidationError> {
        let name = name.into();
        if char_len(&name) > limits::AUTHOR_NAME {
            return Err(ValidationError::AuthorNameTooLong);
        }

        if url.is_some() || icon_url.is_some() {
            tracing::debug!("Embed author url/icon_url are not stored");
        }

        self.author = Some(EmbedAuthor {
            name,
            url: None,
            icon_url: None,
        });
        Ok(self)
    }

    /// Appends a field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooManyFields`] when 25 fields are already
    /// present, or a length error for the name (256) or value (1024).
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Result<&mut Self, ValidationError> {
        if self.fields.len() >= limits::FIELDS {
            return Err(ValidationError::TooManyFields);
        }

        let name = name.into();
        let value = value.into();
        if char_len(&name) > limits::FIELD_NAME {
            return Err(ValidationError::FieldNameTooLong);
        }
        if char_len(&value) > limits::FIELD_VALUE {
            return Err(ValidationError::FieldValueTooLong);
        }

        self.fields.push(EmbedField::new(name, value, inline));
        Ok(self)
    }

    /// Appends fields in order.
    ///
    /// Not atomic: processing stops at the first invalid entry and the
    /// entries before it stay added. Entries must carry an explicit
    /// `inline` flag.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Embed::add_field`], or
    /// [`ValidationError::MissingFieldInline`].
    pub fn add_fields(
        &mut self,
        fields: impl IntoIterator<Item = EmbedField>,
    ) -> Result<&mut Self, ValidationError> {
        for field in fields {
            let inline = field.inline.ok_or(ValidationError::MissingFieldInline)?;
            self.add_field(field.name, field.value, inline)?;
        }
        Ok(self)
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub const fn timestamp(&self) -> Option<&DateTime<Utc>> {
        self.timestamp.as_ref()
    }

    #[must_use]
    pub const fn color(&self) -> Option<u32> {
        self.color
    }

    #[must_use]
    pub const fn footer(&self) -> Option<&EmbedFooter> {
        self.footer.as_ref()
    }

    #[must_use]
    pub const fn image(&self) -> Option<&EmbedMedia> {
        self.image.as_ref()
    }

    #[must_use]
    pub const fn thumbnail(&self) -> Option<&EmbedMedia> {
        self.thumbnail.as_ref()
    }

    #[must_use]
    pub const fn author(&self) -> Option<&EmbedAuthor> {
        self.author.as_ref()
    }

    #[must_use]
    pub fn fields(&self) -> &[EmbedField] {
        &self.fields
    }

    /// Returns an independent wire snapshot of this embed.
    ///
    /// Author and fields are not included.
    #[must_use]
    pub fn to_json(&self) -> EmbedData {
        EmbedData {
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            color: self.color,
            timestamp: self
                .timestamp
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
            footer: self.footer.clone(),
            image: self.image.clone(),
            thumbnail: self.thumbnail.clone(),
            author: None,
            fields: Vec::new(),
        }
    }
}

impl From<&Embed> for EmbedData {
    fn from(embed: &Embed) -> Self {
        embed.to_json()
    }
}

impl From<Embed> for EmbedData {
    fn from(embed: Embed) -> Self {
        embed.to_json()
    }
}

/// Builds an embed from a wire value, running every part through the
/// setters. Fields without an `inline` flag are taken as not inline.
impl TryFrom<EmbedData> for Embed {
    type Error = ValidationError;

    fn try_from(data: EmbedData) -> Result<Self, Self::Error> {
        let mut embed = Self::new();

        if let Some(title) = data.title {
            embed.set_title(title)?;
        }
        if let Some(description) = data.description {
            embed.set_description(description)?;
        }
        if let Some(url) = data.url {
            embed.set_url(url)?;
        }
        if let Some(timestamp) = data.timestamp {
            embed.set_timestamp_str(&timestamp)?;
        }
        if let Some(color) = data.color {
            embed.set_color(color)?;
        }
        if let Some(footer) = data.footer {
            embed.set_footer(footer.icon_url.as_deref(), footer.text)?;
        }
        if let Some(image) = data.image {
            embed.set_image(image.url)?;
        }
        if let Some(thumbnail) = data.thumbnail {
            embed.set_thumbnail(thumbnail.url)?;
        }
        if let Some(author) = data.author {
            if char_len(&author.name) > limits::AUTHOR_NAME {
                return Err(ValidationError::AuthorNameTooLong);
            }
            embed.author = Some(author);
        }
        for field in data.fields {
            embed.add_field(field.name, field.value, field.inline.unwrap_or(false))?;
        }

        Ok(embed)
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let trimmed = value.trim();

    DateTime::parse_from_rfc3339(trimmed)
        .or_else(|_| DateTime::parse_from_rfc2822(trimmed))
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc())
        })
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f").map(|n| n.and_utc())
        })
        .or_else(|_| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        })
        .map_err(|_| ValidationError::InvalidTimestamp(value.to_string()))
}
