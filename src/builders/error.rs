//! Error type for builder validation.

use thiserror::Error;

/// A builder setter rejected its input.
///
/// Returned synchronously; the builder is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title should not exceed 256 characters")]
    TitleTooLong,

    #[error("Description should not exceed 4096 characters")]
    DescriptionTooLong,

    /// Color supplied as something other than a string or number.
    #[error("Invalid color type, Expected string / number instead received {received}")]
    InvalidColorType {
        /// JSON type name of the rejected value
        received: &'static str,
    },

    /// Numeric color outside `0..=0xFFFFFF`.
    #[error("Invalid color")]
    ColorOutOfRange(i64),

    /// String color that is not six hex digits.
    #[error("Invalid HexCode!")]
    InvalidHexCode(String),

    #[error("Not a valid URL")]
    InvalidUrl(String),

    #[error("Invalid Timestamp date.")]
    InvalidTimestamp(String),

    #[error("Embed footer text should not be more than 2048 characters")]
    FooterTooLong,

    #[error("Author name should not exceed 256 characters")]
    AuthorNameTooLong,

    #[error("Embeds cannot exceed 25 fields")]
    TooManyFields,

    #[error("Embed field name cannot exceed 256 characters")]
    FieldNameTooLong,

    #[error("Embed field value cannot exceed 1024 characters")]
    FieldValueTooLong,

    /// Field given without an explicit `inline` flag.
    #[error("Embed field inline should be of type boolean")]
    MissingFieldInline,
}
