mod author;
mod color;
mod field;
mod footer;
mod media;

use serde::{Deserialize, Serialize};

pub use author::Author;
pub use color::Color;
pub use field::Field;
pub use footer::Footer;
pub use media::Media;

/// The wire shape of a single embed, as expected by the message-send API.
///
/// Every field is optional and unset fields are omitted from the serialized
/// form, so the empty record serializes to `{}`. No field is validated; the
/// API boundary that consumes the record is responsible for rejecting values
/// it does not accept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// ISO-8601 date-time; normalized on write by the builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// Insertion order is significant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,
}
