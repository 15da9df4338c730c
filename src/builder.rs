mod description;
mod timestamp;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    embed::{Author, Embed, Field, Footer, Media},
    json_util,
    naming::{self, FieldNaming},
};

pub use description::DescriptionPart;
pub use timestamp::{NOW, TimestampValue};

/// Name and value of the spacer field appended by
/// [`EmbedBuilder::add_blank_field`]; a zero-width space renders as an
/// empty-looking field.
pub const BLANK: &str = "\u{200b}";

/// Chainable constructor for a single [`Embed`] record.
///
/// Every mutator takes the builder by value and returns it, so calls chain;
/// every accessor borrows and returns an `Option`-typed view. No input is
/// validated and no mutator can fail: malformed values pass through to the
/// serialized record unchanged, to be rejected (or not) by whatever consumes
/// it.
#[must_use = "a builder does nothing until read out, e.g. with into_record"]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedBuilder {
    record: Embed,
}

impl EmbedBuilder {
    /// Creates a builder over an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose internal record is the passed record.
    ///
    /// Ownership transfers to the builder, so the record cannot be mutated
    /// from outside afterwards.
    pub fn from_record(record: Embed) -> Self {
        Self { record }
    }

    /// Creates one builder per input record, preserving input order.
    pub fn from_records<I>(records: I) -> Vec<Self>
    where
        I: IntoIterator<Item = Embed>,
    {
        records.into_iter().map(Self::from_record).collect()
    }

    /// Creates a builder from the first input record, or `None` when the
    /// input is empty.
    pub fn from_records_first<I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = Embed>,
    {
        records.into_iter().next().map(Self::from_record)
    }

    /// Hydrates builders from previously-serialized JSON.
    ///
    /// The input may be a single embed object or an array of them; both
    /// `icon_url` and `iconURL` spellings are accepted.
    pub fn from_json(json: &str) -> Result<Vec<Self>> {
        let records: Vec<Embed> =
            json_util::parse_one_or_many(json).context("Could not parse embed JSON")?;
        log::debug!("hydrated {} embed record(s)", records.len());
        Ok(records.into_iter().map(Self::from_record).collect())
    }

    /// Sets the embed author, replacing any previous value.
    ///
    /// Pass a plain name, or an [`Author`] to include an icon or link:
    /// `set_author(Author::new("me").with_icon_url("https://…"))`.
    pub fn set_author(mut self, author: impl Into<Author>) -> Self {
        self.record.author = Some(author.into());
        self
    }

    pub fn author(&self) -> Option<&Author> {
        self.record.author.as_ref()
    }

    pub fn remove_author(mut self) -> Self {
        self.record.author = None;
        self
    }

    /// Sets the embed color; accepts the packed integer or a [`Color`].
    ///
    /// [`Color`]: crate::embed::Color
    pub fn set_color(mut self, color: impl Into<u32>) -> Self {
        self.record.color = Some(color.into());
        self
    }

    pub fn color(&self) -> Option<u32> {
        self.record.color
    }

    pub fn remove_color(mut self) -> Self {
        self.record.color = None;
        self
    }

    /// Sets the embed description from any mixture of lines and line blocks,
    /// joined with `\n` in argument order.
    ///
    /// `set_description(["a", "b"])` stores `"a\nb"`; see
    /// [`DescriptionPart`] for the accepted piece shapes.
    pub fn set_description<I, P>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<DescriptionPart>,
    {
        let text = parts
            .into_iter()
            .map(|part| part.into().into_text())
            .collect::<Vec<String>>()
            .join("\n");
        self.record.description = Some(text);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.record.description.as_deref()
    }

    pub fn remove_description(mut self) -> Self {
        self.record.description = None;
        self
    }

    /// Appends one field. The inline flag may be `true`, `false`, or `None`
    /// to leave it unset on the wire.
    pub fn add_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: impl Into<Option<bool>>,
    ) -> Self {
        let field = Field {
            name: name.into(),
            value: value.into(),
            inline: inline.into(),
        };
        self.record.fields.get_or_insert_default().push(field);
        self
    }

    /// Appends a spacer field ([`BLANK`] name and value).
    pub fn add_blank_field(self, inline: impl Into<Option<bool>>) -> Self {
        self.add_field(BLANK, BLANK, inline)
    }

    /// Appends each supplied field in order.
    pub fn add_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        for field in fields {
            self = self.add_field(field.name, field.value, field.inline);
        }
        self
    }

    /// Returns the field at `index`, or `None` when out of range.
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields().get(index)
    }

    /// Returns the current fields; empty when none have been added.
    pub fn fields(&self) -> &[Field] {
        self.record.fields.as_deref().unwrap_or_default()
    }

    /// Sets the embed footer, replacing any previous value.
    ///
    /// Pass the text, or a [`Footer`] to include an icon.
    pub fn set_footer(mut self, footer: impl Into<Footer>) -> Self {
        self.record.footer = Some(footer.into());
        self
    }

    pub fn footer(&self) -> Option<&Footer> {
        self.record.footer.as_ref()
    }

    pub fn remove_footer(mut self) -> Self {
        self.record.footer = None;
        self
    }

    /// Sets the embed image by URL.
    pub fn set_image(mut self, url: impl Into<String>) -> Self {
        self.record.image = Some(Media::new(url));
        self
    }

    pub fn image(&self) -> Option<&Media> {
        self.record.image.as_ref()
    }

    pub fn remove_image(mut self) -> Self {
        self.record.image = None;
        self
    }

    /// Sets the embed thumbnail by URL.
    pub fn set_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.record.thumbnail = Some(Media::new(url));
        self
    }

    pub fn thumbnail(&self) -> Option<&Media> {
        self.record.thumbnail.as_ref()
    }

    pub fn remove_thumbnail(mut self) -> Self {
        self.record.thumbnail = None;
        self
    }

    /// Sets the embed timestamp from an ISO-8601 string, the literal
    /// [`NOW`] token, or a `chrono` date-time. The stored value is always a
    /// string.
    pub fn set_timestamp(mut self, time: impl Into<TimestampValue>) -> Self {
        self.record.timestamp = Some(time.into().into_iso());
        self
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.record.timestamp.as_deref()
    }

    /// Returns the stored timestamp parsed back into a date-time, or `None`
    /// when no timestamp is set or the stored string does not parse.
    pub fn timestamp_date(&self) -> Option<DateTime<Utc>> {
        let raw = self.record.timestamp.as_deref()?;
        match DateTime::parse_from_rfc3339(raw) {
            Ok(date) => Some(date.with_timezone(&Utc)),
            Err(err) => {
                log::warn!("stored timestamp {raw:?} is not a valid ISO-8601 date-time: {err}");
                None
            }
        }
    }

    pub fn remove_timestamp(mut self) -> Self {
        self.record.timestamp = None;
        self
    }

    /// Sets the embed title, replacing any previous value.
    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.record.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.record.title.as_deref()
    }

    pub fn remove_title(mut self) -> Self {
        self.record.title = None;
        self
    }

    /// Sets the embed URL, replacing any previous value.
    pub fn set_url(mut self, url: impl Into<String>) -> Self {
        self.record.url = Some(url.into());
        self
    }

    pub fn url(&self) -> Option<&str> {
        self.record.url.as_deref()
    }

    pub fn remove_url(mut self) -> Self {
        self.record.url = None;
        self
    }

    /// Borrows the live record for inspection.
    pub fn record(&self) -> &Embed {
        &self.record
    }

    /// Moves the record out of the builder.
    #[must_use]
    pub fn into_record(self) -> Embed {
        self.record
    }

    /// Moves the record out wrapped in a one-element array, the shape a
    /// message-send request body expects.
    #[must_use]
    pub fn into_array(self) -> Vec<Embed> {
        vec![self.record]
    }

    /// Serializes the record as a JSON value under the chosen field-naming
    /// convention.
    pub fn to_value(&self, naming: FieldNaming) -> Result<Value> {
        let mut value =
            serde_json::to_value(&self.record).context("Could not serialize embed record")?;
        naming::apply(&mut value, naming);
        Ok(value)
    }

    /// Serializes the record to JSON text accepted back by
    /// [`from_json`](Self::from_json).
    pub fn to_json_string(&self, naming: FieldNaming) -> Result<String> {
        let value = self.to_value(naming)?;
        serde_json::to_string(&value).context("Could not render embed record as JSON text")
    }
}

impl From<Embed> for EmbedBuilder {
    fn from(record: Embed) -> Self {
        Self::from_record(record)
    }
}

impl From<EmbedBuilder> for Embed {
    fn from(builder: EmbedBuilder) -> Self {
        builder.into_record()
    }
}
