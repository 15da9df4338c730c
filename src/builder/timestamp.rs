use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// The literal token that resolves to the current instant when set.
pub const NOW: &str = "now";

/// A timestamp accepted by
/// [`EmbedBuilder::set_timestamp`](crate::EmbedBuilder::set_timestamp).
///
/// Whatever the source, the stored record value is always an ISO-8601
/// string with millisecond precision and a `Z` suffix.
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampValue {
    /// Resolves to the current instant at set time.
    Now,
    /// An already-formatted string, stored as-is.
    Iso(String),
    /// A date-time, converted to its ISO-8601 form.
    Date(DateTime<Utc>),
}

impl TimestampValue {
    pub(crate) fn into_iso(self) -> String {
        match self {
            Self::Now => format_iso(Utc::now()),
            Self::Date(date) => format_iso(date),
            Self::Iso(raw) => raw,
        }
    }
}

fn format_iso(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<&str> for TimestampValue {
    fn from(value: &str) -> Self {
        if value == NOW {
            Self::Now
        } else {
            Self::Iso(value.to_owned())
        }
    }
}

impl From<String> for TimestampValue {
    fn from(value: String) -> Self {
        if value == NOW { Self::Now } else { Self::Iso(value) }
    }
}

impl From<DateTime<Utc>> for TimestampValue {
    fn from(date: DateTime<Utc>) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime<FixedOffset>> for TimestampValue {
    fn from(date: DateTime<FixedOffset>) -> Self {
        Self::Date(date.with_timezone(&Utc))
    }
}
