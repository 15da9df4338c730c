use serde::{Deserialize, Serialize};

/// An image or thumbnail attachment; both share the same wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
}

impl Media {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl From<&str> for Media {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for Media {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}
