use serde::{Deserialize, Serialize};

/// The footer block rendered below the embed body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "iconURL")]
    pub icon_url: Option<String>,
}

impl Footer {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon_url: None,
        }
    }

    #[must_use]
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }
}

impl From<&str> for Footer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Footer {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
