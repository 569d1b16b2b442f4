//! JSON envelope returned by a backend in answer to an `.ajaxform` submission.
//!
//! ```json
//! { "type": "success", "html": "<p>Saved</p>", "js": "closeEditor; refreshList" }
//! ```
//!
//! `js` carries a `;`-separated list of hook names registered on the page.

use serde::{Deserialize, Serialize};

/// Outcome reported by the backend.
///
/// The wire value is trimmed before matching; anything other than `success`
/// is treated as an error, which is how the original pages branched on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResponseKind {
    Success,
    Error,
}

impl ResponseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Success => "success",
            ResponseKind::Error => "error",
        }
    }
}

impl From<String> for ResponseKind {
    fn from(value: String) -> Self {
        if value.trim() == "success" {
            ResponseKind::Success
        } else {
            ResponseKind::Error
        }
    }
}

impl From<ResponseKind> for String {
    fn from(kind: ResponseKind) -> Self {
        kind.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEnvelope {
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js: Option<String>,
}

impl FormEnvelope {
    pub fn success() -> Self {
        Self {
            kind: ResponseKind::Success,
            html: None,
            js: None,
        }
    }

    pub fn error() -> Self {
        Self {
            kind: ResponseKind::Error,
            html: None,
            js: None,
        }
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn with_js(mut self, hooks: impl Into<String>) -> Self {
        self.js = Some(hooks.into());
        self
    }

    /// Parse a raw response body.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// HTML fragment the page should keep for this response, if any.
    ///
    /// A success response must carry non-blank html; an error response only
    /// needs a non-empty string.
    pub fn accepted_html(&self) -> Option<&str> {
        let html = self.html.as_deref()?;
        let present = match self.kind {
            ResponseKind::Success => !html.trim().is_empty(),
            ResponseKind::Error => !html.is_empty(),
        };
        present.then_some(html)
    }

    /// Hook list to run after the response was applied, if any.
    pub fn hooks(&self) -> Option<&str> {
        self.js.as_deref().filter(|js| !js.is_empty())
    }
}
