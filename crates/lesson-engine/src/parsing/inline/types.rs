use serde::Serialize;

/// A run of text that is either plain or emphasized.
///
/// Spans own their text with the emphasis delimiters already removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "text", rename_all = "lowercase")]
pub enum EmphasisSpan {
    Plain(String),
    Emphasized(String),
}

impl EmphasisSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self::Emphasized(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Plain(t) | Self::Emphasized(t) => t,
        }
    }

    pub fn is_emphasized(&self) -> bool {
        matches!(self, Self::Emphasized(_))
    }
}

/// Concatenates span texts, ignoring emphasis.
pub fn plain_text(spans: &[EmphasisSpan]) -> String {
    spans.iter().map(EmphasisSpan::text).collect()
}
