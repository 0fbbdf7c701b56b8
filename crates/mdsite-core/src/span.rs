//! Inline text spans
//!
//! A [`TextSpan`] is the unit produced by inline tokenization: a run of text
//! with a single formatting kind and, for links and images, a target URL.

/// The formatting kind of an inline span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// Plain text, rendered verbatim
    Plain,
    /// Bold text (`**bold**`)
    Bold,
    /// Italic text (`_italic_`)
    Italic,
    /// Inline code (`` `code` ``)
    Code,
    /// Link (`[text](url)`)
    Link,
    /// Image (`![alt](url)`), the span text is the alt text
    Image,
}

impl TextKind {
    /// Whether spans of this kind carry a URL
    pub fn has_url(self) -> bool {
        matches!(self, TextKind::Link | TextKind::Image)
    }
}

/// Error raised when a span would break the url/kind invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    #[error("{0:?} span requires a url")]
    MissingUrl(TextKind),

    #[error("{0:?} span cannot carry a url")]
    UnexpectedUrl(TextKind),
}

/// An inline run of text with a single kind.
///
/// `url` is present exactly when `kind` is [`TextKind::Link`] or
/// [`TextKind::Image`]. The fields are private so the invariant holds for
/// every value in circulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    text: String,
    kind: TextKind,
    url: Option<String>,
}

impl TextSpan {
    /// Create a span, checking the url/kind invariant
    pub fn new(
        text: impl Into<String>,
        kind: TextKind,
        url: Option<String>,
    ) -> Result<Self, SpanError> {
        match (kind.has_url(), url.is_some()) {
            (true, false) => Err(SpanError::MissingUrl(kind)),
            (false, true) => Err(SpanError::UnexpectedUrl(kind)),
            _ => Ok(Self {
                text: text.into(),
                kind,
                url,
            }),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, TextKind::Plain)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(text, TextKind::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::styled(text, TextKind::Italic)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::styled(text, TextKind::Code)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TextKind::Link,
            url: Some(url.into()),
        }
    }

    /// Create an image span; `alt` becomes the span text
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: TextKind::Image,
            url: Some(url.into()),
        }
    }

    // Only reachable for kinds without a url.
    fn styled(text: impl Into<String>, kind: TextKind) -> Self {
        debug_assert!(!kind.has_url());
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TextKind {
        self.kind
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Check if this span is plain text
    pub fn is_plain(&self) -> bool {
        self.kind == TextKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_requires_url() {
        let result = TextSpan::new("Example", TextKind::Link, None);
        assert_eq!(result, Err(SpanError::MissingUrl(TextKind::Link)));
    }

    #[test]
    fn test_image_requires_url() {
        let result = TextSpan::new("alt", TextKind::Image, None);
        assert_eq!(result, Err(SpanError::MissingUrl(TextKind::Image)));
    }

    #[test]
    fn test_plain_rejects_url() {
        let result = TextSpan::new("text", TextKind::Plain, Some("https://example.com".into()));
        assert_eq!(result, Err(SpanError::UnexpectedUrl(TextKind::Plain)));
    }

    #[test]
    fn test_checked_matches_shorthand() {
        let checked =
            TextSpan::new("Google", TextKind::Link, Some("https://google.com".into())).unwrap();
        assert_eq!(checked, TextSpan::link("Google", "https://google.com"));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(TextSpan::bold("x"), TextSpan::bold("x"));
        assert_ne!(TextSpan::bold("x"), TextSpan::italic("x"));
        assert_ne!(
            TextSpan::link("x", "https://a.example"),
            TextSpan::link("x", "https://b.example")
        );
    }

    #[test]
    fn test_accessors() {
        let span = TextSpan::image("Alt text", "https://img.com/img.png");
        assert_eq!(span.text(), "Alt text");
        assert_eq!(span.kind(), TextKind::Image);
        assert_eq!(span.url(), Some("https://img.com/img.png"));
        assert!(!span.is_plain());
        assert!(TextSpan::plain("").is_plain());
    }
}
