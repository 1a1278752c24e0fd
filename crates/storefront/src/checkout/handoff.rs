//! Messaging hand-off links.
//!
//! A hand-off opens the messaging app on a chat with the restaurant, with the
//! order summary pre-filled:
//!
//! ```text
//! https://wa.me/992000000000?text=Order%20from%20TezTayor%0A%0A...
//! ```

use thiserror::Error;
use url::Url;

use crate::config::MessagingConfig;

/// Errors from building or opening a hand-off link.
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("Invalid hand-off URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to open hand-off URL: {0}")]
    Launch(String),
}

/// Builds hand-off links to one fixed destination.
#[derive(Debug, Clone, Copy)]
pub struct HandoffTarget<'a> {
    domain: &'a str,
    destination: &'a str,
}

impl<'a> HandoffTarget<'a> {
    #[must_use]
    pub const fn new(domain: &'a str, destination: &'a str) -> Self {
        Self {
            domain,
            destination,
        }
    }

    #[must_use]
    pub fn from_config(config: &'a MessagingConfig) -> Self {
        Self::new(&config.domain, &config.destination)
    }

    /// Link that opens a chat with `text` pre-filled.
    ///
    /// The text is percent-encoded the way browsers encode URI components:
    /// everything except ASCII alphanumerics and `-_.~` is escaped, so spaces
    /// become `%20` and newlines `%0A`.
    ///
    /// # Errors
    ///
    /// Returns `HandoffError::InvalidUrl` if the configured domain does not
    /// form a valid URL.
    pub fn url(&self, text: &str) -> Result<Url, HandoffError> {
        let link = format!(
            "https://{}/{}?text={}",
            self.domain,
            self.destination,
            urlencoding::encode(text)
        );
        Ok(Url::parse(&link)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_url_shape() {
        let url = HandoffTarget::new("wa.me", "992000000000")
            .url("Hi there")
            .unwrap();
        assert_eq!(url.as_str(), "https://wa.me/992000000000?text=Hi%20there");
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/992000000000");
    }

    #[test]
    fn test_text_roundtrips_through_query() {
        let text = "Order from TezTayor\n\nName: Ann\nAddress: —\nTotal: 500 сомони & co?";
        let url = HandoffTarget::new("wa.me", "992000000000").url(text).unwrap();

        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(value, text);
        assert!(url.as_str().contains("%0A%0A"));
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_from_config() {
        let config = MessagingConfig::default();
        let url = HandoffTarget::from_config(&config).url("x").unwrap();
        assert_eq!(url.as_str(), "https://wa.me/992000000000?text=x");
    }

    #[test]
    fn test_invalid_domain() {
        let result = HandoffTarget::new("bad host", "1").url("x");
        assert!(matches!(result, Err(HandoffError::InvalidUrl(_))));
    }
}
