use std::fmt;
use url::Url;

/// Minimum length (in characters) of short profile and card texts
pub const SHORT_TEXT_MIN: usize = 2;

/// Maximum length (in characters) of short profile and card texts
pub const SHORT_TEXT_MAX: usize = 30;

/// Short free-form text such as a user name, a user's "about" line or a card title
///
/// # Invariants
/// - Surrounding whitespace is trimmed
/// - Between 2 and 30 characters long
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortText(String);

impl ShortText {
    /// Creates a new ShortText for the named request field
    ///
    /// The field name only appears in the error message.
    ///
    /// # Example
    /// ```
    /// use around_api::domain::value_objects::ShortText;
    ///
    /// let name = ShortText::new("name", "  Jacques Cousteau ").expect("valid name");
    /// assert_eq!(name.as_str(), "Jacques Cousteau");
    /// ```
    pub fn new(field: &str, value: impl AsRef<str>) -> Result<Self, String> {
        let value = value.as_ref().trim();
        let length = value.chars().count();

        if length == 0 {
            return Err(format!("\"{field}\" is not allowed to be empty"));
        }
        if length < SHORT_TEXT_MIN {
            return Err(format!(
                "\"{field}\" length must be at least {SHORT_TEXT_MIN} characters long"
            ));
        }
        if length > SHORT_TEXT_MAX {
            return Err(format!(
                "\"{field}\" length must be less than or equal to {SHORT_TEXT_MAX} characters long"
            ));
        }

        Ok(ShortText(value.to_string()))
    }

    /// Returns the text as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value object, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShortText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Absolute web link (avatar pictures, card images)
///
/// # Invariants
/// - Parses as an absolute URL
/// - Scheme is `http` or `https`
/// - Has a host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebUrl(String);

impl WebUrl {
    /// Creates a new WebUrl for the named request field
    ///
    /// # Example
    /// ```
    /// use around_api::domain::value_objects::WebUrl;
    ///
    /// assert!(WebUrl::new("link", "https://example.com/yosemite.jpg").is_ok());
    /// assert!(WebUrl::new("link", "ftp://example.com/yosemite.jpg").is_err());
    /// ```
    pub fn new(field: &str, value: impl AsRef<str>) -> Result<Self, String> {
        let value = value.as_ref().trim();
        let invalid = || format!("\"{field}\" must be a valid uri");

        let parsed = Url::parse(value).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }

        Ok(WebUrl(value.to_string()))
    }

    /// Returns the link as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value object, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WebUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_trims_whitespace() {
        let text = ShortText::new("name", "  Explorer  ").unwrap();
        assert_eq!(text.as_str(), "Explorer");
    }

    #[test]
    fn short_text_minimum_length() {
        assert!(ShortText::new("name", "ab").is_ok());
        let err = ShortText::new("name", "a").unwrap_err();
        assert_eq!(err, "\"name\" length must be at least 2 characters long");
    }

    #[test]
    fn short_text_maximum_length() {
        assert!(ShortText::new("about", "a".repeat(30)).is_ok());
        let err = ShortText::new("about", "a".repeat(31)).unwrap_err();
        assert_eq!(
            err,
            "\"about\" length must be less than or equal to 30 characters long"
        );
    }

    #[test]
    fn short_text_counts_characters_not_bytes() {
        // 15 two-byte characters
        assert!(ShortText::new("name", "é".repeat(15)).is_ok());
    }

    #[test]
    fn short_text_empty() {
        let err = ShortText::new("name", "   ").unwrap_err();
        assert_eq!(err, "\"name\" is not allowed to be empty");
    }

    #[test]
    fn web_url_accepts_http_and_https() {
        assert!(WebUrl::new("avatar", "http://example.com/a.png").is_ok());
        assert!(WebUrl::new("avatar", "https://example.com/a.png").is_ok());
    }

    #[test]
    fn web_url_rejects_other_schemes() {
        assert!(WebUrl::new("link", "javascript:alert(1)").is_err());
        assert!(WebUrl::new("link", "mailto:someone@example.com").is_err());
    }

    #[test]
    fn web_url_rejects_relative() {
        let err = WebUrl::new("link", "/images/a.png").unwrap_err();
        assert_eq!(err, "\"link\" must be a valid uri");
    }
}
