//! Link classification utilities.

/// Check whether a link carries a URL scheme (`https:`, `mailto:`, `tel:`, ...).
///
/// The scheme must be non-empty and consist of ASCII alphanumerics,
/// `+`, `-` or `.`, which keeps `/path:with-colon` internal.
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Syntactic classification of an item's `link` override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// Link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/about, /services/seo).
    SiteRoot(&'a str),
    /// Anything else, passed through as written.
    Relative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::Relative(link)
        }
    }

    /// Whether the link leaves the site.
    #[inline]
    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external() {
        assert!(matches!(
            LinkKind::parse("https://example.com"),
            LinkKind::External("https://example.com")
        ));
        assert!(matches!(
            LinkKind::parse("mailto:hello@example.com"),
            LinkKind::External("mailto:hello@example.com")
        ));
        assert!(LinkKind::parse("tel:+15551234567").is_external());
    }

    #[test]
    fn test_parse_internal() {
        assert!(matches!(
            LinkKind::parse("/contact"),
            LinkKind::SiteRoot("/contact")
        ));
        assert!(matches!(LinkKind::parse("#team"), LinkKind::Fragment("team")));
        assert!(matches!(
            LinkKind::parse("pricing"),
            LinkKind::Relative("pricing")
        ));
        assert!(!LinkKind::parse("/odd:path").is_external());
    }

    #[test]
    fn test_empty_scheme_is_not_external() {
        assert!(!is_external_link(":nothing"));
        assert!(!is_external_link("no-colon"));
    }
}
