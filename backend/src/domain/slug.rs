//! Design slugs: extraction from Cults3D URLs and validation of path input.
//!
//! A valid slug is one or more ASCII alphanumeric runs joined by single
//! hyphens (`p6-front-handle`). Validation happens before any remote call so
//! path input never reaches the GraphQL variables unless it matches.

use std::fmt;

/// Return the final `/`-separated segment of `url`.
///
/// A URL ending in `/` yields an empty string. Query strings and fragments
/// are not stripped; they stay part of the last segment.
///
/// # Examples
/// ```
/// use storefront::domain::slug_from_url;
///
/// assert_eq!(slug_from_url("https://x/en/3d-model/p6-handle"), "p6-handle");
/// assert_eq!(slug_from_url("https://x/en/3d-model/"), "");
/// ```
#[must_use]
pub fn slug_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or_default()
}

/// Reasons a raw path segment is not a usable slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    /// Nothing left after decoding and trimming.
    #[error("Invalid slug.")]
    Empty,
    /// Percent-decoding produced invalid UTF-8.
    #[error("Invalid slug: {raw}")]
    InvalidEncoding {
        /// Input as received.
        raw: String,
    },
    /// Decoded value does not match the hyphenated alphanumeric pattern.
    #[error("Invalid slug: {value}")]
    Malformed {
        /// Decoded, trimmed value.
        value: String,
    },
}

/// Validated Cults3D design slug.
///
/// # Examples
/// ```
/// use storefront::domain::Slug;
///
/// let slug = Slug::parse("p6%2Dhandle").expect("decodes to a valid slug");
/// assert_eq!(slug.as_str(), "p6-handle");
/// assert!(Slug::parse("foo/bar").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Percent-decode, trim, and validate a raw path segment.
    ///
    /// # Errors
    ///
    /// Returns [`SlugError`] when the decoded value is empty, not UTF-8, or
    /// does not match the slug pattern.
    pub fn parse(raw: &str) -> Result<Self, SlugError> {
        let decoded = urlencoding::decode(raw).map_err(|_| SlugError::InvalidEncoding {
            raw: raw.to_owned(),
        })?;
        let trimmed = decoded.trim();
        if trimmed.is_empty() {
            return Err(SlugError::Empty);
        }
        if !is_hyphenated_alphanumeric(trimmed) {
            return Err(SlugError::Malformed {
                value: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

fn is_hyphenated_alphanumeric(value: &str) -> bool {
    value
        .split('-')
        .all(|run| !run.is_empty() && run.chars().all(|ch| ch.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for slug extraction and validation.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://x/en/3d-model/p6-handle", "p6-handle")]
    #[case(
        "https://cults3d.com/en/3d-model/gadget/inmotion-p6-front-handle-3d-print-friendly",
        "inmotion-p6-front-handle-3d-print-friendly"
    )]
    #[case("https://x/en/3d-model/", "")]
    #[case("", "")]
    #[case("no-slashes", "no-slashes")]
    #[case("https://x/en/3d-model/p6?ref=home", "p6?ref=home")]
    fn extracts_last_segment(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(slug_from_url(url), expected);
    }

    #[rstest]
    #[case("p6-front-handle", "p6-front-handle")]
    #[case("p6%2Dhandle", "p6-handle")]
    #[case("  P6-Handle  ", "P6-Handle")]
    #[case("%20p6%20", "p6")]
    #[case("handle", "handle")]
    fn accepts_valid_slugs(#[case] raw: &str, #[case] expected: &str) {
        let slug = Slug::parse(raw).expect("slug should validate");
        assert_eq!(slug.as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("%20")]
    fn rejects_empty_input(#[case] raw: &str) {
        assert_eq!(Slug::parse(raw), Err(SlugError::Empty));
    }

    #[rstest]
    #[case("foo/bar")]
    #[case("foo%2Fbar")]
    #[case("foo?x=y")]
    #[case("-leading")]
    #[case("trailing-")]
    #[case("double--hyphen")]
    #[case("under_score")]
    #[case("caf%C3%A9")]
    #[case("%zz")]
    fn rejects_malformed_input(#[case] raw: &str) {
        assert!(matches!(
            Slug::parse(raw),
            Err(SlugError::Malformed { .. })
        ));
    }

    #[rstest]
    fn rejects_invalid_utf8_escapes() {
        assert!(matches!(
            Slug::parse("%FF%FE"),
            Err(SlugError::InvalidEncoding { .. })
        ));
    }

    #[rstest]
    fn error_message_carries_decoded_value() {
        let err = Slug::parse("foo%2Fbar").expect_err("slash is rejected");
        assert_eq!(err.to_string(), "Invalid slug: foo/bar");
    }
}
