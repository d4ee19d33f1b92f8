//! Step reference tokens.
//!
//! Templates refer to steps as `id` or `id@version`. Only the first `@` is a
//! separator; anything after it, further `@` included, is the version.

use std::fmt;

/// A parsed step reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepReference {
    /// Step identifier.
    pub id: String,
    /// Requested version. `None` means the registry's latest.
    pub version: Option<String>,
}

impl StepReference {
    /// Parse a raw reference token.
    ///
    /// No trimming or case folding is applied.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('@') {
            Some((id, version)) => Self {
                id: id.to_string(),
                version: Some(version.to_string()),
            },
            None => Self {
                id: raw.to_string(),
                version: None,
            },
        }
    }

    /// Whether the reference pins an explicit version.
    pub fn is_pinned(&self) -> bool {
        self.version.is_some()
    }
}

impl fmt::Display for StepReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}@{}", self.id, v),
            None => write!(f, "{}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_id_has_no_version() {
        for raw in ["script", "git-clone", "", " spaced ", "Deploy-To-Bitrise-IO"] {
            let r = StepReference::parse(raw);
            assert_eq!(r.id, raw);
            assert_eq!(r.version, None);
            assert!(!r.is_pinned());
        }
    }

    #[test]
    fn splits_id_and_version() {
        let r = StepReference::parse("script@1.2.3");
        assert_eq!(r.id, "script");
        assert_eq!(r.version.as_deref(), Some("1.2.3"));
        assert!(r.is_pinned());
    }

    #[test]
    fn only_first_at_separates() {
        let r = StepReference::parse("A@B@C");
        assert_eq!(r.id, "A");
        assert_eq!(r.version.as_deref(), Some("B@C"));
    }

    #[test]
    fn trailing_at_gives_empty_version() {
        let r = StepReference::parse("script@");
        assert_eq!(r.id, "script");
        assert_eq!(r.version.as_deref(), Some(""));
    }

    #[test]
    fn leading_at_gives_empty_id() {
        let r = StepReference::parse("@1.0");
        assert_eq!(r.id, "");
        assert_eq!(r.version.as_deref(), Some("1.0"));
    }

    #[test]
    fn no_normalization() {
        let r = StepReference::parse(" Script @ 1.0 ");
        assert_eq!(r.id, " Script ");
        assert_eq!(r.version.as_deref(), Some(" 1.0 "));
    }

    #[test]
    fn display_round_trips_token() {
        for raw in ["script", "script@1.0", "a@b@c"] {
            assert_eq!(StepReference::parse(raw).to_string(), raw);
        }
    }
}
