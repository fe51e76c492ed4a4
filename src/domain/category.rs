use std::fmt;

/// Name of a remote story list, e.g. `topstories`.
///
/// The name is interpolated into the list URL, so only ASCII alphanumerics,
/// `_` and `-` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedCategory(String);

impl FeedCategory {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
