use std::fmt;

/// RepositorySlug value object for an `owner/repo` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySlug {
    owner: String,
    repository: String,
}

impl RepositorySlug {
    /// Parses an `owner/repo` value.
    ///
    /// Returns `None` for empty input, a missing separator, an empty side or
    /// more than one separator.
    pub fn parse(value: &str) -> Option<Self> {
        let (owner, repository) = value.trim().split_once('/')?;
        if owner.is_empty() || repository.is_empty() || repository.contains('/') {
            return None;
        }

        Some(Self {
            owner: owner.to_string(),
            repository: repository.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repository)
    }
}
