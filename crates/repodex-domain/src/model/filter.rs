//! RepositoryFilter - Which records a listing returns

use super::repository::Repository;

/// Selection criteria for listing repositories
///
/// An empty filter matches everything. When both criteria are set a
/// record has to satisfy both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryFilter {
    /// Case-sensitive substring of the title
    title: Option<String>,
    /// Exact tag that must appear in `techs`
    tech: Option<String>,
}

impl RepositoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: require the title to contain `title`
    ///
    /// An empty string leaves the criterion unset.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into()).filter(|t| !t.is_empty());
        self
    }

    /// Builder: require `tech` to be one of the tags
    ///
    /// An empty string leaves the criterion unset.
    pub fn with_tech(mut self, tech: impl Into<String>) -> Self {
        self.tech = Some(tech.into()).filter(|t| !t.is_empty());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn tech(&self) -> Option<&str> {
        self.tech.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.tech.is_none()
    }

    pub fn matches(&self, repository: &Repository) -> bool {
        let title_ok = match &self.title {
            Some(needle) => repository
                .title()
                .is_some_and(|title| title.contains(needle.as_str())),
            None => true,
        };
        let tech_ok = match &self.tech {
            Some(tech) => repository.has_tech(tech),
            None => true,
        };
        title_ok && tech_ok
    }
}
