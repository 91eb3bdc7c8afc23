//! Repository - A project entry in the collection
//!
//! A Repository is an Entity: its id is assigned once at creation and
//! survives every update. Everything else about it may be replaced.

/// Unique identifier for a Repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId(String);

impl RepositoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Repository - One record of the collection
///
/// Fields other than `id` are optional because an update replaces the
/// record with whatever the caller sent, including nothing at all.
/// A freshly created record always has `techs` and `likes`.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    /// Unique identifier (Entity identity)
    id: RepositoryId,
    /// Display title
    title: Option<String>,
    /// Project location, `http://` or `https://`
    url: Option<String>,
    /// Technology tags, in the order they were given
    techs: Option<Vec<String>>,
    /// Like counter
    ///
    /// A plain number: an update may store any negative value it was sent,
    /// fractions included.
    likes: Option<f64>,
}

impl Repository {
    /// Create a new Repository with no likes
    ///
    /// Missing `techs` default to an empty list.
    pub fn new(
        id: RepositoryId,
        title: Option<String>,
        url: Option<String>,
        techs: Option<Vec<String>>,
    ) -> Self {
        Self {
            id,
            title,
            url,
            techs: Some(techs.unwrap_or_default()),
            likes: Some(0.0),
        }
    }

    /// Build the record that replaces an existing one on update
    ///
    /// Nothing is defaulted: absent fields stay absent.
    pub fn replacement(
        id: RepositoryId,
        title: Option<String>,
        url: Option<String>,
        techs: Option<Vec<String>>,
        likes: Option<f64>,
    ) -> Self {
        Self {
            id,
            title,
            url,
            techs,
            likes,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> &RepositoryId {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn techs(&self) -> Option<&[String]> {
        self.techs.as_deref()
    }

    pub fn likes(&self) -> Option<f64> {
        self.likes
    }

    /// Check whether this repository is tagged with exactly `tech`
    pub fn has_tech(&self, tech: &str) -> bool {
        self.techs
            .as_ref()
            .is_some_and(|techs| techs.iter().any(|t| t == tech))
    }

    // ========== Mutations ==========

    /// Add one like and return the new count
    ///
    /// A record whose likes were cleared by an update starts again from zero.
    pub fn like(&mut self) -> f64 {
        let likes = self.likes.unwrap_or(0.0) + 1.0;
        self.likes = Some(likes);
        likes
    }
}
