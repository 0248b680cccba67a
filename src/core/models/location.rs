//! Location of a document in the remote content store

use serde::{Deserialize, Serialize};

/// Repository coordinates of a document: `owner/repo/path@ref`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLocation {
    /// Organization or user owning the repository
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Path inside the repository
    pub path: String,

    /// Branch, tag or commit
    #[serde(rename = "ref")]
    pub reference: String,
}

impl ContentLocation {
    /// Create a location
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            path: path.into(),
            reference: reference.into(),
        }
    }

    /// Same location with `{sig}` in the path replaced by a group name
    #[must_use]
    pub fn for_group(&self, group: &str) -> Self {
        Self {
            path: self.path.replace("{sig}", group),
            ..self.clone()
        }
    }
}

impl std::fmt::Display for ContentLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}@{}", self.owner, self.repo, self.path, self.reference)
    }
}
