//! Ownership registry model
//!
//! Mirrors the human-edited YAML document:
//!
//! ```yaml
//! sigs:
//!   - name: storage
//!     sig_label: sig/storage
//!     sig_link: https://example.com/sigs/storage
//!     files:
//!       - file: [src/storage/engine.go]
//!         owner: [{ gitee_id: alice }]
//!     repos:
//!       - repo: [storage-docs]
//!         owner: [{ gitee_id: bob }]
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Contact;

/// The whole registry document, groups in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    /// Groups (SIGs) in the order they appear in the document
    #[serde(default, rename = "sigs")]
    pub groups: Vec<Group>,
}

impl Registry {
    /// All contacts referenced anywhere in the registry, with their group
    pub fn contacts(&self) -> impl Iterator<Item = (&Group, &Contact)> {
        self.groups.iter().flat_map(|group| {
            let from_files = group.files.iter().flat_map(|r| r.owners.iter());
            let from_repos = group.repos.iter().flat_map(|r| r.owners.iter());
            from_files.chain(from_repos).map(move |c| (group, c))
        })
    }
}

/// An organizational unit (SIG) owning files and repositories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group name, also used to address its OWNERS document
    #[serde(default)]
    pub name: String,

    /// Label that routes issues and pull requests to this group
    #[serde(default, rename = "sig_label")]
    pub label: String,

    /// Homepage of the group
    #[serde(default, rename = "sig_link")]
    pub link: String,

    /// File ownership rules
    #[serde(default)]
    pub files: Vec<FileRule>,

    /// Repository ownership rules
    #[serde(default)]
    pub repos: Vec<RepoRule>,
}

impl Group {
    /// Bracket link to this group for the reply
    #[must_use]
    pub fn group_link(&self) -> GroupLink {
        GroupLink {
            name: self.name.clone(),
            url: self.link.clone(),
        }
    }
}

/// Owners of a set of file paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRule {
    /// Exact repository-relative paths
    #[serde(default, rename = "file")]
    pub paths: BTreeSet<String>,

    /// Contacts owning these paths
    #[serde(default, rename = "owner")]
    pub owners: Vec<Contact>,
}

/// Owners of a set of repositories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRule {
    /// Repository names (without the organization)
    #[serde(default, rename = "repo")]
    pub repos: BTreeSet<String>,

    /// Contacts owning these repositories
    #[serde(default, rename = "owner")]
    pub owners: Vec<Contact>,
}

/// Display name and URL of a group, rendered as `[name](url)`
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GroupLink {
    /// Group name
    pub name: String,
    /// Group homepage
    pub url: String,
}

/// Per-group OWNERS document listing the escalation contacts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnersFile {
    /// Maintainer handles
    #[serde(default)]
    pub maintainers: Vec<String>,

    /// Committer handles
    #[serde(default)]
    pub committers: Vec<String>,
}
