//! Owner matcher service - matches changed files and repositories to owners
//!
//! This module contains pure matching logic with no I/O dependencies.
//! Paths and repository names are compared exactly; there is no globbing.

use crate::core::models::{ContactSet, Group};

/// Owners of the changed files within one group
///
/// For every changed file, every file rule listing that exact path adds its
/// owners. The result is deduplicated by handle.
///
/// # Arguments
///
/// * `group` - The group the event label resolved to
/// * `files` - Repository-relative paths changed by the pull request
#[must_use]
pub fn owners_for_files<S: AsRef<str>>(group: &Group, files: &[S]) -> ContactSet {
    let mut owners = ContactSet::new();

    for file in files {
        let file = file.as_ref();
        for rule in group.files.iter().filter(|r| r.paths.contains(file)) {
            owners.extend(rule.owners.iter().cloned());
        }
    }

    owners
}

/// Owners of a repository across several groups
///
/// Every repo rule (of every given group) listing `repo` adds its owners.
/// The result is deduplicated by handle.
#[must_use]
pub fn owners_for_repo<'a>(groups: impl IntoIterator<Item = &'a Group>, repo: &str) -> ContactSet {
    let mut owners = ContactSet::new();

    for group in groups {
        for rule in group.repos.iter().filter(|r| r.repos.contains(repo)) {
            owners.extend(rule.owners.iter().cloned());
        }
    }

    owners
}
