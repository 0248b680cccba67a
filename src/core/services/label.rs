//! Label resolver - maps an event label to its owning group
//!
//! A label should belong to at most one group. When the registry breaks that
//! rule the first group in document order wins, and the others are reported
//! back in [`LabelMatch::shadowed`] and logged.

use log::warn;

use crate::core::models::{Group, Registry};

/// The group a label resolved to
#[derive(Debug, Clone)]
pub struct LabelMatch<'a> {
    /// First group in document order declaring the label
    pub group: &'a Group,

    /// Later groups declaring the same label, ignored
    pub shadowed: Vec<&'a Group>,
}

impl LabelMatch<'_> {
    /// Whether more than one group declares the label
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        !self.shadowed.is_empty()
    }

    /// Names of the ignored groups
    #[must_use]
    pub fn shadowed_names(&self) -> Vec<String> {
        self.shadowed.iter().map(|g| g.name.clone()).collect()
    }
}

/// Find the group declaring `label`
///
/// Matching is exact string equality. Returns `None` when no group declares
/// the label, which is not an error.
#[must_use]
pub fn resolve_label<'a>(registry: &'a Registry, label: &str) -> Option<LabelMatch<'a>> {
    if label.is_empty() {
        return None;
    }

    let mut matches = registry.groups.iter().filter(|g| g.label == label);
    let group = matches.next()?;
    let shadowed: Vec<&Group> = matches.collect();

    if !shadowed.is_empty() {
        let names: Vec<&str> = shadowed.iter().map(|g| g.name.as_str()).collect();
        warn!(
            "Label {label:?} is declared by {} groups; using {:?}, ignoring {names:?}",
            shadowed.len() + 1,
            group.name
        );
    }

    Some(LabelMatch { group, shadowed })
}
