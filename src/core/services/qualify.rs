//! Event qualification
//!
//! Decides which events enter the resolution pipeline and which label drives
//! it. When several labels qualify, they are taken in lexicographic order so
//! the choice does not depend on how the platform ordered them.

use crate::core::models::{
    IssueCommentAction, IssueCommentEvent, PullRequestAction, PullRequestEvent,
};
use crate::core::policy::Policy;

/// Labels carrying the group prefix, sorted and deduplicated
#[must_use]
pub fn qualifying_labels<'a, S: AsRef<str>>(policy: &Policy, labels: &'a [S]) -> Vec<&'a str> {
    let mut qualifying: Vec<&str> = labels
        .iter()
        .map(|l| l.as_ref())
        .filter(|l| l.starts_with(policy.label_prefix.as_str()))
        .collect();
    qualifying.sort_unstable();
    qualifying.dedup();
    qualifying
}

/// The label a pull request event is resolved with, if it qualifies
///
/// Only label updates qualify. Of the qualifying labels, the first one wins
/// whether or not the registry knows it.
#[must_use]
pub fn pull_request_label<'a>(policy: &Policy, event: &'a PullRequestEvent) -> Option<&'a str> {
    if event.action != PullRequestAction::UpdateLabel {
        return None;
    }
    qualifying_labels(policy, &event.labels).into_iter().next()
}

/// A directive found in an issue comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    /// Text after the directive marker (may be empty)
    pub target: &'a str,
}

/// The directive of an issue comment event, if the event qualifies
///
/// Only newly created comments on issues (not pull requests) whose body
/// matches the directive pattern qualify.
#[must_use]
pub fn issue_directive<'a>(policy: &Policy, event: &'a IssueCommentEvent) -> Option<Directive<'a>> {
    if event.action != IssueCommentAction::Comment || event.is_pull_request {
        return None;
    }

    let captures = policy.directive.captures(&event.body)?;
    let target = captures.get(1).map_or("", |m| m.as_str());
    Some(Directive { target })
}
