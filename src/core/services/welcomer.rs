//! Welcomer - the per-event resolution pipeline
//!
//! qualify → load registry → resolve label → match owners → escalate →
//! compose → post. Each call works on its own freshly loaded registry; the
//! welcomer itself only holds shared, read-only references and can serve
//! many events concurrently.

use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::core::models::{
    Contact, ContactSet, Escalation, Group, GroupLink, IssueCommentEvent, PullRequestEvent,
    Registry, ReplyKind, Tier,
};
use crate::core::policy::Policy;
use crate::core::ports::{CommentSink, ContentStore};

use super::composer::compose;
use super::label::resolve_label;
use super::loader::{RegistryLoader, ResolveError};
use super::matcher::{owners_for_files, owners_for_repo};
use super::qualify::{issue_directive, pull_request_label, qualifying_labels};

/// Who was found for an event, before rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Label the resolution was driven by
    pub label: Option<String>,
    /// Group the label resolved to
    pub group: Option<String>,
    /// Other groups declaring the same label, ignored
    pub shadowed: Vec<String>,
    /// Other qualifying labels on the event, not used
    pub ignored_labels: Vec<String>,
    /// Contacts per tier (direct owners may be empty)
    pub escalation: Escalation,
    /// Links to the groups involved
    pub links: BTreeSet<GroupLink>,
}

impl Resolution {
    /// Direct owners found (empty means the fallback contacts are named)
    #[must_use]
    pub fn owners(&self) -> ContactSet {
        self.escalation.owners().cloned().unwrap_or_default()
    }

    /// Whether the reply names the fallback contacts
    #[must_use]
    pub fn uses_fallback(&self) -> bool {
        self.escalation.owners().is_none_or(ContactSet::is_empty)
    }
}

/// A composed reply, ready to post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Issue or pull request
    pub kind: ReplyKind,
    /// What the text was rendered from
    pub resolution: Resolution,
    /// The comment body
    pub text: String,
}

/// Resolves owners for events and posts the reply
#[derive(Clone, Copy)]
pub struct Welcomer<'a> {
    store: &'a dyn ContentStore,
    policy: &'a Policy,
}

impl std::fmt::Debug for Welcomer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Welcomer").field("policy", self.policy).finish_non_exhaustive()
    }
}

impl<'a> Welcomer<'a> {
    /// Create a welcomer reading documents from `store`
    #[must_use]
    pub const fn new(store: &'a dyn ContentStore, policy: &'a Policy) -> Self {
        Self { store, policy }
    }

    /// The policy this welcomer applies
    #[must_use]
    pub const fn policy(&self) -> &Policy {
        self.policy
    }

    fn loader(&self) -> RegistryLoader<'a> {
        RegistryLoader::new(self.store)
    }

    fn load_registry(&self) -> Result<Registry, ResolveError> {
        self.loader().load(&self.policy.registry)
    }

    /// Owners of changed files, for the group `label` resolves to
    pub fn resolve_files<S: AsRef<str>>(
        &self,
        label: &str,
        files: &[S],
    ) -> Result<Resolution, ResolveError> {
        let registry = self.load_registry()?;
        let Some(found) = resolve_label(&registry, label) else {
            debug!("No group declares label {label:?}");
            return Ok(Resolution {
                label: Some(label.to_string()),
                ..Resolution::default()
            });
        };

        let owners = owners_for_files(found.group, files);
        debug!("{} owner(s) of {} file(s) in {:?}", owners.len(), files.len(), found.group.name);

        Ok(Resolution {
            label: Some(label.to_string()),
            group: Some(found.group.name.clone()),
            shadowed: found.shadowed_names(),
            ignored_labels: Vec::new(),
            escalation: self.escalate(owners, found.group)?,
            links: BTreeSet::from([found.group.group_link()]),
        })
    }

    /// Owners of a repository, for the first label that resolves to a group
    ///
    /// Labels are tried in the given order. No registry is fetched when
    /// `labels` is empty.
    pub fn resolve_repo(&self, labels: &[&str], repo: &str) -> Result<Resolution, ResolveError> {
        if labels.is_empty() {
            return Ok(Resolution::default());
        }

        let registry = self.load_registry()?;
        let Some((label, found)) =
            labels.iter().find_map(|l| resolve_label(&registry, l).map(|m| (*l, m)))
        else {
            debug!("None of {labels:?} is declared by a group");
            return Ok(Resolution::default());
        };

        let owners = owners_for_repo([found.group], repo);
        debug!("{} owner(s) of {repo:?} in {:?}", owners.len(), found.group.name);

        Ok(Resolution {
            label: Some(label.to_string()),
            group: Some(found.group.name.clone()),
            shadowed: found.shadowed_names(),
            ignored_labels: Vec::new(),
            escalation: self.escalate(owners, found.group)?,
            links: BTreeSet::from([found.group.group_link()]),
        })
    }

    /// Add the maintainer and committer tiers when they will be named
    ///
    /// A group without an OWNERS document just has no such tiers.
    fn escalate(&self, owners: ContactSet, group: &Group) -> Result<Escalation, ResolveError> {
        let mut escalation = Escalation::with_owners(owners);

        if self.policy.surface_tiers < 2 {
            return Ok(escalation);
        }
        let Some(template) = &self.policy.owners_file else {
            return Ok(escalation);
        };

        let location = template.for_group(&group.name);
        match self.loader().load_owners(&location) {
            Ok(file) => {
                escalation.set(Tier::Maintainers, handles(&file.maintainers));
                escalation.set(Tier::Committers, handles(&file.committers));
            },
            Err(err) if err.is_not_found() => {
                warn!("No OWNERS document at {location}; naming direct owners only");
            },
            Err(err) => return Err(err),
        }

        Ok(escalation)
    }

    /// Compose the reply to a pull request event
    ///
    /// Returns `None` when the event does not qualify. At most one reply is
    /// produced per event, for the first qualifying label.
    pub fn pull_request_reply(
        &self,
        event: &PullRequestEvent,
    ) -> Result<Option<Reply>, ResolveError> {
        let Some(label) = pull_request_label(self.policy, event) else {
            return Ok(None);
        };

        let mut resolution = self.resolve_files(label, &event.changed_files)?;
        resolution.ignored_labels = others(&qualifying_labels(self.policy, &event.labels), label);
        if resolution.group.is_none() && !resolution.ignored_labels.is_empty() {
            warn!(
                "Label {label:?} on {}/{}#{} has no group; ignoring {:?}, naming fallback contacts",
                event.org, event.repo, event.number, resolution.ignored_labels
            );
        }
        Ok(Some(self.reply(ReplyKind::PullRequest, &event.author, resolution)))
    }

    /// Compose the reply to an issue comment event
    ///
    /// Returns `None` when the event does not qualify. Only labels already on
    /// the issue are consulted; the first one declared by a group wins.
    pub fn issue_reply(&self, event: &IssueCommentEvent) -> Result<Option<Reply>, ResolveError> {
        let Some(directive) = issue_directive(self.policy, event) else {
            return Ok(None);
        };
        debug!("Directive {:?} on {}/{}#{}", directive.target, event.org, event.repo, event.number);

        let labels = qualifying_labels(self.policy, &event.labels);
        let mut resolution = self.resolve_repo(&labels, &event.repo)?;
        if let Some(label) = resolution.label.clone() {
            resolution.ignored_labels = others(&labels, &label);
        }
        Ok(Some(self.reply(ReplyKind::Issue, &event.author, resolution)))
    }

    fn reply(&self, kind: ReplyKind, author: &str, resolution: Resolution) -> Reply {
        let text = compose(self.policy, kind, author, &resolution.escalation, &resolution.links);
        Reply {
            kind,
            resolution,
            text,
        }
    }

    /// Resolve a pull request event and post the reply
    ///
    /// Nothing is posted when the event does not qualify or resolution fails.
    pub fn handle_pull_request(
        &self,
        event: &PullRequestEvent,
        sink: &dyn CommentSink,
    ) -> anyhow::Result<Option<Reply>> {
        let Some(reply) = self.pull_request_reply(event)? else {
            debug!("Pull request {}/{}#{} does not qualify", event.org, event.repo, event.number);
            return Ok(None);
        };

        sink.create_pull_request_comment(&event.org, &event.repo, event.number, &reply.text)?;
        info!(
            "Replied on pull request {}/{}#{} naming {} owner(s)",
            event.org,
            event.repo,
            event.number,
            reply.resolution.owners().len()
        );
        Ok(Some(reply))
    }

    /// Resolve an issue comment event and post the reply
    ///
    /// Nothing is posted when the event does not qualify or resolution fails.
    pub fn handle_issue_comment(
        &self,
        event: &IssueCommentEvent,
        sink: &dyn CommentSink,
    ) -> anyhow::Result<Option<Reply>> {
        let Some(reply) = self.issue_reply(event)? else {
            debug!("Comment on {}/{}#{} does not qualify", event.org, event.repo, event.number);
            return Ok(None);
        };

        sink.create_issue_comment(&event.org, &event.repo, &event.number, &reply.text)?;
        info!(
            "Replied on issue {}/{}#{} naming {} owner(s)",
            event.org,
            event.repo,
            event.number,
            reply.resolution.owners().len()
        );
        Ok(Some(reply))
    }
}

fn others(labels: &[&str], chosen: &str) -> Vec<String> {
    labels.iter().filter(|l| **l != chosen).map(ToString::to_string).collect()
}

fn handles(ids: &[String]) -> ContactSet {
    ids.iter().map(|id| id.trim()).filter(|id| !id.is_empty()).map(Contact::new).collect()
}
