//! Domain models for sigowners
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Registry`] - The ownership registry document
//! - [`Contact`] - A person to notify, identified by handle
//! - [`Escalation`] - Ordered contact tiers for one reply
//! - [`PullRequestEvent`] / [`IssueCommentEvent`] - Inbound event data

mod contact;
mod event;
mod location;
mod registry;
mod tier;

pub use contact::{Contact, ContactSet};
pub use event::{
    IssueCommentAction, IssueCommentEvent, PullRequestAction, PullRequestEvent, ReplyKind,
};
pub use location::ContentLocation;
pub use registry::{FileRule, Group, GroupLink, OwnersFile, Registry, RepoRule};
pub use tier::{Escalation, Tier};
