//! Preview the reply to an event without posting it

use std::path::Path;

use sigowners::adapters::LocalContentStore;
use sigowners::core::models::{IssueCommentEvent, PullRequestEvent};
use sigowners::core::services::Welcomer;
use sigowners::output::{OutputMode, ReplyResult};

use super::{load_config, read_event};
use crate::cli::EventKind;

/// Resolve an event against a local store and print the reply it would get
pub fn preview(
    kind: EventKind,
    event: &Path,
    store: &Path,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let policy = load_config(config)?.policy()?;
    let store = LocalContentStore::new(store);
    let welcomer = Welcomer::new(&store, &policy);

    let reply = match kind {
        EventKind::Pr => {
            let event: PullRequestEvent = read_event(event)?;
            welcomer.pull_request_reply(&event)?
        },
        EventKind::Issue => {
            let event: IssueCommentEvent = read_event(event)?;
            welcomer.issue_reply(&event)?
        },
    };

    ReplyResult::from(reply.as_ref()).render(mode);
    Ok(())
}
