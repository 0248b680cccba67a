//! Resolve an event against Gitee and post the reply

use std::path::Path;

use sigowners::output::OutputMode;

use crate::cli::EventKind;

/// Environment variable holding the API token
#[cfg(feature = "gitee")]
const TOKEN_VAR: &str = "GITEE_TOKEN";

/// Handle one event end to end: fetch the registry, compose, post
#[cfg(feature = "gitee")]
pub fn handle(
    kind: EventKind,
    event: &Path,
    api_url: &str,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    use log::debug;
    use sigowners::adapters::GiteeClient;
    use sigowners::core::models::{IssueCommentEvent, PullRequestEvent};
    use sigowners::core::services::Welcomer;
    use sigowners::output::ReplyResult;

    use super::{load_config, read_event};

    let policy = load_config(config)?.policy()?;
    let token = std::env::var(TOKEN_VAR).ok().filter(|t| !t.is_empty());
    if token.is_none() {
        debug!("{TOKEN_VAR} is not set; requests are anonymous");
    }

    let client = GiteeClient::new(api_url, token)?;
    let welcomer = Welcomer::new(&client, &policy);

    let reply = match kind {
        EventKind::Pr => {
            let event: PullRequestEvent = read_event(event)?;
            welcomer.handle_pull_request(&event, &client)?
        },
        EventKind::Issue => {
            let event: IssueCommentEvent = read_event(event)?;
            welcomer.handle_issue_comment(&event, &client)?
        },
    };

    ReplyResult::from(reply.as_ref()).render(mode);
    Ok(())
}

/// Without the `gitee` feature there is no client to post with
#[cfg(not(feature = "gitee"))]
pub fn handle(
    _kind: EventKind,
    _event: &Path,
    _api_url: &str,
    _config: Option<&Path>,
    _mode: OutputMode,
) -> anyhow::Result<()> {
    anyhow::bail!("sigowners was built without the `gitee` feature; use `pr` or `issue` to preview")
}
