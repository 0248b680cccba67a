//! Comment sink port
//!
//! Defines where composed replies are posted.

/// Posts comments on issues and pull requests
#[cfg_attr(test, mockall::automock)]
pub trait CommentSink: Send + Sync {
    /// Comment on pull request `number` of `org/repo`
    fn create_pull_request_comment(
        &self,
        org: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> anyhow::Result<()>;

    /// Comment on issue `number` of `org/repo`
    fn create_issue_comment(
        &self,
        org: &str,
        repo: &str,
        number: &str,
        body: &str,
    ) -> anyhow::Result<()>;
}
