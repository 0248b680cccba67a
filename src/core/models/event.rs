//! Inbound event data
//!
//! The host webhook framework hands these over already parsed. Only the fields
//! the resolution pipeline reads are modeled.

use serde::{Deserialize, Serialize};

/// What happened to a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PullRequestAction {
    /// Pull request opened
    Open,
    /// Source branch updated
    Update,
    /// Labels added or removed
    UpdateLabel,
    /// Pull request closed
    Close,
    /// Pull request merged
    Merge,
    /// Any other action, kept verbatim
    Other(String),
}

impl From<String> for PullRequestAction {
    fn from(s: String) -> Self {
        match s.as_str() {
            "open" => Self::Open,
            "update" => Self::Update,
            "update_label" | "label_updated" => Self::UpdateLabel,
            "close" => Self::Close,
            "merge" => Self::Merge,
            _ => Self::Other(s),
        }
    }
}

impl From<PullRequestAction> for String {
    fn from(action: PullRequestAction) -> Self {
        action.to_string()
    }
}

impl std::fmt::Display for PullRequestAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Update => write!(f, "update"),
            Self::UpdateLabel => write!(f, "update_label"),
            Self::Close => write!(f, "close"),
            Self::Merge => write!(f, "merge"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// What happened to a comment (note)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueCommentAction {
    /// A new comment was created
    Comment,
    /// Any other action (edit, delete, ...), kept verbatim
    Other(String),
}

impl From<String> for IssueCommentAction {
    fn from(s: String) -> Self {
        match s.as_str() {
            "comment" | "created" => Self::Comment,
            _ => Self::Other(s),
        }
    }
}

impl From<IssueCommentAction> for String {
    fn from(action: IssueCommentAction) -> Self {
        match action {
            IssueCommentAction::Comment => "comment".to_string(),
            IssueCommentAction::Other(s) => s,
        }
    }
}

/// A pull request event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestEvent {
    /// What happened
    pub action: PullRequestAction,
    /// Organization owning the repository
    pub org: String,
    /// Repository name
    pub repo: String,
    /// Pull request number
    pub number: u64,
    /// Handle of the pull request author
    pub author: String,
    /// Labels currently on the pull request
    #[serde(default)]
    pub labels: Vec<String>,
    /// Paths changed by the pull request
    #[serde(default)]
    pub changed_files: Vec<String>,
}

/// A comment event on an issue or pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCommentEvent {
    /// What happened to the comment
    pub action: IssueCommentAction,
    /// Organization owning the repository
    pub org: String,
    /// Repository name
    pub repo: String,
    /// Issue number (Gitee issue numbers are strings like `I4XYZ`)
    pub number: String,
    /// Handle of the issue author
    pub author: String,
    /// Comment body
    #[serde(default)]
    pub body: String,
    /// Whether the comment was made on a pull request
    #[serde(default)]
    pub is_pull_request: bool,
    /// Labels already attached to the issue
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Which kind of item a reply is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    /// An issue
    Issue,
    /// A pull request
    PullRequest,
}

impl ReplyKind {
    /// Noun used in the reply text
    #[must_use]
    pub const fn subject(self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::PullRequest => "pull request",
        }
    }
}
