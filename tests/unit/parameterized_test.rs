//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use sigowners::core::models::{IssueCommentAction, PullRequestAction};
use sigowners::core::services::{issue_directive, pull_request_label, qualifying_labels};
use test_case::test_case;

use crate::common::fixtures::{issue_comment, policy, pull_request};

// =============================================================================
// Label Qualification Tests
// =============================================================================

#[test_case(&["sig/storage"], Some("sig/storage") ; "single group label")]
#[test_case(&["sig/storage", "sig/docs"], Some("sig/docs") ; "lexicographic first wins")]
#[test_case(&["kind/bug", "sig/storage"], Some("sig/storage") ; "other labels ignored")]
#[test_case(&["kind/bug"], None ; "no group label")]
#[test_case(&[], None ; "no labels")]
#[test_case(&["SIG/storage"], None ; "prefix is case sensitive")]
#[test_case(&["sig/"], Some("sig/") ; "bare prefix qualifies")]
fn test_pull_request_label(labels: &[&str], expected: Option<&str>) {
    let policy = policy();
    let event = pull_request(labels, &["a.go"]);
    assert_eq!(pull_request_label(&policy, &event), expected);
}

#[test_case("update_label", true ; "label update")]
#[test_case("label_updated", true ; "label update alias")]
#[test_case("open", false ; "opened")]
#[test_case("update", false ; "source branch update")]
#[test_case("merge", false ; "merged")]
fn test_pull_request_action_qualifies(action: &str, expected: bool) {
    let policy = policy();
    let mut event = pull_request(&["sig/storage"], &[]);
    event.action = PullRequestAction::from(action.to_string());
    assert_eq!(pull_request_label(&policy, &event).is_some(), expected);
}

#[test]
fn test_qualifying_labels_deduplicated() {
    let policy = policy();
    let labels = ["sig/b", "sig/a", "sig/b", "kind/x"];
    assert_eq!(qualifying_labels(&policy, &labels), vec!["sig/a", "sig/b"]);
}

// =============================================================================
// Directive Tests
// =============================================================================

#[test_case("/sig", Some("") ; "bare directive")]
#[test_case("/sig storage", Some("storage") ; "directive with target")]
#[test_case("/sig   storage  ", Some("storage") ; "surrounding blanks trimmed")]
#[test_case("hello\n/sig storage\nthanks", Some("storage") ; "directive on its own line")]
#[test_case("please /sig storage", None ; "directive mid line")]
#[test_case("/assign @alice", None ; "other command")]
#[test_case("", None ; "empty body")]
fn test_issue_directive(body: &str, expected: Option<&str>) {
    let policy = policy();
    let event = issue_comment("server", &[], body);
    assert_eq!(issue_directive(&policy, &event).map(|d| d.target), expected);
}

#[test_case("comment", true ; "new comment")]
#[test_case("created", true ; "created alias")]
#[test_case("edit", false ; "edited comment")]
#[test_case("delete", false ; "deleted comment")]
fn test_issue_action_qualifies(action: &str, expected: bool) {
    let policy = policy();
    let mut event = issue_comment("server", &[], "/sig");
    event.action = IssueCommentAction::from(action.to_string());
    assert_eq!(issue_directive(&policy, &event).is_some(), expected);
}
