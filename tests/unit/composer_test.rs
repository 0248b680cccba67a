//! Reply composition tests

use std::collections::BTreeSet;

use sigowners::core::models::{Contact, ContactSet, Escalation, GroupLink, ReplyKind, Tier};
use sigowners::core::services::compose;

use crate::common::fixtures::{policy, tiered_policy};

fn set(ids: &[&str]) -> ContactSet {
    ids.iter().copied().map(Contact::new).collect()
}

fn link(name: &str) -> GroupLink {
    GroupLink {
        name: name.to_string(),
        url: format!("https://example.com/{name}"),
    }
}

#[test]
fn test_pull_request_reply_text() {
    let text = compose(
        &policy(),
        ReplyKind::PullRequest,
        "bob",
        &Escalation::with_owners(set(&["carol", "alice"])),
        &BTreeSet::from([link("storage")]),
    );

    assert_eq!(
        text,
        "Hi ***bob***, \n\
         if you want to get quick review about your pull request, please contact the owner in first: @alice , @carol ,\n\
         if you have any question, please contact the SIG:[storage](https://example.com/storage)."
    );
}

#[test]
fn test_one_greeting_no_brackets() {
    let text = compose(
        &policy(),
        ReplyKind::PullRequest,
        "bob",
        &Escalation::with_owners(set(&["alice"])),
        &BTreeSet::from([link("storage")]),
    );

    assert_eq!(text.matches("Hi ***").count(), 1);
    assert!(!text.starts_with('['));
    assert!(!text.contains("\"Hi"));
}

#[test]
fn test_links_sorted_by_name() {
    let text = compose(
        &policy(),
        ReplyKind::Issue,
        "bob",
        &Escalation::with_owners(set(&["alice"])),
        &BTreeSet::from([link("storage"), link("docs")]),
    );

    assert!(text.ends_with(
        "SIG:[docs](https://example.com/docs), [storage](https://example.com/storage)."
    ));
}

#[test]
fn test_fallback_contacts_stand_in() {
    let text = compose(
        &policy(),
        ReplyKind::Issue,
        "bob",
        &Escalation::with_owners(ContactSet::new()),
        &BTreeSet::new(),
    );

    assert!(text.contains("the owner in first: @xiangxinyong , @zhangxubo ,"));
    assert!(!text.contains("please contact the SIG"));
}

#[test]
fn test_all_tiers_named_in_order() {
    let mut escalation = Escalation::with_owners(set(&["alice"]));
    escalation.set(Tier::Maintainers, set(&["mia", "alice"]));
    escalation.set(Tier::Committers, set(&["carl"]));

    let text = compose(
        &tiered_policy(),
        ReplyKind::Issue,
        "bob",
        &escalation,
        &BTreeSet::from([link("storage")]),
    );
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[1].ends_with("the owner in first: @alice ,"));
    assert_eq!(lines[2], "and then any of the maintainers: @mia ,");
    assert_eq!(lines[3], "and then any of the committers: @carl ,");
}

#[test]
fn test_fallback_then_maintainers() {
    let mut escalation = Escalation::default();
    escalation.set(Tier::Maintainers, set(&["mia"]));

    let text = compose(&tiered_policy(), ReplyKind::Issue, "bob", &escalation, &BTreeSet::new());

    assert!(text.contains("the owner in first: @xiangxinyong , @zhangxubo ,"));
    assert!(text.contains("and then any of the maintainers: @mia ,"));
}

#[test]
fn test_author_is_inserted_verbatim() {
    let text = compose(
        &policy(),
        ReplyKind::Issue,
        "{subject}",
        &Escalation::with_owners(set(&["alice"])),
        &BTreeSet::new(),
    );
    assert!(text.starts_with("Hi ***{subject}***, \n"));
}
