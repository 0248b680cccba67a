//! Message composer - renders the reply posted on an issue or pull request
//!
//! Output only depends on its inputs: contacts are listed by handle and
//! links by name, so the same resolution always renders the same bytes.

use std::collections::BTreeSet;

use crate::core::models::{ContactSet, Escalation, GroupLink, ReplyKind, Tier};
use crate::core::policy::{Policy, fill};

/// Render the reply text
///
/// Tiers are named in escalation order, at most `policy.surface_tiers` of
/// them. The first tier is always named: when it has no contacts, the
/// policy's fallback contacts stand in. Later tiers only appear when they
/// still name someone after removing the handles of earlier tiers.
///
/// The closing line pointing at the groups is omitted when there is no link.
#[must_use]
pub fn compose(
    policy: &Policy,
    kind: ReplyKind,
    author: &str,
    escalation: &Escalation,
    links: &BTreeSet<GroupLink>,
) -> String {
    let templates = &policy.templates;
    let mut lines = Vec::new();

    let greeting = fill(&templates.greeting, &[("author", author), ("subject", kind.subject())]);

    let mut named = ContactSet::new();
    for (index, tier) in Tier::ALL.iter().copied().take(policy.surface_tiers.max(1)).enumerate() {
        let contacts = escalation.get(tier).cloned().unwrap_or_default();

        let contacts = if index == 0 {
            if contacts.is_empty() { policy.fallback.clone() } else { contacts }
        } else {
            let fresh = contacts.without(&named);
            if fresh.is_empty() {
                continue;
            }
            fresh
        };

        let handles = contacts.ids().collect::<Vec<_>>().join(templates.contact_separator.as_str());
        let template = if index == 0 { &templates.first_tier } else { &templates.next_tier };
        let line = fill(template, &[("tier", tier.title()), ("contacts", handles.as_str())]);

        if index == 0 {
            lines.push(format!("{greeting}{line}"));
        } else {
            lines.push(line);
        }
        named.extend(contacts.iter().cloned());
    }

    if !links.is_empty() {
        let rendered = links
            .iter()
            .map(|l| fill(&templates.link, &[("name", l.name.as_str()), ("url", l.url.as_str())]))
            .collect::<Vec<_>>()
            .join(templates.link_separator.as_str());
        lines.push(fill(&templates.closing, &[("links", rendered.as_str())]));
    }

    lines.join("\n")
}
