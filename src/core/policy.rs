//! Reply policy
//!
//! Everything that decides whether and how the bot replies, compiled once
//! from configuration and then shared read-only by every resolution.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::models::{ContactSet, ContentLocation};

/// Default label prefix marking a group label
pub const DEFAULT_LABEL_PREFIX: &str = "sig/";

/// Default directive pattern: a line `/sig <name>`
pub const DEFAULT_DIRECTIVE: &str = r"(?m)^/sig\s*(.*?)\s*$";

/// Compiled, immutable reply policy
#[derive(Debug, Clone)]
pub struct Policy {
    /// Where the ownership registry lives
    pub registry: ContentLocation,

    /// Where per-group OWNERS documents live (`{sig}` in the path)
    pub owners_file: Option<ContentLocation>,

    /// Labels starting with this prefix route to a group
    pub label_prefix: String,

    /// Issue comments matching this pattern ask for owners
    pub directive: Regex,

    /// Contacts named when no direct owner is found
    pub fallback: ContactSet,

    /// How many escalation tiers a reply names
    pub surface_tiers: usize,

    /// Reply wording
    pub templates: Templates,
}

/// Reply wording, with `{placeholder}` slots
///
/// Slots: `{author}`, `{subject}` in `greeting`; `{tier}`, `{contacts}` in the
/// tier lines; `{links}` in `closing`; `{name}`, `{url}` in `link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Templates {
    /// First line(s), up to "please contact "
    pub greeting: String,
    /// Line naming the first tier
    pub first_tier: String,
    /// Line naming every further tier
    pub next_tier: String,
    /// Last line, pointing at the groups
    pub closing: String,
    /// A single group link
    pub link: String,
    /// Between two handles
    pub contact_separator: String,
    /// Between two group links
    pub link_separator: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            greeting: "Hi ***{author}***, \nif you want to get quick review about your {subject}, please contact "
                .to_string(),
            first_tier: "the {tier} in first: @{contacts} ,".to_string(),
            next_tier: "and then any of the {tier}: @{contacts} ,".to_string(),
            closing: "if you have any question, please contact the SIG:{links}.".to_string(),
            link: "[{name}]({url})".to_string(),
            contact_separator: " , @".to_string(),
            link_separator: ", ".to_string(),
        }
    }
}

/// Fill `{key}` slots in a single pass
///
/// Values are inserted verbatim, so a value containing `{...}` is never
/// expanded again. Unknown slots are left as they are.
#[must_use]
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = &after[..close];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            },
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
