//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::Tier;
use crate::core::services::{Reply, Resolution};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Contacts of one escalation tier
#[derive(Debug, Serialize)]
pub struct TierInfo {
    /// Tier name
    pub tier: Tier,
    /// Handles, sorted
    pub contacts: Vec<String>,
}

/// Result of an owners lookup
#[derive(Debug, Serialize)]
pub struct OwnersResult {
    /// Label that drove the lookup
    pub label: Option<String>,
    /// Group the label resolved to
    pub group: Option<String>,
    /// Other groups declaring the same label
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shadowed: Vec<String>,
    /// Other qualifying labels on the event, not used
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_labels: Vec<String>,
    /// Contacts per tier
    pub tiers: Vec<TierInfo>,
    /// Whether the fallback contacts would be named
    pub fallback: bool,
}

/// Result of an event preview
#[derive(Debug, Serialize)]
pub struct ReplyResult {
    /// Whether the event qualifies for a reply
    pub qualified: bool,
    /// Resolution details, when qualified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<OwnersResult>,
    /// Reply text, when qualified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl From<&Resolution> for OwnersResult {
    fn from(resolution: &Resolution) -> Self {
        Self {
            label: resolution.label.clone(),
            group: resolution.group.clone(),
            shadowed: resolution.shadowed.clone(),
            ignored_labels: resolution.ignored_labels.clone(),
            tiers: resolution
                .escalation
                .iter()
                .map(|(tier, set)| TierInfo {
                    tier,
                    contacts: set.ids().map(String::from).collect(),
                })
                .collect(),
            fallback: resolution.uses_fallback(),
        }
    }
}

impl From<Option<&Reply>> for ReplyResult {
    fn from(reply: Option<&Reply>) -> Self {
        Self {
            qualified: reply.is_some(),
            owners: reply.map(|r| OwnersResult::from(&r.resolution)),
            text: reply.map(|r| r.text.clone()),
        }
    }
}

impl OwnersResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        match (&self.label, &self.group) {
            (Some(label), Some(group)) => println!("Label {label} -> group {group}"),
            (Some(label), None) => println!("Label {label} -> no group"),
            _ => println!("No group label"),
        }

        if !self.shadowed.is_empty() {
            println!("  also declared by: {}", self.shadowed.join(", "));
        }

        if !self.ignored_labels.is_empty() {
            println!("  ignored labels: {}", self.ignored_labels.join(", "));
        }

        for info in &self.tiers {
            if info.contacts.is_empty() {
                println!("  {}: (none)", info.tier);
            } else {
                println!("  {}: {}", info.tier, info.contacts.join(", "));
            }
        }

        if self.fallback {
            println!("  no direct owner; fallback contacts will be named");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ReplyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        match &self.text {
            Some(text) => println!("{text}"),
            None => println!("Event does not qualify; no reply."),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
