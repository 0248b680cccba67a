//! Tests for bot configuration

use std::collections::BTreeSet;
use std::fs;

use sigowners::config::{BotConfig, ConfigError};
use sigowners::core::models::{ContentLocation, Escalation, GroupLink, ReplyKind};
use sigowners::core::policy::Templates;
use sigowners::core::services::compose;
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = BotConfig::default();
    assert_eq!(
        config.registry,
        ContentLocation::new("new-op", "community", "sigs.yaml", "master")
    );
    assert!(config.owners_file.is_none());
    assert_eq!(config.reply.label_prefix, "sig/");
    assert_eq!(config.reply.fallback_contacts, vec!["xiangxinyong", "zhangxubo"]);
    assert_eq!(config.reply.surface_tiers, 1);
}

#[test]
fn test_empty_file_is_default() {
    assert_eq!(BotConfig::from_toml_str("").unwrap(), BotConfig::default());
}

#[test]
fn test_default_policy() {
    let policy = BotConfig::default().policy().unwrap();
    assert_eq!(policy.fallback.ids().collect::<Vec<_>>(), vec!["xiangxinyong", "zhangxubo"]);
    assert!(policy.directive.is_match("/sig storage"));
}

// =============================================================================
// PARSING
// =============================================================================

#[test]
fn test_partial_file_keeps_other_defaults() {
    let config = BotConfig::from_toml_str(
        r#"
[owners_file]
owner = "opengauss"
repo = "tc"
path = "sigs/{sig}/OWNERS"
ref = "master"

[reply]
fallback_contacts = ["oncall"]
surface_tiers = 2
"#,
    )
    .unwrap();

    assert_eq!(config.registry, BotConfig::default().registry);
    assert_eq!(
        config.owners_file.unwrap().for_group("storage").path,
        "sigs/storage/OWNERS"
    );
    assert_eq!(config.reply.label_prefix, "sig/");
    assert_eq!(config.reply.fallback_contacts, vec!["oncall"]);
    assert_eq!(config.reply.surface_tiers, 2);
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sigowners.toml");
    fs::write(&path, "[reply]\nlabel_prefix = \"team/\"\n").unwrap();

    let config = BotConfig::load(&path).unwrap();
    assert_eq!(config.reply.label_prefix, "team/");
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = BotConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_invalid_toml() {
    let err = BotConfig::from_toml_str("[reply\nsurface_tiers = 1").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

// =============================================================================
// POLICY VALIDATION
// =============================================================================

#[test]
fn test_invalid_directive() {
    let config = BotConfig::from_toml_str("[reply]\ndirective = '(unclosed'\n").unwrap();
    assert!(matches!(config.policy().unwrap_err(), ConfigError::Directive(_)));
}

#[test]
fn test_blank_fallback_rejected() {
    let config = BotConfig::from_toml_str("[reply]\nfallback_contacts = [\"\", \"  \"]\n").unwrap();
    assert!(matches!(config.policy().unwrap_err(), ConfigError::NoFallback));
}

#[test]
fn test_zero_tiers_rejected() {
    let config = BotConfig::from_toml_str("[reply]\nsurface_tiers = 0\n").unwrap();
    assert!(matches!(config.policy().unwrap_err(), ConfigError::NoTiers));
}

// =============================================================================
// TEMPLATES
// =============================================================================

#[test]
fn test_templates_default_when_unset() {
    let config = BotConfig::from_toml_str("[reply]\nsurface_tiers = 1\n").unwrap();
    assert_eq!(config.policy().unwrap().templates, Templates::default());
}

#[test]
fn test_templates_override_keeps_other_entries() {
    let config = BotConfig::from_toml_str(
        r#"
[reply.templates]
closing = "questions? ask the SIG: {links}."
link_separator = " | "
"#,
    )
    .unwrap();
    let policy = config.policy().unwrap();

    assert_eq!(policy.templates.closing, "questions? ask the SIG: {links}.");
    assert_eq!(policy.templates.greeting, Templates::default().greeting);

    let links = BTreeSet::from([
        GroupLink {
            name: "docs".to_string(),
            url: "https://example.com/docs".to_string(),
        },
        GroupLink {
            name: "storage".to_string(),
            url: "https://example.com/storage".to_string(),
        },
    ]);
    let text = compose(&policy, ReplyKind::Issue, "bob", &Escalation::default(), &links);
    assert!(text.ends_with(
        "questions? ask the SIG: [docs](https://example.com/docs) | [storage](https://example.com/storage)."
    ));
}
