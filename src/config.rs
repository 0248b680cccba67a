//! Bot configuration
//!
//! A TOML file describing where the registry lives and how replies are
//! worded. Every field has a default, so an empty file is a valid config.
//!
//! ```toml
//! [registry]
//! owner = "new-op"
//! repo = "community"
//! path = "sigs.yaml"
//! ref = "master"
//!
//! [owners_file]
//! owner = "opengauss"
//! repo = "tc"
//! path = "sigs/{sig}/OWNERS"
//! ref = "master"
//!
//! [reply]
//! label_prefix = "sig/"
//! fallback_contacts = ["xiangxinyong", "zhangxubo"]
//! surface_tiers = 1
//!
//! [reply.templates]
//! closing = "questions? ask the SIG: {links}."
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{Contact, ContactSet, ContentLocation};
use crate::core::policy::{DEFAULT_DIRECTIVE, DEFAULT_LABEL_PREFIX, Policy, Templates};

/// Errors loading or compiling the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The directive pattern does not compile
    #[error("invalid directive pattern: {0}")]
    Directive(#[from] regex::Error),

    /// No fallback contact is configured
    #[error("reply.fallback_contacts must name at least one handle")]
    NoFallback,

    /// `surface_tiers` is zero
    #[error("reply.surface_tiers must be at least 1")]
    NoTiers,
}

/// Bot configuration as written in the TOML file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Location of the ownership registry
    #[serde(default = "default_registry")]
    pub registry: ContentLocation,

    /// Location of per-group OWNERS documents (`{sig}` in the path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owners_file: Option<ContentLocation>,

    /// Reply policy
    #[serde(default)]
    pub reply: ReplyConfig,
}

/// The `[reply]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyConfig {
    /// Labels starting with this prefix route to a group
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,

    /// Regex an issue comment must match to ask for owners
    #[serde(default = "default_directive")]
    pub directive: String,

    /// Handles named when no direct owner is found
    #[serde(default = "default_fallback_contacts")]
    pub fallback_contacts: Vec<String>,

    /// How many escalation tiers a reply names (1 = owners only)
    #[serde(default = "default_surface_tiers")]
    pub surface_tiers: usize,

    /// Reply wording; unset entries keep the default text
    #[serde(default)]
    pub templates: Templates,
}

fn default_registry() -> ContentLocation {
    ContentLocation::new("new-op", "community", "sigs.yaml", "master")
}

fn default_label_prefix() -> String {
    DEFAULT_LABEL_PREFIX.to_string()
}

fn default_directive() -> String {
    DEFAULT_DIRECTIVE.to_string()
}

fn default_fallback_contacts() -> Vec<String> {
    vec!["xiangxinyong".to_string(), "zhangxubo".to_string()]
}

const fn default_surface_tiers() -> usize {
    1
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            registry: default_registry(),
            owners_file: None,
            reply: ReplyConfig::default(),
        }
    }
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            label_prefix: default_label_prefix(),
            directive: default_directive(),
            fallback_contacts: default_fallback_contacts(),
            surface_tiers: default_surface_tiers(),
            templates: Templates::default(),
        }
    }
}

impl BotConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Compile the reply policy
    ///
    /// Fails when the directive does not compile, no fallback handle is
    /// configured, or no tier would be named.
    pub fn policy(&self) -> Result<Policy, ConfigError> {
        let reply = &self.reply;

        let fallback: ContactSet = reply
            .fallback_contacts
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .map(Contact::new)
            .collect();
        if fallback.is_empty() {
            return Err(ConfigError::NoFallback);
        }
        if reply.surface_tiers == 0 {
            return Err(ConfigError::NoTiers);
        }

        Ok(Policy {
            registry: self.registry.clone(),
            owners_file: self.owners_file.clone(),
            label_prefix: reply.label_prefix.clone(),
            directive: Regex::new(&reply.directive)?,
            fallback,
            surface_tiers: reply.surface_tiers,
            templates: reply.templates.clone(),
        })
    }
}
