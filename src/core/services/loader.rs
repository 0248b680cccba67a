//! Registry loader
//!
//! Fetches a document through the [`ContentStore`] port, strips the base64
//! transport encoding and parses the YAML body. Every call goes to the store;
//! nothing is cached between resolutions.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::models::{ContentLocation, OwnersFile, Registry};
use crate::core::ports::{ContentStore, FetchError};

/// Errors turning a fetched payload into a document
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The transport encoding is not valid base64
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not UTF-8 text
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The document does not have the expected structure
    #[error("malformed document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An owner entry has no handle
    #[error("owner without gitee_id in group {group:?}")]
    MissingContactId {
        /// Name of the offending group
        group: String,
    },
}

/// Errors that abort a resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The document could not be retrieved
    #[error("failed to fetch {location}: {source}")]
    Fetch {
        /// What was requested
        location: ContentLocation,
        /// Why it failed
        source: FetchError,
    },

    /// The document could not be decoded
    #[error("failed to decode {location}: {source}")]
    Decode {
        /// What was requested
        location: ContentLocation,
        /// Why it failed
        source: DecodeError,
    },
}

impl ResolveError {
    /// Whether the document simply does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Fetch {
                source: FetchError::NotFound(_),
                ..
            }
        )
    }
}

/// Strip the base64 transport encoding
///
/// Line breaks and surrounding whitespace are ignored, as contents APIs wrap
/// long payloads.
pub fn decode_content(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}

/// Parse a decoded registry document and check its invariants
pub fn parse_registry(bytes: &[u8]) -> Result<Registry, DecodeError> {
    let registry: Registry = parse_document(bytes)?;

    if let Some((group, _)) = registry.contacts().find(|(_, c)| c.id.trim().is_empty()) {
        return Err(DecodeError::MissingContactId {
            group: group.name.clone(),
        });
    }

    Ok(registry)
}

fn parse_document<T: DeserializeOwned + Default>(bytes: &[u8]) -> Result<T, DecodeError> {
    let text = String::from_utf8(bytes.to_vec())?;
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_yaml::from_str(&text)?)
}

/// Loads documents from a content store
#[derive(Clone, Copy)]
pub struct RegistryLoader<'a> {
    store: &'a dyn ContentStore,
}

impl std::fmt::Debug for RegistryLoader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryLoader").finish_non_exhaustive()
    }
}

impl<'a> RegistryLoader<'a> {
    /// Create a loader reading from `store`
    #[must_use]
    pub const fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Fetch and parse the ownership registry
    pub fn load(&self, location: &ContentLocation) -> Result<Registry, ResolveError> {
        let bytes = self.fetch(location)?;
        let registry = parse_registry(&bytes).map_err(|source| ResolveError::Decode {
            location: location.clone(),
            source,
        })?;

        debug!("Loaded {} group(s) from {location}", registry.groups.len());
        Ok(registry)
    }

    /// Fetch and parse a group's OWNERS document
    pub fn load_owners(&self, location: &ContentLocation) -> Result<OwnersFile, ResolveError> {
        let bytes = self.fetch(location)?;
        parse_document(&bytes).map_err(|source| ResolveError::Decode {
            location: location.clone(),
            source,
        })
    }

    fn fetch(&self, location: &ContentLocation) -> Result<Vec<u8>, ResolveError> {
        let encoded = self
            .store
            .get_content(&location.owner, &location.repo, &location.path, &location.reference)
            .map_err(|source| ResolveError::Fetch {
                location: location.clone(),
                source,
            })?;

        decode_content(&encoded).map_err(|source| ResolveError::Decode {
            location: location.clone(),
            source,
        })
    }
}
