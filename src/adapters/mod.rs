//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `local` - Content store backed by a directory tree
//! - `gitee` - Gitee v5 REST API client (feature `gitee`)

#[cfg(feature = "gitee")]
pub mod gitee;
pub mod local;

#[cfg(feature = "gitee")]
pub use gitee::GiteeClient;
pub use local::LocalContentStore;

/// Default Gitee API endpoint
pub const GITEE_API_URL: &str = "https://gitee.com/api/v5";
