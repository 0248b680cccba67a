//! Resolution services
//!
//! - [`loader`] - Fetch and decode the registry and OWNERS documents
//! - [`label`] - Map an event label to its group
//! - [`matcher`] - Match changed files or a repository to owners
//! - [`composer`] - Render the reply text
//! - [`qualify`] - Decide which events get a reply
//! - [`welcomer`] - The per-event pipeline tying it all together

pub mod composer;
pub mod label;
pub mod loader;
pub mod matcher;
pub mod qualify;
pub mod welcomer;

pub use composer::compose;
pub use label::{LabelMatch, resolve_label};
pub use loader::{DecodeError, RegistryLoader, ResolveError, decode_content, parse_registry};
pub use matcher::{owners_for_files, owners_for_repo};
pub use qualify::{Directive, issue_directive, pull_request_label, qualifying_labels};
pub use welcomer::{Reply, Resolution, Welcomer};
