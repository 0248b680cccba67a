//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the resolution pipeline and
//! the code hosting platform it reads from and writes to.
//!
//! Implementations live in the `adapters` module.

mod comment_sink;
mod content_store;

pub use comment_sink::CommentSink;
pub use content_store::{ContentStore, FetchError};

#[cfg(test)]
pub use comment_sink::MockCommentSink;
#[cfg(test)]
pub use content_store::MockContentStore;
