//! Directory-backed content store
//!
//! Serves `root/{owner}/{repo}/{path}` with the same base64 transport encoding
//! as a remote contents API, so previews and tests exercise the real decoding
//! path. The ref is ignored: a directory holds a single revision.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::core::ports::{ContentStore, FetchError};

/// Content store reading from a local directory tree
#[derive(Debug, Clone)]
pub struct LocalContentStore {
    root: PathBuf,
}

impl LocalContentStore {
    /// Create a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, owner: &str, repo: &str, path: &str) -> Option<PathBuf> {
        let relative = Path::new(owner).join(repo).join(path);
        // Keep lookups inside the root
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes { None } else { Some(self.root.join(relative)) }
    }
}

impl ContentStore for LocalContentStore {
    fn get_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        _reference: &str,
    ) -> Result<String, FetchError> {
        let Some(file) = self.resolve(owner, repo, path) else {
            return Err(FetchError::NotFound(format!("{owner}/{repo}/{path}")));
        };

        match fs::read(&file) {
            Ok(bytes) => Ok(STANDARD.encode(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(FetchError::NotFound(file.display().to_string()))
            },
            Err(err) => Err(FetchError::Transport(format!("{}: {err}", file.display()))),
        }
    }
}
