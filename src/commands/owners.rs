//! Show the owners a label resolves to

use std::path::Path;

use sigowners::adapters::LocalContentStore;
use sigowners::core::services::Welcomer;
use sigowners::output::{OutputMode, OwnersResult};

use super::load_config;

/// Resolve `label` for changed files, or for a repository when `repo` is set
pub fn owners(
    store: &Path,
    label: &str,
    files: &[String],
    repo: Option<&str>,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let policy = load_config(config)?.policy()?;
    let store = LocalContentStore::new(store);
    let welcomer = Welcomer::new(&store, &policy);

    let resolution = match repo {
        Some(repo) => welcomer.resolve_repo(&[label], repo)?,
        None => welcomer.resolve_files(label, files)?,
    };

    OwnersResult::from(&resolution).render(mode);
    Ok(())
}
