//! Advisory directory loading stage.

use crate::config::LoaderConfig;
use crate::parsers::{LoadedIndex, load_index, load_packages};
use anyhow::{Context, Result};
use std::path::Path;

/// Load an advisory directory, honoring the package selection in `loader`.
pub fn load_index_with_context(
    dir: &Path,
    loader: &LoaderConfig,
    quiet: bool,
) -> Result<LoadedIndex> {
    if !quiet {
        tracing::info!("Loading advisories: {}", dir.display());
    }

    let loaded = if loader.packages.is_empty() {
        load_index(dir)
    } else {
        load_packages(dir, &loader.packages)
    }
    .with_context(|| format!("Failed to load advisories from {}", dir.display()))?;

    if !quiet {
        tracing::info!(
            "Loaded {} documents with {} advisories",
            loaded.index.len(),
            loaded.index.advisory_count()
        );
    }
    if loaded.skipped > 0 {
        tracing::debug!("Skipped {} non-advisory YAML files", loaded.skipped);
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const KO: &str = "schema-version: 2.0.1\npackage:\n  name: ko\nadvisories: []\n";
    const BASH: &str = "schema-version: 2.0.1\npackage:\n  name: bash\nadvisories: []\n";

    #[test]
    fn test_load_all_and_selected() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("ko.advisories.yaml"), KO).unwrap();
        std::fs::write(tmp.path().join("bash.advisories.yaml"), BASH).unwrap();

        let all = load_index_with_context(tmp.path(), &LoaderConfig::default(), true).unwrap();
        assert_eq!(all.index.len(), 2);

        let loader = LoaderConfig {
            packages: vec!["bash".into()],
        };
        let selected = load_index_with_context(tmp.path(), &loader, true).unwrap();
        assert_eq!(selected.index.names().collect::<Vec<_>>(), vec!["bash"]);
    }

    #[test]
    fn test_load_error_has_context() {
        let err = load_index_with_context(
            Path::new("/nonexistent/advisories"),
            &LoaderConfig::default(),
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to load advisories"));
    }
}
