//! Loading an [`Index`] from a directory of advisory documents.
//!
//! Only the top level of the directory is scanned. Candidates are `.yaml` /
//! `.yml` files that pass [`is_advisory_document`](super::is_advisory_document);
//! anything else is skipped. Duplicate package names are rejected.

use super::document::check_document_size;
use super::{find_nolint, is_advisory_document, parse_document_str};
use crate::error::{AdvisoryDiffError, ErrorContext, LoadErrorKind, Result};
use crate::model::{Document, Index, IndexBuilder};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name suffix of a package's advisory document.
pub const ADVISORY_FILE_SUFFIX: &str = ".advisories.yaml";

/// Where a loaded document came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSource {
    /// File name relative to the loaded directory
    pub filename: PathBuf,
    /// Lint rules suppressed by a `#nolint:` directive
    pub nolint: Vec<String>,
}

/// An index together with per-package source information.
#[derive(Debug, Clone, Default)]
pub struct LoadedIndex {
    pub index: Index,
    pub sources: BTreeMap<String, DocumentSource>,
    /// Number of YAML files skipped because they are not advisory documents
    pub skipped: usize,
}

impl LoadedIndex {
    /// Source info for a package.
    #[must_use]
    pub fn source(&self, name: &str) -> Option<&DocumentSource> {
        self.sources.get(name)
    }

    /// Consume and return the index.
    #[must_use]
    pub fn into_index(self) -> Index {
        self.index
    }
}

/// Load every advisory document at the top level of `dir`.
pub fn load_index(dir: &Path) -> Result<LoadedIndex> {
    let candidates = list_candidates(dir)?;

    let parsed: Vec<Option<(Document, DocumentSource)>> = candidates
        .par_iter()
        .map(|path| read_candidate(dir, path))
        .collect::<Result<_>>()?;

    let skipped = parsed.iter().filter(|p| p.is_none()).count();
    let mut loaded = assemble(parsed.into_iter().flatten())?;
    loaded.skipped = skipped;

    tracing::debug!(
        "Loaded {} documents from {} ({} skipped)",
        loaded.index.len(),
        dir.display(),
        skipped
    );
    Ok(loaded)
}

/// Load only the named packages from `dir`, reading `<name>.advisories.yaml`.
///
/// A missing or non-advisory file for any requested package is an error.
pub fn load_packages(dir: &Path, names: &[String]) -> Result<LoadedIndex> {
    ensure_directory(dir)?;

    let mut parsed = Vec::with_capacity(names.len());
    for name in names {
        let path = dir.join(format!("{name}{ADVISORY_FILE_SUFFIX}"));
        if !path.is_file() {
            return Err(AdvisoryDiffError::load(
                "loading selected packages",
                LoadErrorKind::MissingPackage {
                    package: name.clone(),
                    path,
                },
            ));
        }
        let entry = read_candidate(dir, &path)?
            .ok_or_else(|| AdvisoryDiffError::not_advisory_document(path.display().to_string()))?;
        parsed.push(entry);
    }

    assemble(parsed)
}

fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(AdvisoryDiffError::load(
            "opening advisory directory",
            LoadErrorKind::NotADirectory(dir.to_path_buf()),
        ))
    }
}

/// Top-level YAML files in `dir`, sorted by path for reproducible ordering.
fn list_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_directory(dir)?;

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| AdvisoryDiffError::io(dir, e))? {
        let path = entry.map_err(|e| AdvisoryDiffError::io(dir, e))?.path();
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "yaml" || e == "yml");
        if is_yaml && path.is_file() {
            candidates.push(path);
        }
    }
    candidates.sort();
    Ok(candidates)
}

/// Read one candidate file; `None` if it is not an advisory document.
///
/// Files that are not valid UTF-8 cannot be advisory documents and are
/// skipped rather than failing the load.
fn read_candidate(dir: &Path, path: &Path) -> Result<Option<(Document, DocumentSource)>> {
    check_document_size(path)?;
    let bytes = std::fs::read(path).map_err(|e| AdvisoryDiffError::io(path, e))?;
    let Ok(content) = String::from_utf8(bytes) else {
        tracing::debug!("Skipping {}: not valid UTF-8", path.display());
        return Ok(None);
    };

    if !is_advisory_document(&content) {
        tracing::debug!("Skipping {}: not an advisory document", path.display());
        return Ok(None);
    }

    let document =
        parse_document_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    let source = DocumentSource {
        filename: path.strip_prefix(dir).unwrap_or(path).to_path_buf(),
        nolint: find_nolint(&content),
    };
    Ok(Some((document, source)))
}

fn assemble(entries: impl IntoIterator<Item = (Document, DocumentSource)>) -> Result<LoadedIndex> {
    let mut builder = IndexBuilder::new();
    let mut sources = BTreeMap::new();

    for (document, source) in entries {
        let name = document.name().to_string();
        builder.try_add(document).with_context(|| {
            format!("loading {}", source.filename.display())
        })?;
        sources.insert(name, source);
    }

    Ok(LoadedIndex {
        index: builder.build(),
        sources,
        skipped: 0,
    })
}
