//! Unified error types for advisory-diff.
//!
//! The diff engine itself never fails; every error here originates in the
//! collaborators around it (loading, parsing and validation).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for advisory-diff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AdvisoryDiffError {
    /// Errors while parsing an advisory document
    #[error("Failed to parse advisory document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors while assembling an index from documents
    #[error("Failed to load advisories: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Not an advisory document - expected package.name and schema-version")]
    NotAdvisoryDocument,

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Duplicate package name: {0}")]
    DuplicatePackage(String),

    #[error("Duplicate advisory {id} in package {package}")]
    DuplicateAdvisory { package: String, id: String },

    #[error("No advisory document for package {package} at {path:?}")]
    MissingPackage { package: String, path: PathBuf },

    #[error("Not a directory: {0:?}")]
    NotADirectory(PathBuf),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for advisory-diff operations
pub type Result<T> = std::result::Result<T, AdvisoryDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl AdvisoryDiffError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for content that is not an advisory document
    pub fn not_advisory_document(path: impl Into<String>) -> Self {
        Self::parse(
            format!("at {}", path.into()),
            ParseErrorKind::NotAdvisoryDocument,
        )
    }

    /// Create a parse error for missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::parse(
            "missing required field",
            ParseErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for AdvisoryDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_yaml::Error> for AdvisoryDiffError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost-first, e.g.
/// `"loading index: reading ko.advisories.yaml: YAML deserialization"`.
///
/// ```ignore
/// use advisory_diff::error::ErrorContext;
///
/// let content = std::fs::read_to_string(&path)
///     .with_context(|| format!("reading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<AdvisoryDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: AdvisoryDiffError, new_ctx: &str) -> AdvisoryDiffError {
    match err {
        AdvisoryDiffError::Parse {
            context: existing,
            source,
        } => AdvisoryDiffError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AdvisoryDiffError::Load {
            context: existing,
            source,
        } => AdvisoryDiffError::Load {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AdvisoryDiffError::Io {
            path,
            message,
            source,
        } => AdvisoryDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        AdvisoryDiffError::Validation(msg) => {
            AdvisoryDiffError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
