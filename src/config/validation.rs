//! Configuration validation for advisory-diff.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, BehaviorConfig, DiffConfig, LoaderConfig, OutputConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors.extend(self.loader.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file
            && let Some(parent) = file_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            errors.push(ConfigError::new(
                "output.file",
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }

        if self.max_items == Some(0) {
            errors.push(ConfigError::new(
                "output.max_items",
                "max_items must be at least 1",
            ));
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // All flag combinations are valid
        Vec::new()
    }
}

impl Validatable for LoaderConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for name in &self.packages {
            if name.trim().is_empty() {
                errors.push(ConfigError::new("loader.packages", "Package names must not be empty"));
            } else if name.contains(['/', '\\']) {
                errors.push(ConfigError::new(
                    "loader.packages",
                    format!("Package name '{name}' must not contain path separators"),
                ));
            }
        }
        errors
    }
}

impl Validatable for DiffConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (field, path) in [("paths.old", &self.paths.old), ("paths.new", &self.paths.new)] {
            if !path.is_dir() {
                errors.push(ConfigError::new(
                    field,
                    format!("Not a directory: {}", path.display()),
                ));
            }
        }
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors.extend(self.loader.validate());
        errors
    }
}
