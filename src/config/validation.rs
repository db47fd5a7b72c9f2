//! Validation for the publish configuration.
//!
//! Provides the validation trait, the per-field error type, and the
//! diagnostic sink abstraction that validation reports through.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use super::types::PublishConfig;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error describing a single invalid configuration field.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Diagnostic Sink
// ============================================================================

/// Sink that receives one error-level diagnostic line per failing field.
///
/// Injected into [`PublishConfig`] at construction so callers (and tests)
/// decide where validation output goes instead of relying on a process-global
/// logger.
pub trait DiagnosticSink {
    /// Report one validation failure.
    fn error(&self, message: &str);
}

/// Default sink, forwarding diagnostics to `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Sink that records diagnostics in memory.
///
/// Useful for asserting on emitted messages without installing a tracing
/// subscriber.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages recorded so far, in emission order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Discard all recorded messages.
    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

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
// Validation Implementation
// ============================================================================

impl Validatable for PublishConfig {
    /// Check every field independently, in a fixed order, without
    /// short-circuiting, so one call surfaces every violation.
    ///
    /// Emptiness is exact (`is_empty()`, no trimming) and the BOM file probe
    /// runs against the path held at call time, never a cached one.
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.host.is_empty() {
            errors.push(ConfigError {
                field: "host".to_string(),
                message: "not set. Set the hostname of the Dependency-Track server. \
                          Syntax: 'host[:port]', e.g. localhost:8080."
                    .to_string(),
            });
        }

        if self.api_key.is_empty() {
            errors.push(ConfigError {
                field: "api_key".to_string(),
                message: "not set. Set the API key used to access the Dependency-Track server."
                    .to_string(),
            });
        }

        if self.realm.is_empty() {
            errors.push(ConfigError {
                field: "realm".to_string(),
                message: "must not be empty.".to_string(),
            });
        }

        if self.project_uuid.is_empty() {
            errors.push(ConfigError {
                field: "project_uuid".to_string(),
                message: "not set. Set the UUID of the associated Dependency-Track project; \
                          it appears in the address bar when the project is open."
                    .to_string(),
            });
        }

        if !self.bom_file.exists() {
            errors.push(ConfigError {
                field: "bom_file".to_string(),
                message: format!(
                    "BOM file '{}' not found.",
                    absolute_path(&self.bom_file).display()
                ),
            });
        }

        errors
    }

    /// Report every violation through the configured sink, then answer.
    ///
    /// Never panics and never raises: failures surface purely as the logged
    /// diagnostics plus the `false` result. Repeated calls with unchanged
    /// fields and filesystem state emit the same messages again.
    fn is_valid(&self) -> bool {
        let errors = self.validate();
        for error in &errors {
            self.sink.error(&error.to_string());
        }
        errors.is_empty()
    }
}

/// Resolve `path` against the current directory when relative.
///
/// Symlinks are left alone on purpose so the reported path matches what the
/// user configured.
fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

// ============================================================================
// Tests
// ============================================================================
