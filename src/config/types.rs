//! Configuration types for dtrack-publish.
//!
//! Provides the mutable publish configuration and its fluent builder.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::defaults::{DEFAULT_BOM_RELATIVE_PATH, DEFAULT_REALM, DEFAULT_USE_HTTPS};
use super::validation::{DiagnosticSink, TracingSink};

// ============================================================================
// Publish Configuration
// ============================================================================

/// Configuration for publishing a CycloneDX BOM to a Dependency-Track server.
///
/// All fields are plain public values so callers can assign them directly
/// between construction and validation. Nothing is checked at construction
/// time; [`Validatable::validate`](super::Validatable::validate) and
/// [`Validatable::is_valid`](super::Validatable::is_valid) perform all checks
/// against the field values current at call time.
#[derive(Clone)]
pub struct PublishConfig {
    /// Hostname (and optional port) of the Dependency-Track server,
    /// e.g. `localhost:8080`.
    pub host: String,
    /// API path segment the BOM is uploaded to.
    pub realm: String,
    /// API key used to authenticate against the server.
    pub api_key: String,
    /// UUID of the Dependency-Track project the BOM is associated with.
    pub project_uuid: String,
    /// Path to the generated BOM artifact.
    pub bom_file: PathBuf,
    /// Use https rather than http when assembling the upload URL.
    pub use_https: bool,
    /// Sink receiving one error-level line per failing field during validation.
    pub(crate) sink: Arc<dyn DiagnosticSink + Send + Sync>,
}

impl PublishConfig {
    /// Create a configuration with default field values.
    ///
    /// `build_dir` is only used to derive the default BOM location
    /// (`<build_dir>/reports/bom.xml`); the directory is neither created nor
    /// checked here.
    #[must_use]
    pub fn new(build_dir: impl AsRef<Path>) -> Self {
        Self::with_sink(build_dir, Arc::new(TracingSink))
    }

    /// Create a configuration that reports validation diagnostics through
    /// `sink` instead of the default `tracing`-backed sink.
    #[must_use]
    pub fn with_sink(
        build_dir: impl AsRef<Path>,
        sink: Arc<dyn DiagnosticSink + Send + Sync>,
    ) -> Self {
        Self {
            host: String::new(),
            realm: DEFAULT_REALM.to_string(),
            api_key: String::new(),
            project_uuid: String::new(),
            bom_file: build_dir.as_ref().join(DEFAULT_BOM_RELATIVE_PATH),
            use_https: DEFAULT_USE_HTTPS,
            sink,
        }
    }

    /// Create a [`PublishConfigBuilder`] seeded with the defaults for
    /// `build_dir`.
    pub fn builder(build_dir: impl AsRef<Path>) -> PublishConfigBuilder {
        PublishConfigBuilder {
            config: Self::new(build_dir),
        }
    }
}

impl fmt::Debug for PublishConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishConfig")
            .field("host", &self.host)
            .field("realm", &self.realm)
            .field("api_key", &self.api_key)
            .field("project_uuid", &self.project_uuid)
            .field("bom_file", &self.bom_file)
            .field("use_https", &self.use_https)
            .finish_non_exhaustive()
    }
}

/// Diagnostic rendering of the full configuration.
///
/// Deliberately includes the API key in plain text so a failed build can be
/// debugged from the log alone; do not ship this string anywhere untrusted.
impl fmt::Display for PublishConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PublishConfig(host='{}', realm='{}', api_key='{}', project_uuid='{}', bom_file={}, use_https={})",
            self.host,
            self.realm,
            self.api_key,
            self.project_uuid,
            self.bom_file.display(),
            self.use_https
        )
    }
}

// ============================================================================
// Builder for PublishConfig
// ============================================================================

/// Builder for constructing a [`PublishConfig`] with a fluent API.
#[derive(Debug)]
#[must_use]
pub struct PublishConfigBuilder {
    config: PublishConfig,
}

impl PublishConfigBuilder {
    /// Set the server hostname (and optional port).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the API path segment.
    pub fn realm(mut self, realm: impl Into<String>) -> Self {
        self.config.realm = realm.into();
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = api_key.into();
        self
    }

    /// Set the project UUID.
    pub fn project_uuid(mut self, project_uuid: impl Into<String>) -> Self {
        self.config.project_uuid = project_uuid.into();
        self
    }

    /// Set the BOM artifact path, replacing the derived default.
    pub fn bom_file(mut self, bom_file: impl Into<PathBuf>) -> Self {
        self.config.bom_file = bom_file.into();
        self
    }

    /// Choose between https and http for the upload URL.
    pub fn use_https(mut self, use_https: bool) -> Self {
        self.config.use_https = use_https;
        self
    }

    /// Set the diagnostic sink validation reports through.
    pub fn sink(mut self, sink: Arc<dyn DiagnosticSink + Send + Sync>) -> Self {
        self.config.sink = sink;
        self
    }

    /// Build the [`PublishConfig`].
    #[must_use]
    pub fn build(self) -> PublishConfig {
        self.config
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let config = PublishConfig::new("/tmp/build");

        assert!(config.host.is_empty());
        assert_eq!(config.realm, DEFAULT_REALM);
        assert!(config.api_key.is_empty());
        assert!(config.project_uuid.is_empty());
        assert_eq!(config.bom_file, Path::new("/tmp/build/reports/bom.xml"));
        assert!(config.use_https);
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = PublishConfig::builder("/tmp/build")
            .host("dtrack.example.com:8081")
            .realm("api/v2/bom")
            .api_key("secret")
            .project_uuid("5c4b7c30-1f0a-4e0e-8397-1d4b9f6f63d5")
            .bom_file("/tmp/custom/bom.xml")
            .use_https(false)
            .build();

        assert_eq!(config.host, "dtrack.example.com:8081");
        assert_eq!(config.realm, "api/v2/bom");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.project_uuid, "5c4b7c30-1f0a-4e0e-8397-1d4b9f6f63d5");
        assert_eq!(config.bom_file, Path::new("/tmp/custom/bom.xml"));
        assert!(!config.use_https);
    }

    #[test]
    fn test_display_contains_every_field() {
        let mut config = PublishConfig::new("/tmp/build");
        config.host = "localhost:8080".to_string();
        config.api_key = "abc123".to_string();
        config.project_uuid = "uuid-1".to_string();

        let rendered = config.to_string();
        assert!(rendered.contains("localhost:8080"));
        assert!(rendered.contains("api/v1/bom"));
        assert!(rendered.contains("abc123"));
        assert!(rendered.contains("uuid-1"));
        assert!(rendered.contains("/tmp/build/reports/bom.xml"));
        assert!(rendered.contains("use_https=true"));
    }

    #[test]
    fn test_debug_hides_sink() {
        let config = PublishConfig::new("/tmp/build");
        let rendered = format!("{config:?}");
        assert!(rendered.contains("PublishConfig"));
        assert!(rendered.contains("bom_file"));
        assert!(!rendered.contains("sink"));
    }
}
