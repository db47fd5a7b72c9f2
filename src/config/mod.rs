//! Configuration module for dtrack-publish.
//!
//! This module provides the publish configuration with:
//! - A mutable configuration holder with sensible defaults
//! - Per-field validation with one diagnostic line per violation
//! - An injectable diagnostic sink (no global logger state)
//! - YAML override file loading and discovery
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dtrack_publish::config::{PublishConfig, Validatable};
//!
//! // Defaults derived from the build output directory
//! let mut config = PublishConfig::new("target");
//! config.host = "dtrack.example.com:8081".to_string();
//! config.api_key = std::env::var("DTRACK_API_KEY")?;
//! config.project_uuid = "5c4b7c30-1f0a-4e0e-8397-1d4b9f6f63d5".to_string();
//!
//! // Or the builder
//! let config = PublishConfig::builder("target")
//!     .host("dtrack.example.com:8081")
//!     .api_key("...")
//!     .project_uuid("...")
//!     .build();
//!
//! // Layer in a YAML override file
//! use dtrack_publish::config::file::load_or_default;
//! let (overrides, loaded_from) = load_or_default(None);
//! let mut config = PublishConfig::new("target");
//! overrides.apply(&mut config);
//!
//! // Validation is always explicit and reports every violation at once
//! if !config.is_valid() {
//!     eprintln!("not publishing; current settings: {config}");
//! }
//! ```
//!
//! # Override File
//!
//! Place a `.dtrack-publish.yaml` file in your project root or
//! `~/.config/dtrack-publish/`:
//!
//! ```yaml
//! host: dtrack.example.com:8081
//! project_uuid: 5c4b7c30-1f0a-4e0e-8397-1d4b9f6f63d5
//! use_https: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{DEFAULT_BOM_RELATIVE_PATH, DEFAULT_REALM, DEFAULT_USE_HTTPS};
pub use types::{PublishConfig, PublishConfigBuilder};
pub use validation::{ConfigError, DiagnosticSink, MemorySink, TracingSink, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError, FileConfig,
};

/// Generate a JSON Schema for the override file format.
///
/// This schema documents all keys that can be set in `.dtrack-publish.yaml`
/// files. It can be used by editors for validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(FileConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_every_override_key() {
        let schema = generate_json_schema();
        for key in [
            "host",
            "realm",
            "api_key",
            "project_uuid",
            "bom_file",
            "use_https",
        ] {
            assert!(schema.contains(key), "schema is missing '{key}'");
        }
    }
}
