//! **Publish configuration for uploading CycloneDX BOMs to Dependency-Track.**
//!
//! `dtrack-publish` holds the settings a build needs to hand a generated
//! Bill of Materials to a [Dependency-Track](https://dependencytrack.org/)
//! server (host, API key, realm path, project UUID, and the BOM artifact
//! location) and validates them before anything is sent over the wire.
//!
//! The crate stops at the request boundary: it checks fields and reports
//! every violation in one pass, and it assembles the upload URL. The HTTP
//! exchange itself stays with the caller.
//!
//! ## Key Features
//!
//! - **Defaulted configuration**: only the build output directory is required
//!   up front; it seeds the default BOM location (`reports/bom.xml`) and the
//!   realm defaults to the v1 BOM endpoint.
//! - **All-at-once validation**: every field is checked independently and
//!   each violation produces one error-level diagnostic, so a user fixing
//!   their setup sees all problems in a single run instead of one at a time.
//! - **Injectable diagnostics**: validation reports through a
//!   [`DiagnosticSink`] supplied at construction. The default forwards to
//!   [`tracing`]; tests capture messages with [`MemorySink`].
//! - **Override files**: any subset of fields can be layered in from a
//!   discovered `.dtrack-publish.yaml` file.
//!
//! ## Getting Started
//!
//! ```no_run
//! use dtrack_publish::{upload_url, PublishConfig, Validatable};
//!
//! let mut config = PublishConfig::new("target");
//! config.host = "dtrack.example.com:8081".to_string();
//! config.api_key = "odt_...".to_string();
//! config.project_uuid = "5c4b7c30-1f0a-4e0e-8397-1d4b9f6f63d5".to_string();
//!
//! if config.is_valid() {
//!     println!("uploading to {}", upload_url(&config));
//! } else {
//!     // one error line per invalid field has already been logged
//!     eprintln!("refusing to publish; current settings: {config}");
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod config;
pub mod endpoint;

// Re-export main types for convenience
pub use config::{
    discover_config_file, generate_example_config, generate_json_schema, load_config_file,
    load_or_default, ConfigError, ConfigFileError, DiagnosticSink, FileConfig, MemorySink,
    PublishConfig, PublishConfigBuilder, TracingSink, Validatable,
};
pub use config::{DEFAULT_BOM_RELATIVE_PATH, DEFAULT_REALM, DEFAULT_USE_HTTPS};
pub use endpoint::{upload_url, API_KEY_HEADER};
