//! Default values for the publish configuration.

// ============================================================================
// Default Value Constants
// ============================================================================

/// Default API path segment the BOM is uploaded to.
pub const DEFAULT_REALM: &str = "api/v1/bom";

/// Default BOM artifact location, relative to the build output directory.
pub const DEFAULT_BOM_RELATIVE_PATH: &str = "reports/bom.xml";

/// Default scheme choice for the upload URL.
pub const DEFAULT_USE_HTTPS: bool = true;

// ============================================================================
// Tests
// ============================================================================
