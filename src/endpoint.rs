//! Upload endpoint assembly for the Dependency-Track REST API.
//!
//! The actual HTTP exchange lives with the caller; this module only turns a
//! [`PublishConfig`] into the pieces a request needs.

use crate::config::PublishConfig;

/// Header carrying the API key on upload requests.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Assemble the URL the BOM is uploaded to.
///
/// Host and realm are stripped of leading and trailing slashes so inputs like
/// `"dtrack.example.com/"` and `"/api/v1/bom"` still join cleanly, then the
/// two are combined as `{scheme}://{host}/{realm}` with the scheme taken from
/// [`PublishConfig::use_https`].
#[must_use]
pub fn upload_url(config: &PublishConfig) -> String {
    let scheme = if config.use_https { "https" } else { "http" };
    format!(
        "{scheme}://{}/{}",
        trim_slashes(&config.host),
        trim_slashes(&config.realm)
    )
}

fn trim_slashes(value: &str) -> &str {
    value.trim_matches('/')
}

// ============================================================================
// Tests
// ============================================================================
