//! Scheme prefixing for resolved URLs.
//!
//! Stored URLs are kept exactly as submitted; a scheme is only added to the
//! value handed back to the client so redirects have somewhere to go.

/// Returns the URL with a scheme prefix guaranteed.
///
/// URLs already starting with `http://` or `https://` pass through untouched;
/// anything else gets `https://` prepended. Callers must not write the result
/// back to storage.
pub fn ensure_scheme(original_url: &str) -> String {
    if original_url.starts_with("http://") || original_url.starts_with("https://") {
        original_url.to_string()
    } else {
        format!("https://{original_url}")
    }
}
