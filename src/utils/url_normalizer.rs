//! URL normalization and sanitization utilities.
//!
//! Ensures consistent URL representation by normalizing hostnames, removing
//! fragments, and handling default ports. Scheme-less input such as
//! `example.com/page` is coerced to `http://example.com/page` before
//! validation.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Normalizes a URL to a canonical form.
///
/// # Normalization Rules
///
/// 1. **Scheme coercion**: input without a scheme gets `http://` prepended
/// 2. **Protocol**: only HTTP and HTTPS are allowed
/// 3. **Hostname**: converted to lowercase
/// 4. **Default ports**: removed (80 for HTTP, 443 for HTTPS)
/// 5. **Fragments**: removed (e.g., `#section`)
/// 6. **Query parameters**: preserved as-is
/// 7. **Path**: preserved with case sensitivity
///
/// # Security
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`,
/// `file:`, etc.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
///
/// # Examples
///
/// ```ignore
/// // Scheme coercion
/// assert_eq!(
///     normalize_url("example.com/page").unwrap(),
///     "http://example.com/page"
/// );
///
/// // Case normalization and default port removal
/// assert_eq!(
///     normalize_url("HTTPS://EXAMPLE.COM:443/Path").unwrap(),
///     "https://example.com/Path"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let mut url = match Url::parse(input) {
        Ok(url) => url,
        // Bare hostnames parse as relative URLs; retry with a scheme the way
        // a browser address bar would.
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("http://{input}"))
            .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?,
        Err(e) => return Err(UrlNormalizationError::InvalidFormat(e.to_string())),
    };

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        url.set_host(Some(&host_lowercase)).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to set normalized host".to_string())
        })?;
    }

    url.set_fragment(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to remove default port".to_string())
        })?;
    }

    Ok(url.to_string())
}
