//! URL validation and normalization.
//!
//! The normalized form is the canonical key for deduplication: two inputs
//! that normalize to the same string map to the same record.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Normalizes a raw user-supplied URL to its canonical form.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed; a blank input is rejected
/// 2. `https://` is prepended when no `http://`/`https://` scheme is
///    present (scheme sniffing is case-insensitive)
/// 3. The result must parse as an absolute URL with a host
/// 4. The canonical string is the parsed URL's serialization: hostname
///    lowercased, an empty path rendered as `/`
///
/// Anything that is not plain HTTP(S) after prefixing fails to parse
/// (`javascript:`, `data:` and friends produce an invalid authority), so
/// dangerous schemes cannot round-trip through here.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input,
/// [`UrlNormalizationError::InvalidFormat`] for anything `Url` rejects,
/// and [`UrlNormalizationError::MissingHost`] for host-less URLs.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("google.com").unwrap(), "https://google.com/");
/// assert_eq!(
///     normalize_url("  https://EXAMPLE.com/Path  ").unwrap(),
///     "https://example.com/Path"
/// );
/// ```
pub fn normalize_url(raw: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let lowered = trimmed.to_ascii_lowercase();
    let has_scheme = lowered.starts_with("http://") || lowered.starts_with("https://");

    let candidate = if has_scheme {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url =
        Url::parse(&candidate).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(UrlNormalizationError::InvalidFormat(format!(
                "unsupported scheme '{other}'"
            )));
        }
    }

    if url.host_str().is_none() {
        return Err(UrlNormalizationError::MissingHost);
    }

    Ok(url.to_string())
}
