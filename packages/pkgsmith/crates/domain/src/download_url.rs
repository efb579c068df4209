use thiserror::Error;
use url::Url;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid download URL '{0}'. Make sure you enter a valid fully qualified download URL.")]
pub struct InvalidDownloadUrl(pub String);

/// Parses an operator-supplied download location.
///
/// Accepts only well-formed absolute URLs with a host. Input containing whitespace or
/// control characters is rejected rather than silently percent-encoded.
pub fn parse_download_url(input: &str) -> Result<Url, InvalidDownloadUrl> {
    let invalid = || InvalidDownloadUrl(input.to_string());

    if input.is_empty() || input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid());
    }

    let url = Url::parse(input).map_err(|_| invalid())?;

    if url.cannot_be_a_base() || url.host_str().map_or(true, str::is_empty) {
        return Err(invalid());
    }

    Ok(url)
}
