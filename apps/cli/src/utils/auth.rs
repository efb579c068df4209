use keyring::Entry;
use tracing::debug;
use url::Url;

const KEYRING_SERVICE: &str = "pkgsmith";

/// Retrieves the submission token for the given API URL.
///
/// Checks `PKGSMITH_TOKEN`, then the system keyring, then `hosts.toml` in the config
/// directory. `None` means submissions are sent anonymously.
pub fn resolve_token(api_url: &Url) -> Option<String> {
    if let Ok(token) = std::env::var("PKGSMITH_TOKEN") {
        if !token.trim().is_empty() {
            return Some(token.trim().to_string());
        }
    }

    let domain = api_url.host_str().unwrap_or("localhost");

    match Entry::new(KEYRING_SERVICE, domain).and_then(|entry| entry.get_password()) {
        Ok(token) => return Some(token),
        Err(e) => debug!(%domain, error = %e, "No keyring token"),
    }

    let hosts_path = dirs::config_dir()?.join("pkgsmith").join("hosts.toml");
    let content = std::fs::read_to_string(&hosts_path).ok()?;
    token_from_hosts(&content, domain)
}

/// Reads `token` of the `[<domain>]` table of a hosts file.
pub fn token_from_hosts(content: &str, domain: &str) -> Option<String> {
    let hosts: toml::Table = match toml::from_str(content) {
        Ok(hosts) => hosts,
        Err(e) => {
            debug!(error = %e, "Ignoring malformed hosts.toml");
            return None;
        }
    };

    hosts
        .get(domain)?
        .get("token")?
        .as_str()
        .map(str::to_string)
}
