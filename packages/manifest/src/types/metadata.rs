//! Rules for package identity fields.

/// Returns true when `id` is a valid package identifier.
///
/// Identifiers are lowercase ASCII words of `[a-z0-9]` separated by single `-`, `.` or `_`
/// (e.g. `vlc`, `7zip.7zip`, `visual-studio-code`).
pub fn is_valid_package_id(id: &str) -> bool {
    if id.is_empty() || id.len() > 128 {
        return false;
    }

    let mut previous_was_separator = true;
    for c in id.chars() {
        match c {
            'a'..='z' | '0'..='9' => previous_was_separator = false,
            '-' | '.' | '_' => {
                if previous_was_separator {
                    return false;
                }
                previous_was_separator = true;
            }
            _ => return false,
        }
    }

    !previous_was_separator
}

/// Derives a package identifier from a display name.
///
/// `"Visual Studio Code"` becomes `visual-studio-code`.
pub fn package_id_from_name(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            id.push(c.to_ascii_lowercase());
        } else if !id.is_empty() && !id.ends_with('-') {
            id.push('-');
        }
    }

    while id.ends_with('-') {
        id.pop();
    }
    id
}

/// Returns true when `hash` is a 64 character hex SHA-256 digest.
pub fn is_valid_sha256(hash: &str) -> bool {
    hash.len() == 64 && hash.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert!(is_valid_package_id("vlc"));
        assert!(is_valid_package_id("7zip.7zip"));
        assert!(is_valid_package_id("visual-studio-code"));
        assert!(is_valid_package_id("node_js"));
    }

    #[test]
    fn test_invalid_ids() {
        assert!(!is_valid_package_id(""));
        assert!(!is_valid_package_id("VLC"));
        assert!(!is_valid_package_id("-vlc"));
        assert!(!is_valid_package_id("vlc-"));
        assert!(!is_valid_package_id("vlc--player"));
        assert!(!is_valid_package_id("vlc player"));
    }

    #[test]
    fn test_id_from_name() {
        assert_eq!(package_id_from_name("Visual Studio Code"), "visual-studio-code");
        assert_eq!(package_id_from_name("  Notepad++ "), "notepad");
        assert_eq!(package_id_from_name("7-Zip"), "7-zip");
        assert!(is_valid_package_id(&package_id_from_name("Git (64 bit)")));
    }

    #[test]
    fn test_sha256_format() {
        assert!(is_valid_sha256(&"a".repeat(64)));
        assert!(!is_valid_sha256(&"a".repeat(63)));
        assert!(!is_valid_sha256(&"z".repeat(64)));
    }
}
