//! Public share link parsing.

use url::Url;

/// Host serving public Yandex.Disk share links
pub const PUBLIC_SHARE_HOST: &str = "yadi.sk";

/// Path prefix of folder share links (`https://yadi.sk/d/<key>`)
pub const SHARE_PATH_PREFIX: &str = "/d/";

/// Extract the public resource key from a share link.
///
/// Returns `None` for anything that is not `https://yadi.sk/d/<key>`:
/// unparseable strings, other hosts, other path prefixes and links
/// without a key segment.
pub fn extract_public_key(link: &str) -> Option<String> {
    let link = link.trim();
    let parsed = Url::parse(link).ok()?;

    // Match the authority as written: no port, credentials or case variants
    let (_, rest) = link.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    if authority != PUBLIC_SHARE_HOST || parsed.host_str() != Some(PUBLIC_SHARE_HOST) {
        return None;
    }

    let path = parsed.path();
    if !path.starts_with(SHARE_PATH_PREFIX) {
        return None;
    }

    // "/d/<key>/..." splits into ["", "d", "<key>", ...]
    match path.split('/').nth(2) {
        Some(key) if !key.is_empty() => Some(key.to_string()),
        _ => None,
    }
}
