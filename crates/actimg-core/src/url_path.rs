//! URL to lookup-path normalization.
//!
//! Activity URLs and anchor hrefs are compared by their host-relative part.
//! Only two shapes produce a key:
//! - `http(s)://host/rest` → `/rest` (query and fragment kept verbatim)
//! - `/rest` → unchanged
//!
//! Everything else (relative paths without a leading slash, other schemes,
//! a bare `https://host`) normalizes to the empty string, which never matches.
//!
//! The scheme/host pattern only matches at the start of the string, so a path
//! carrying a URL in its query (`/redirect?to=https://x/y`) stays as it is
//! rather than being cut down to the embedded URL's path.

use once_cell::sync::Lazy;
use regex::Regex;

static ABSOLUTE_HTTP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://[^/]+(/.*)$").expect("static normalization pattern is valid")
});

/// Returns the host-relative path of `url`, or an empty string if it has none.
pub fn normalize_url_path(url: &str) -> String {
    if let Some(caps) = ABSOLUTE_HTTP.captures(url) {
        if let Some(path) = caps.get(1) {
            return path.as_str().to_string();
        }
    }
    if url.starts_with('/') {
        return url.to_string();
    }
    String::new()
}
