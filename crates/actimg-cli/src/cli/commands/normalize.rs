//! `actimg normalize` – show the lookup path of each URL.

use actimg_core::url_path::normalize_url_path;

pub(crate) fn normalize_line(url: &str) -> String {
    let path = normalize_url_path(url.trim());
    if path.is_empty() {
        format!("{url}\t(unmatchable)")
    } else {
        format!("{url}\t{path}")
    }
}

pub fn run_normalize(urls: &[String]) {
    for url in urls {
        println!("{}", normalize_line(url));
    }
}
