//! Link extraction from HTML documents

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref ANCHOR_HREF: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");
}

/// Extract the `href` targets of every anchor tag in `content`.
///
/// Targets are returned verbatim; filtering to the corpus happens when the
/// corpus is assembled.
pub fn extract_links(content: &str) -> BTreeSet<String> {
    ANCHOR_HREF
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}
