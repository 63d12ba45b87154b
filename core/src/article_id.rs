use std::sync::OnceLock;

use regex::Regex;
use url::Url;

fn embedded_url() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"(?i)https?://[^\s<>"'()\[\]]+"#).expect("static pattern is valid"))
}

/// Pull the article id out of an article URL.
///
/// The first `http(s)://` URL found in `text` is parsed; the id is whatever
/// follows the last `-` of its final path segment, and must be ASCII
/// alphanumeric. Anything else yields `None`.
pub fn extract_article_id(text: &str) -> Option<String> {
    let found = embedded_url().find(text)?;
    let trimmed = found.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?']);
    let url = Url::parse(trimmed).ok()?;

    let last_segment = url.path().rsplit('/').next()?;
    let candidate = last_segment.rsplit('-').next()?;

    if !candidate.is_empty() && candidate.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(candidate.to_string())
    } else {
        None
    }
}
