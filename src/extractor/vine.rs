use regex::Regex;
use std::sync::LazyLock;

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https://vine\.co/v/([a-zA-Z0-9]*)/?").unwrap());

pub struct VineExtractor;

impl VineExtractor {
    pub fn matches(s: &str) -> bool {
        s.contains("vine")
    }

    pub fn extract(s: &str) -> Option<String> {
        URL_REGEX
            .captures(s)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}
