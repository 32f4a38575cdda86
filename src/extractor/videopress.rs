use super::types::{ExtractError, Service};
use regex::Regex;
use std::sync::LazyLock;

static EMBED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"embed/([A-Za-z0-9_]{8})").unwrap());

static SHORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/v/([A-Za-z0-9_]{8})").unwrap());

pub struct VideoPressExtractor;

impl VideoPressExtractor {
    pub fn matches(s: &str) -> bool {
        s.contains("videopress")
    }

    /// Ids are exactly eight word characters. An `embed` url without one is
    /// an error rather than a miss.
    pub fn extract(s: &str) -> Result<Option<String>, ExtractError> {
        if s.contains("embed") {
            let caps = EMBED_REGEX
                .captures(s)
                .ok_or_else(|| ExtractError::PatternMismatch {
                    service: Service::Videopress,
                    input: s.to_string(),
                })?;
            return Ok(Some(caps[1].to_string()));
        }

        Ok(SHORT_REGEX.captures(s).map(|caps| caps[1].to_string()))
    }
}
