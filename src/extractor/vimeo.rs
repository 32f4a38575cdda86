use regex::Regex;
use std::sync::LazyLock;

static PRIMARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://vimeo\.com/([0-9]+)").unwrap());

// Dots in the player/channels alternatives match any character.
static PATH_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)https?://player.vimeo.com/video/[0-9]+$|https?://vimeo.com/channels|groups|album")
        .unwrap()
});

pub struct VimeoExtractor;

impl VimeoExtractor {
    pub fn matches(s: &str) -> bool {
        s.contains("vimeo")
    }

    pub fn extract(s: &str) -> Option<String> {
        let s = s.split('#').next().unwrap_or(s);
        let s = if s.contains("clip_id=") {
            s
        } else {
            s.split('?').next().unwrap_or(s)
        };

        if let Some(caps) = PRIMARY_REGEX.captures(s) {
            return Some(caps[1].to_string());
        }

        if PATH_ID_REGEX.is_match(s) {
            return s
                .split('/')
                .filter(|segment| !segment.is_empty())
                .last()
                .map(|segment| segment.to_string());
        }

        let (_, clip) = s.split_once("clip_id=")?;
        clip.split('&').next().map(|id| id.to_string())
    }
}
