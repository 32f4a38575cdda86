use super::params::strip_parameters;
use regex::Regex;
use std::sync::LazyLock;

static HOST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube|youtu\.be|y2u\.be|i.ytimg\.").unwrap());

static TIME_HASH_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#t=.*$").unwrap());

static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube://|https?://youtu\.be/|http://y2u\.be/").unwrap());

static INLINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/v/|/vi/").unwrap());

static PARAMETER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"v=|vi=").unwrap());

static WEBP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/an_webp/").unwrap());

static EMBED_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/embed/").unwrap());

static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/user/[a-zA-Z0-9]*$").unwrap());

static ATTRIBUTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/attribution_link\?.*v%3D([^%&]*)(%26|&|$)").unwrap());

/// One historical url convention: a trigger and the extractor it guards.
struct Rule {
    name: &'static str,
    matches: fn(&str) -> bool,
    extract: fn(&str) -> Option<String>,
}

/// Checked top to bottom; the first rule whose trigger matches decides the
/// outcome, even when it extracts nothing.
const RULES: &[Rule] = &[
    Rule {
        name: "shortcode",
        matches: |s| SHORTCODE_REGEX.is_match(s),
        extract: |s| segment_after(&SHORTCODE_REGEX, s),
    },
    Rule {
        name: "inline",
        matches: |s| INLINE_REGEX.is_match(s),
        extract: |s| segment_after(&INLINE_REGEX, s),
    },
    Rule {
        name: "parameter",
        matches: |s| PARAMETER_REGEX.is_match(s),
        extract: |s| {
            let value = PARAMETER_REGEX.split(s).nth(1)?;
            let value = value.split('&').next().unwrap_or(value);
            Some(strip_parameters(value).to_string())
        },
    },
    Rule {
        name: "webp",
        matches: |s| WEBP_REGEX.is_match(s),
        extract: |s| segment_after(&WEBP_REGEX, s),
    },
    Rule {
        name: "embed",
        matches: |s| EMBED_REGEX.is_match(s),
        extract: |s| segment_after(&EMBED_REGEX, s),
    },
    Rule {
        name: "username",
        matches: |s| USERNAME_REGEX.is_match(s),
        extract: |_| None,
    },
    Rule {
        name: "user",
        matches: has_user_video_path,
        extract: |s| s.rsplit('/').next().map(|last| strip_parameters(last).to_string()),
    },
    Rule {
        name: "attribution",
        matches: |s| ATTRIBUTION_REGEX.is_match(s),
        extract: |s| {
            let caps = ATTRIBUTION_REGEX.captures(s)?;
            Some(strip_parameters(caps.get(1)?.as_str()).to_string())
        },
    },
];

pub struct YoutubeExtractor;

impl YoutubeExtractor {
    /// Check if a normalized string points at YouTube
    pub fn matches(s: &str) -> bool {
        HOST_REGEX.is_match(s)
    }

    pub fn extract(s: &str) -> Option<String> {
        let s = TIME_HASH_REGEX.replace(s, "");

        let rule = RULES.iter().find(|rule| (rule.matches)(&s))?;
        tracing::debug!(rule = rule.name, "Matched youtube url rule");
        (rule.extract)(&s)
    }
}

/// Text between the first and second occurrence of `marker`, stripped.
fn segment_after(marker: &Regex, s: &str) -> Option<String> {
    marker
        .split(s)
        .nth(1)
        .map(|segment| strip_parameters(segment).to_string())
}

/// `/user/` with no `videos` later on the same line.
fn has_user_video_path(s: &str) -> bool {
    s.match_indices("/user/").any(|(start, marker)| {
        let rest = &s[start + marker.len()..];
        let line = rest.split('\n').next().unwrap_or(rest);
        !line.contains("videos")
    })
}
