use super::types::ExtractError;
use crate::html;
use regex::Regex;
use std::sync::LazyLock;

static IFRAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<iframe").unwrap());

static REDIRECT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"url=([^&]+)&").unwrap());

/// Prepare raw input for service detection.
///
/// Embed markup is reduced to its iframe `src`, surrounding whitespace is
/// trimmed, the first `-nocookie` and the first `/www.` are dropped, and a
/// google click-through link is replaced by its decoded `url=` target.
pub fn normalize(raw: &str) -> Result<String, ExtractError> {
    let mut s = if IFRAME_REGEX.is_match(raw) {
        html::extract_src(raw)
    } else {
        raw.to_string()
    };

    s = s.trim().replacen("-nocookie", "", 1).replacen("/www.", "/", 1);

    if s.contains("//google") {
        let redirect = REDIRECT_REGEX
            .captures(&s)
            .map(|caps| decode_uri_component(&caps[1]))
            .transpose()?;
        if let Some(target) = redirect {
            tracing::debug!(redirect = %target, "Followed google redirect");
            s = target;
        }
    }

    Ok(s)
}

/// Strict percent-decoding: a `%` must start a two-digit hex escape and the
/// decoded bytes must be UTF-8. `+` stays literal.
fn decode_uri_component(fragment: &str) -> Result<String, ExtractError> {
    let bytes = fragment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        match bytes.get(i + 1..i + 3) {
            Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
            _ => {
                return Err(ExtractError::Decode {
                    fragment: fragment.to_string(),
                    reason: format!("malformed escape at byte {}", i),
                })
            }
        }
    }

    urlencoding::decode(fragment)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| ExtractError::Decode {
            fragment: fragment.to_string(),
            reason: e.to_string(),
        })
}
