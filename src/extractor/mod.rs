mod normalize;
mod params;
mod types;
mod videopress;
mod vimeo;
mod vine;
mod youtube;

pub use normalize::normalize;
pub use params::strip_parameters;
pub use types::*;

use serde_json::Value;
use videopress::VideoPressExtractor;
use vimeo::VimeoExtractor;
use vine::VineExtractor;
use youtube::YoutubeExtractor;

/// Get the id and service from a video url or iframe embed snippet
pub fn extract_video_id(input: &str) -> Result<VideoId, ExtractError> {
    let normalized = normalize(input)?;
    tracing::debug!(input = %normalized, "Normalized input");

    let Some(service) = detect_service(&normalized) else {
        tracing::debug!("No known service in input");
        return Ok(VideoId::default());
    };

    let id = match service {
        Service::Youtube => YoutubeExtractor::extract(&normalized),
        Service::Vimeo => VimeoExtractor::extract(&normalized),
        Service::Vine => VineExtractor::extract(&normalized),
        Service::Videopress => VideoPressExtractor::extract(&normalized)?,
    };

    tracing::debug!(service = %service, id = ?id, "Extracted video id");
    Ok(VideoId::new(service, id))
}

/// Same as [`extract_video_id`] for untyped input; anything but a string is rejected.
pub fn extract_video_id_value(input: &Value) -> Result<VideoId, ExtractError> {
    match input {
        Value::String(s) => extract_video_id(s),
        other => Err(ExtractError::TypeArgument(json_kind(other).to_string())),
    }
}

/// Which service a normalized string belongs to. Earlier services win.
pub fn detect_service(normalized: &str) -> Option<Service> {
    if YoutubeExtractor::matches(normalized) {
        Some(Service::Youtube)
    } else if VimeoExtractor::matches(normalized) {
        Some(Service::Vimeo)
    } else if VineExtractor::matches(normalized) {
        Some(Service::Vine)
    } else if VideoPressExtractor::matches(normalized) {
        Some(Service::Videopress)
    } else {
        None
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
