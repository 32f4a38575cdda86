use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("get-video-id expects a string, got {0}")]
    TypeArgument(String),
    #[error("Could not decode redirect target {fragment:?}: {reason}")]
    Decode { fragment: String, reason: String },
    #[error("No {service} id found in: {input}")]
    PatternMismatch { service: Service, input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Youtube,
    Vimeo,
    Vine,
    Videopress,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::Youtube,
        Service::Vimeo,
        Service::Vine,
        Service::Videopress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Youtube => "youtube",
            Service::Vimeo => "vimeo",
            Service::Vine => "vine",
            Service::Videopress => "videopress",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| service.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown service: {}", s))
    }
}

/// Result of a lookup. Both fields absent means the input belongs to no known service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoId {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
}

impl VideoId {
    pub fn new(service: Service, id: Option<String>) -> Self {
        Self {
            id: id.filter(|id| !id.is_empty()),
            service: Some(service),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.service.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_from_str() {
        assert_eq!("youtube".parse::<Service>(), Ok(Service::Youtube));
        assert_eq!("VideoPress".parse::<Service>(), Ok(Service::Videopress));
        assert!("dailymotion".parse::<Service>().is_err());
    }

    #[test]
    fn test_empty_id_collapses_to_none() {
        let video = VideoId::new(Service::Vine, Some(String::new()));
        assert_eq!(video.id, None);
        assert_eq!(video.service, Some(Service::Vine));
        assert!(!video.is_empty());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        assert_eq!(serde_json::to_string(&VideoId::default()).unwrap(), "{}");

        let video = VideoId::new(Service::Vimeo, Some("76979871".into()));
        assert_eq!(
            serde_json::to_string(&video).unwrap(),
            r#"{"id":"76979871","service":"vimeo"}"#
        );

        let no_id = VideoId::new(Service::Youtube, None);
        assert_eq!(serde_json::to_string(&no_id).unwrap(), r#"{"service":"youtube"}"#);
    }
}
