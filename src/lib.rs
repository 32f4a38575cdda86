//! Extract the video id and hosting service from YouTube, Vimeo, Vine and
//! VideoPress urls or iframe embed snippets.
//!
//! ```
//! use get_video_id::{extract_video_id, Service};
//!
//! let video = extract_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
//! assert_eq!(video.id.as_deref(), Some("dQw4w9WgXcQ"));
//! assert_eq!(video.service, Some(Service::Youtube));
//! ```

#[cfg(feature = "cli")]
pub mod config;
mod extractor;
pub mod html;
#[cfg(feature = "cli")]
pub mod logger;

pub use extractor::{
    detect_service, extract_video_id, extract_video_id_value, normalize, strip_parameters,
    ExtractError, Service, VideoId,
};
