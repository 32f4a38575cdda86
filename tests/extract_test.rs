use get_video_id::{extract_video_id, extract_video_id_value, ExtractError, Service, VideoId};
use serde_json::json;

fn video(service: Service, id: &str) -> VideoId {
    VideoId {
        id: Some(id.to_string()),
        service: Some(service),
    }
}

fn assert_all(inputs: &[&str], expected: VideoId) {
    for input in inputs {
        assert_eq!(extract_video_id(input).unwrap(), expected, "input: {}", input);
    }
}

#[test]
fn test_youtube_corpus() {
    assert_all(
        &[
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "http://youtu.be/dQw4w9WgXcQ?feature=youtu.be",
            "http://y2u.be/dQw4w9WgXcQ",
            "youtube://dQw4w9WgXcQ",
            "http://www.youtube.com/v/dQw4w9WgXcQ?version=3&autohide=1",
            "http://www.youtube.com/watch?feature=player_embedded&v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123",
            "http://www.youtube.com/watch?vi=dQw4w9WgXcQ",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?rel=0",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg",
            "https://i.ytimg.com/an_webp/dQw4w9WgXcQ/mqdefault_6s.webp?du=3000",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ#t=1m30s",
            "http://www.youtube.com/user/RickAstleyVEVO#p/a/u/1/dQw4w9WgXcQ",
            "http://www.youtube.com/attribution_link?a=JdfC0C9V6ZI&u=%2Fwatch%3Fv%3DdQw4w9WgXcQ%26feature%3Dshare",
            "  https://youtu.be/dQw4w9WgXcQ\n",
        ],
        video(Service::Youtube, "dQw4w9WgXcQ"),
    );
}

#[test]
fn test_youtube_embed_markup() {
    assert_eq!(
        extract_video_id("<iframe src='https://www.youtube.com/embed/M7lc1UVf-VE'></iframe>")
            .unwrap(),
        video(Service::Youtube, "M7lc1UVf-VE")
    );
    assert_eq!(
        extract_video_id(
            r#"<iframe width="560" height="315" src="https://www.youtube-nocookie.com/embed/M7lc1UVf-VE" frameborder="0" allowfullscreen></iframe>"#
        )
        .unwrap(),
        video(Service::Youtube, "M7lc1UVf-VE")
    );
}

#[test]
fn test_youtube_without_id() {
    let expected = VideoId {
        id: None,
        service: Some(Service::Youtube),
    };
    assert_eq!(extract_video_id("https://www.youtube.com/user/someuser").unwrap(), expected);
    assert_eq!(extract_video_id("https://www.youtube.com").unwrap(), expected);
    assert_eq!(extract_video_id("https://youtu.be/").unwrap(), expected);
}

#[test]
fn test_google_redirect() {
    let url = "https://www.google.com/url?sa=t&source=web\
               &url=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3DdQw4w9WgXcQ&ved=0ah";
    assert_eq!(extract_video_id(url).unwrap(), video(Service::Youtube, "dQw4w9WgXcQ"));

    let url = "https://google.com/url?url=https%3A%2F%2Fvimeo.com%2F76979871&usg=x";
    assert_eq!(extract_video_id(url).unwrap(), video(Service::Vimeo, "76979871"));
}

#[test]
fn test_google_redirect_malformed() {
    let err = extract_video_id("https://google.com/url?url=https%3A%2F%2Fyoutu.be%2F%G1&usg=x")
        .unwrap_err();
    assert!(matches!(err, ExtractError::Decode { .. }));
}

#[test]
fn test_vimeo_corpus() {
    assert_all(
        &[
            "https://vimeo.com/76979871",
            "http://vimeo.com/76979871?autoplay=1",
            "https://www.vimeo.com/76979871#comments",
            "https://player.vimeo.com/video/76979871",
            "https://player.vimeo.com/video/76979871?title=0&byline=0",
            "https://vimeo.com/channels/staffpicks/76979871",
            "https://vimeo.com/groups/shortfilms/videos/76979871",
            "https://vimeo.com/album/2222222/video/76979871",
            "https://vimeo.com/moogaloop.swf?clip_id=76979871&server=vimeo.com",
            r#"<iframe src="https://player.vimeo.com/video/76979871" width="640" height="360"></iframe>"#,
        ],
        video(Service::Vimeo, "76979871"),
    );
}

#[test]
fn test_vine_and_videopress() {
    assert_all(
        &["https://vine.co/v/hW6Kee9effb", "https://vine.co/v/hW6Kee9effb/embed/simple"],
        video(Service::Vine, "hW6Kee9effb"),
    );
    assert_all(
        &[
            "https://videopress.com/v/zcnJVzQF",
            "https://videopress.com/embed/zcnJVzQF?hd=0",
            r#"<iframe width="560" height="315" src="https://videopress.com/embed/zcnJVzQF"></iframe>"#,
        ],
        video(Service::Videopress, "zcnJVzQF"),
    );
}

#[test]
fn test_videopress_embed_without_id() {
    let err = extract_video_id("https://videopress.com/embed/short").unwrap_err();
    assert!(matches!(
        err,
        ExtractError::PatternMismatch {
            service: Service::Videopress,
            ..
        }
    ));
}

#[test]
fn test_unknown_service() {
    let video = extract_video_id("https://example.com/not-a-video").unwrap();
    assert_eq!(video, VideoId::default());
    assert_eq!(serde_json::to_value(&video).unwrap(), json!({}));
}

#[test]
fn test_non_string_input() {
    for value in [json!(42), json!(true), json!(["https://youtu.be/dQw4w9WgXcQ"]), json!({})] {
        assert!(matches!(
            extract_video_id_value(&value),
            Err(ExtractError::TypeArgument(_))
        ));
    }
    assert_eq!(
        extract_video_id_value(&json!("https://vimeo.com/76979871")).unwrap(),
        video(Service::Vimeo, "76979871")
    );
}

#[test]
fn test_ids_have_no_delimiters() {
    let inputs = [
        "https://youtu.be/dQw4w9WgXcQ?t=4",
        "https://www.youtube.com/v/dQw4w9WgXcQ/extra",
        "https://www.youtube.com/embed/dQw4w9WgXcQ&autoplay=1",
        "https://vimeo.com/channels/staffpicks/76979871?x=1#y",
    ];
    for input in inputs {
        let id = extract_video_id(input).unwrap().id.unwrap();
        assert!(!id.contains(['?', '/', '&', '#']), "{} -> {}", input, id);
    }
}

#[test]
fn test_stripper_check_order_can_leave_delimiters() {
    assert_eq!(
        extract_video_id("https://youtu.be/dQw4w9WgXcQ/extra?x").unwrap(),
        video(Service::Youtube, "dQw4w9WgXcQ/extra")
    );
    assert_eq!(
        extract_video_id("https://vimeo.com/groups/x?clip_id=5").unwrap(),
        video(Service::Vimeo, "x?clip_id=5")
    );
}
