use scraper::{Html, Selector};

/// Read `name` from the first `<iframe>` in `markup` that carries it.
///
/// Markup without such a tag is returned unchanged.
pub fn extract_attribute(markup: &str, name: &str) -> String {
    let Ok(selector) = Selector::parse("iframe") else {
        return markup.to_string();
    };
    let fragment = Html::parse_fragment(markup);
    let value = fragment
        .select(&selector)
        .find_map(|iframe| iframe.value().attr(name))
        .map(|value| value.to_string());
    value.unwrap_or_else(|| markup.to_string())
}

pub fn extract_src(markup: &str) -> String {
    extract_attribute(markup, "src")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_src_single_quotes() {
        let markup = "<iframe src='https://www.youtube.com/embed/M7lc1UVf-VE'></iframe>";
        assert_eq!(extract_src(markup), "https://www.youtube.com/embed/M7lc1UVf-VE");
    }

    #[test]
    fn test_extract_src_with_other_attributes() {
        let markup = r#"<IFRAME width="640" height="360" SRC="https://player.vimeo.com/video/97682350" frameborder="0" allowfullscreen></IFRAME>"#;
        assert_eq!(extract_src(markup), "https://player.vimeo.com/video/97682350");
    }

    #[test]
    fn test_missing_tag_returns_markup() {
        let markup = "<div>no frames here</div>";
        assert_eq!(extract_src(markup), markup);
        assert_eq!(extract_attribute("<iframe></iframe>", "src"), "<iframe></iframe>");
    }
}
