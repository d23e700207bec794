//! Styling markers emitted by the formatter.

use planner_core::Element;

/// Class applied to `**bold**` spans.
pub const EMPHASIS_CLASS: &str = "text-gold";

pub const LINE_BREAK: &str = "<br>";

/// Wraps `inner` in a styled span.
pub fn span(class: &str, inner: &str) -> String {
    format!(r#"<span class="{class}">{inner}</span>"#)
}

/// Class used to color an element keyword.
pub fn element_class(element: Element) -> String {
    format!("text-{}", element.slug())
}

pub fn replace_newlines(text: &str) -> String {
    text.replace('\n', LINE_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_classes_follow_slug() {
        assert_eq!(element_class(Element::Electro), "text-electro");
        assert_eq!(span("text-geo", "Geo"), r#"<span class="text-geo">Geo</span>"#);
    }

    #[test]
    fn every_newline_becomes_a_break() {
        assert_eq!(replace_newlines("a\nb\n\nc"), "a<br>b<br><br>c");
    }
}
