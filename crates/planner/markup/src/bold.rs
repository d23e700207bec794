//! `**bold**` span replacement.

use crate::style::{EMPHASIS_CLASS, span};

const DELIMITER: &str = "**";

/// Replaces every `**text**` span whose inner text is non-empty and free of
/// `*` with an emphasis span. Unmatched delimiters are kept as-is.
pub fn replace_bold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(DELIMITER) {
        let after_open = &rest[open + DELIMITER.len()..];
        let inner_len = after_open.find('*').unwrap_or(after_open.len());

        if inner_len > 0 && after_open[inner_len..].starts_with(DELIMITER) {
            out.push_str(&rest[..open]);
            out.push_str(&span(EMPHASIS_CLASS, &after_open[..inner_len]));
            rest = &after_open[inner_len + DELIMITER.len()..];
        } else {
            // Retry one character later, as `***x**` still bolds `x`.
            out.push_str(&rest[..open + 1]);
            rest = &rest[open + 1..];
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bolds_each_span() {
        assert_eq!(
            replace_bold("**A** and **B**"),
            r#"<span class="text-gold">A</span> and <span class="text-gold">B</span>"#
        );
    }

    #[test]
    fn empty_or_unclosed_spans_are_kept() {
        assert_eq!(replace_bold("****"), "****");
        assert_eq!(replace_bold("**open"), "**open");
        assert_eq!(replace_bold("a * b"), "a * b");
    }

    #[test]
    fn extra_leading_star_is_kept() {
        assert_eq!(replace_bold("***x**"), r#"*<span class="text-gold">x</span>"#);
    }

    #[test]
    fn inner_text_may_span_lines() {
        assert_eq!(
            replace_bold("**a\nb**"),
            "<span class=\"text-gold\">a\nb</span>"
        );
    }
}
