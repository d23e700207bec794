//! Element keyword coloring.
//!
//! A keyword span is `(AoE<sep>)* <keyword> (<sep><qualifier>)*`, where
//! `<sep>` is a whitespace character or `-`. A span is rejected when:
//! - it is preceded by a digit and a separator ("2 Pyro", "3-Hydro"),
//! - it is followed by `[A-Za-z0-9_-]`,
//! - it is followed by a separator and an excluded word ("Pyro Swirl").
//!
//! Qualifiers are taken greedily and given back one at a time until the
//! trailing checks pass.

use planner_core::Element;

use crate::style::{element_class, span};

/// Keywords and the element whose color they take, in match priority order.
const KEYWORDS: [(&str, Element); 9] = [
    ("Pyro", Element::Pyro),
    ("Hydro", Element::Hydro),
    // Mona
    ("Wet", Element::Hydro),
    ("Dendro", Element::Dendro),
    ("Electro", Element::Electro),
    // Fischl
    ("Freikugel", Element::Electro),
    ("Anemo", Element::Anemo),
    ("Cryo", Element::Cryo),
    ("Geo", Element::Geo),
];

/// Words allowed before the keyword inside the span.
const LEADING_WORDS: [&str; 1] = ["AoE"];

/// Words allowed after the keyword inside the span. "Reactions" is listed
/// before "Reaction" so the longer form wins.
const QUALIFIERS: [&str; 7] = [
    "DMG",
    "RES",
    "Bonus",
    "Infusion",
    "Construct",
    "related Elemental Reactions",
    "related Elemental Reaction",
];

/// Following words that turn the keyword into a different term.
const EXCLUDED_WORDS: [&str; 3] = ["Swirl", "Explosion", "Pearl"];

/// A matched keyword span: byte range within the scanned text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementMatch {
    pub start: usize,
    pub end: usize,
    pub element: Element,
}

/// Wraps every keyword span in an element-colored span.
pub fn wrap_elements(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(ch) = text[pos..].chars().next() {
        match find_element_span(text, pos) {
            Some(m) => {
                out.push_str(&span(&element_class(m.element), &text[m.start..m.end]));
                pos = m.end;
            }
            None => {
                out.push(ch);
                pos += ch.len_utf8();
            }
        }
    }

    out
}

/// Tries to match a keyword span starting exactly at byte `start`.
pub fn find_element_span(text: &str, start: usize) -> Option<ElementMatch> {
    if preceded_by_number(&text[..start]) {
        return None;
    }

    let mut pos = start;
    while let Some(len) = leading_word_at(&text[pos..]) {
        pos += len;
    }

    let (keyword, element) = KEYWORDS
        .into_iter()
        .find(|(keyword, _)| text[pos..].starts_with(keyword))?;

    let end = qualified_end(text, pos + keyword.len())?;

    Some(ElementMatch {
        start,
        end,
        element,
    })
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '-'
}

/// Byte length of a separator at the start of `text`.
fn separator_len(text: &str) -> Option<usize> {
    text.chars()
        .next()
        .filter(|ch| is_separator(*ch))
        .map(char::len_utf8)
}

/// `true` when `before` ends with a digit followed by a separator.
fn preceded_by_number(before: &str) -> bool {
    let mut chars = before.chars().rev();
    matches!(
        (chars.next(), chars.next()),
        (Some(sep), Some(digit)) if is_separator(sep) && digit.is_ascii_digit()
    )
}

/// Byte length of a leading word plus its separator at the start of `text`.
fn leading_word_at(text: &str) -> Option<usize> {
    LEADING_WORDS.into_iter().find_map(|word| {
        let rest = text.strip_prefix(word)?;
        Some(word.len() + separator_len(rest)?)
    })
}

/// Longest end position reachable by appending qualifiers after `pos` that
/// still passes the trailing checks.
fn qualified_end(text: &str, pos: usize) -> Option<usize> {
    if let Some(sep) = separator_len(&text[pos..]) {
        let after_sep = pos + sep;
        let longer = QUALIFIERS
            .into_iter()
            .filter(|qualifier| text[after_sep..].starts_with(qualifier))
            .find_map(|qualifier| qualified_end(text, after_sep + qualifier.len()));
        if longer.is_some() {
            return longer;
        }
    }

    is_valid_end(&text[pos..]).then_some(pos)
}

fn is_valid_end(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        None => true,
        Some(ch) if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' => false,
        Some(ch) if is_separator(ch) => {
            let after = chars.as_str();
            !EXCLUDED_WORDS.iter().any(|word| after.starts_with(word))
        }
        Some(_) => true,
    }
}
