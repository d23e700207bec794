//! Description-text formatter.
//!
//! [`format_markup`] turns raw description text into a display string with
//! styling markers:
//! 1. `**bold**` spans become gold emphasis spans
//! 2. element keywords ("Pyro DMG", "AoE Cryo", ...) become element-colored
//!    spans
//! 3. newlines become line breaks
//!
//! The passes run in that order. Keyword scanning never looks inside the
//! markers a previous pass inserted, since those only contain lower-case
//! class names.

pub mod bold;
pub mod element;
pub mod style;

pub use element::{ElementMatch, find_element_span, wrap_elements};

/// Formats description text for display.
///
/// ```
/// # use planner_markup::format_markup;
/// assert_eq!(
///     format_markup("**Hello** Pyro DMG"),
///     r#"<span class="text-gold">Hello</span> <span class="text-pyro">Pyro DMG</span>"#,
/// );
/// ```
pub fn format_markup(text: &str) -> String {
    let text = bold::replace_bold(text);
    let text = element::wrap_elements(&text);
    style::replace_newlines(&text)
}
