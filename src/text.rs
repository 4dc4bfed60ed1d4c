//! Helpful utilities for working with text.

use htmlentity::entity::{self, ICodedDataTrait};

/// Converts HTML entities into their single-character equivalents.
///
/// Reddit escapes titles and flair text in its JSON responses, so "&" comes
/// back as "&amp;" and angle brackets as "&lt;"/"&gt;". This function turns
/// those entities back into plain characters and trims leading and trailing
/// whitespace.
///
/// # Examples
///
/// ```
/// use flairtally::text::convert_html_entities;
/// let raw = "Ohio State &amp; Michigan";
/// assert_eq!(convert_html_entities(raw), "Ohio State & Michigan");
/// ```
///
/// ```
/// use flairtally::text::convert_html_entities;
/// let raw = "  A plain title  ";
/// assert_eq!(convert_html_entities(raw), "A plain title");
/// ```
pub fn convert_html_entities(text: &str) -> String {
    let text = text.trim();
    entity::decode(text.as_bytes())
        .to_string()
        .unwrap_or(text.to_string())
}
