// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Helpful utilities for working with text.

use htmlentity::entity::{self, ICodedDataTrait};
use itertools::Itertools;

/// Suffix appended to text that has been cut short by [`preview()`].
pub const ELLIPSIS: &str = " ...";

/// Converts HTML entities into their single-character equivalents.
///
/// For example, Reddit returns "&" as "&amp;", ">" as "&gt;",
/// and "<" as "&lt;"; this function will convert those HTML
/// entities into single, human-readable characters. Whitespace is
/// left as it is.
///
/// # Examples
///
/// ```
/// use subfind::text::convert_html_entities;
/// let raw = "&lt;This &amp; That&gt;";
/// let converted = convert_html_entities(raw);
/// assert_eq!(converted, "<This & That>");
/// ```
///
/// ```
/// use subfind::text::convert_html_entities;
/// let raw = "  A Plaintext Post ";
/// let converted = convert_html_entities(raw);
/// assert_eq!(converted, raw);
/// ```
pub fn convert_html_entities(text: &str) -> String {
    entity::decode(text.as_bytes())
        .to_string()
        .unwrap_or(text.to_string())
}

/// Replaces every run of whitespace with a single space.
///
/// Leading and trailing whitespace is removed entirely.
///
/// # Examples
///
/// ```
/// use subfind::text::collapse_whitespace;
/// let collapsed = collapse_whitespace("  one\n\ntwo\t three ");
/// assert_eq!(collapsed, "one two three");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().join(" ")
}

/// A short preview of `text`, suitable for showing beneath a post.
///
/// Whitespace is collapsed first. If the collapsed text is longer than
/// `max_length` characters, it is cut to `max_length` characters, any
/// trailing space left by the cut is dropped, and [`ELLIPSIS`] is appended.
///
/// Text that is empty or only whitespace produces an empty preview.
///
/// # Examples
///
/// ```
/// use subfind::text::preview;
/// assert_eq!(preview("short  and\nsweet", 200), "short and sweet");
/// assert_eq!(preview("one two three", 8), "one two ...");
/// assert_eq!(preview("   ", 200), "");
/// ```
pub fn preview(text: &str, max_length: usize) -> String {
    let text = collapse_whitespace(text);
    if text.chars().count() <= max_length {
        text
    } else {
        let cut: String = text.chars().take(max_length).collect();
        format!("{}{ELLIPSIS}", cut.trim_end())
    }
}
