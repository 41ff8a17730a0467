//! HTML fragment builders.
//!
//! The output shapes here are a byte-for-byte compatibility contract:
//! single-quoted href, no attribute escaping, and a trailing newline on
//! block-level fragments only.

/// Build a heading element. Block-level: carries its own trailing newline.
#[inline]
pub(crate) fn heading(level: usize, text: &str) -> String {
    format!("<h{}>{}</h{}>\n", level, text, level)
}

/// Build a paragraph element. Block-level: carries its own trailing newline.
#[inline]
pub(crate) fn paragraph(text: &str) -> String {
    format!("<p>{}</p>\n", text)
}

/// Build an anchor element.
#[inline]
pub(crate) fn link(text: &str, href: &str) -> String {
    format!("<a href='{}'>{}</a>", href, text)
}

/// Build a bold element.
#[inline]
pub(crate) fn strong(text: &str) -> String {
    format!("<strong>{}</strong>", text)
}

/// Build an italic element.
#[inline]
pub(crate) fn em(text: &str) -> String {
    format!("<em>{}</em>", text)
}
