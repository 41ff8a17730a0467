//! Line classification into block-level HTML fragments.
//!
//! Each input line is classified independently: a run of leading `#`
//! markers makes a heading, any other non-empty line makes a paragraph.
//! Heading classification always wins, so it is tested first.

use crate::html;
use crate::patterns::{HEADING, PARAGRAPH};

/// Maximum heading level; deeper marker runs collapse to this.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Classify a single input line into a block-level fragment.
///
/// Returns `None` when the line produces no output (an empty line).
///
/// Heading text is the remainder of the line with the marker run and a
/// single following separator space stripped, then trimmed of
/// surrounding whitespace. Paragraph text is the entire line, verbatim.
/// A marker-only line such as `"###"` is a heading with empty text.
pub fn classify(line: &str) -> Option<String> {
    if let Some(caps) = HEADING.captures(line) {
        let level = caps[1].len().min(MAX_HEADING_LEVEL);
        let rest = &caps[2];
        let text = rest.strip_prefix(' ').unwrap_or(rest).trim();
        return Some(html::heading(level, text));
    }

    if PARAGRAPH.is_match(line) {
        return Some(html::paragraph(line));
    }

    None
}
