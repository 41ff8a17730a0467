//! Fixed-point inline span rewriting.
//!
//! The rewriter scans an accumulated HTML buffer for inline markup
//! spans and replaces them with their HTML elements, repeating until a
//! scan finds no further matches. Link rewriting runs to its own fixed
//! point before emphasis rewriting; within emphasis, bold-italic beats
//! bold beats italic on every pass.
//!
//! Termination is guaranteed: each step consumes marker characters into
//! element tags that contain no markers, so the count of unresolved
//! markers strictly shrinks. Unmatched markers are left untouched.

use regex::{Captures, Regex};

use crate::html;
use crate::patterns::{EM, LINK, STRONG, STRONG_EM};

/// One rewrite step: find the first match of `pattern` and replace
/// every occurrence of that exact matched substring in the buffer.
///
/// Returns `None` when the pattern no longer matches, which is the
/// fixed-point signal for the caller's loop.
fn rewrite_step<F>(html: &str, pattern: &Regex, build: F) -> Option<String>
where
    F: FnOnce(&Captures) -> String,
{
    let caps = pattern.captures(html)?;
    let replacement = build(&caps);
    Some(html.replace(&caps[0], &replacement))
}

/// Rewrite all `[text](destination)` spans to anchor elements.
///
/// Runs to fixed point. Anchors contain no bracket or paren syntax, so
/// replacements never re-trigger the link pattern.
pub fn rewrite_links(mut html: String) -> String {
    while let Some(next) = rewrite_step(&html, &LINK, |caps| html::link(&caps[1], &caps[2])) {
        html = next;
    }
    html
}

/// Rewrite all emphasis spans to bold/italic elements.
///
/// Runs to fixed point, testing bold-italic, then bold, then italic on
/// each pass. No well-formedness validation: overlapping or unbalanced
/// markers follow plain non-greedy matching semantics.
pub fn rewrite_emphasis(mut html: String) -> String {
    loop {
        let next = rewrite_step(&html, &STRONG_EM, |caps| html::strong(&html::em(&caps[1])))
            .or_else(|| rewrite_step(&html, &STRONG, |caps| html::strong(&caps[1])))
            .or_else(|| rewrite_step(&html, &EM, |caps| html::em(&caps[1])));

        match next {
            Some(rewritten) => html = rewritten,
            None => return html,
        }
    }
}
