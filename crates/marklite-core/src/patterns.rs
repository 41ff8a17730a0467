//! Process-wide compiled recognition patterns.
//!
//! All six patterns are read-only and initialized once on first use.
//! They are never modified after creation, so they are safe to share
//! across concurrent conversions.

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of leading heading markers followed by the rest of the line.
pub(crate) static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#+)(.*)").unwrap());

/// Any line that does not open with a heading marker.
pub(crate) static PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^#]+").unwrap());

/// `[text](destination)` link syntax, non-greedy on both captures.
pub(crate) static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

/// `***text***` bold-italic span.
pub(crate) static STRONG_EM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\*(.*?)\*\*\*").unwrap());

/// `**text**` bold span.
pub(crate) static STRONG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// `*text*` italic span.
pub(crate) static EM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
