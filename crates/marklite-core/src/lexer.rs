//! Line-based lexer with SIMD-accelerated scanning.
//!
//! Splits the source document into lines for the block classifier.
//! Zero-copy: lines borrow directly from the input. Uses `memchr` for
//! fast newline detection (SIMD on supported platforms).

use memchr::memchr;

/// Iterator over the lines of a document.
///
/// Yields each line without its trailing newline. CRLF endings are
/// handled by stripping the carriage return as well.
pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            offset: 0,
        }
    }

    /// Read the next line from input.
    #[inline(always)]
    fn read_line(&mut self) -> Option<&'a str> {
        if self.offset >= self.bytes.len() {
            return None;
        }

        let start = self.offset;

        let end = match memchr(b'\n', &self.bytes[start..]) {
            Some(pos) => start + pos,
            None => self.bytes.len(),
        };

        // Handle CRLF: check byte before newline is CR
        let text_end = if end > start && self.bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        // Advance past newline
        self.offset = if end < self.bytes.len() { end + 1 } else { end };

        // Newlines and CRs are single-byte ASCII, so both slice positions
        // land on UTF-8 char boundaries.
        Some(&self.input[start..text_end])
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.read_line()
    }
}
