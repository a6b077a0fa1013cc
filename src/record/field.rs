//! Bounded text field
//!
//! A fixed-width byte field holding null-terminated text. Input longer
//! than the field truncates; it never overflows and never errors.

use std::borrow::Cow;
use std::fmt;

use crate::layout::MAX_DATA;

/// Fixed-width text field, `MAX_DATA` bytes, always null-terminated.
///
/// ## Truncation Policy
/// Writes keep the longest prefix that fits in `MAX_DATA - 1` bytes
/// without splitting a UTF-8 character, then terminate. The last byte
/// of the field is 0 in every reachable state.
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedField([u8; MAX_DATA]);

impl BoundedField {
    /// Field width in bytes, terminator included
    pub const WIDTH: usize = MAX_DATA;

    /// An empty (zero-filled) field
    pub fn empty() -> Self {
        Self([0u8; MAX_DATA])
    }

    /// Build a field from text, truncating per the policy
    pub fn from_text(text: &str) -> Self {
        let mut field = Self::empty();
        field.set_text(text);
        field
    }

    /// Overwrite the field with text, truncating per the policy
    pub fn set_text(&mut self, text: &str) {
        self.0.fill(0);

        let mut end = text.len().min(Self::WIDTH - 1);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        self.0[..end].copy_from_slice(&text.as_bytes()[..end]);
    }

    /// Zero-fill the field
    pub fn clear(&mut self) {
        self.0.fill(0);
    }

    /// Reconstruct a field from its encoded bytes.
    ///
    /// `buf` must be exactly `WIDTH` bytes. The final byte is forced to
    /// 0 so the termination invariant holds even for foreign images.
    pub fn from_bytes(buf: &[u8]) -> Self {
        debug_assert_eq!(buf.len(), Self::WIDTH);

        let mut bytes = [0u8; MAX_DATA];
        bytes.copy_from_slice(buf);
        bytes[Self::WIDTH - 1] = 0;
        Self(bytes)
    }

    /// The encoded form: the full fixed-width byte array
    pub fn as_bytes(&self) -> &[u8; MAX_DATA] {
        &self.0
    }

    /// The stored bytes up to (not including) the terminator
    pub fn text_bytes(&self) -> &[u8] {
        // The last byte is always 0, so a terminator always exists.
        let len = self
            .0
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(Self::WIDTH - 1);
        &self.0[..len]
    }

    /// The stored text; non-UTF-8 bytes are replaced lossily
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.text_bytes())
    }

    /// Exact byte-for-byte match against `needle`
    pub fn matches(&self, needle: &str) -> bool {
        self.text_bytes() == needle.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0[0] == 0
    }
}

impl fmt::Debug for BoundedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoundedField").field(&self.text()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_roundtrips() {
        let field = BoundedField::from_text("Alice");
        assert_eq!(field.text(), "Alice");
        assert!(field.matches("Alice"));
        assert!(!field.matches("Alic"));
        assert!(!field.matches("Alice "));
    }

    #[test]
    fn long_text_truncates_and_terminates() {
        let long = "a".repeat(BoundedField::WIDTH * 2);
        let field = BoundedField::from_text(&long);

        assert_eq!(field.text_bytes().len(), BoundedField::WIDTH - 1);
        assert_eq!(field.as_bytes()[BoundedField::WIDTH - 1], 0);
        assert_eq!(field.text(), long[..BoundedField::WIDTH - 1]);
    }

    #[test]
    fn exact_fit_text_is_kept_whole() {
        let text = "b".repeat(BoundedField::WIDTH - 1);
        let field = BoundedField::from_text(&text);
        assert!(field.matches(&text));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 'é' is 2 bytes and must never be split mid-character.
        let text = "é".repeat(BoundedField::WIDTH);
        let field = BoundedField::from_text(&text);

        let stored = field.text();
        assert!(stored.len() <= BoundedField::WIDTH - 1);
        assert!(stored.chars().all(|c| c == 'é'));
    }

    #[test]
    fn clear_zero_fills() {
        let mut field = BoundedField::from_text("stale");
        field.clear();

        assert!(field.is_empty());
        assert_eq!(field.as_bytes(), &[0u8; BoundedField::WIDTH]);
    }

    #[test]
    fn overwrite_leaves_no_stale_bytes() {
        let mut field = BoundedField::from_text("a much longer value");
        field.set_text("x");

        assert_eq!(field.text(), "x");
        assert!(field.as_bytes()[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn from_bytes_forces_termination() {
        let buf = [b'x'; BoundedField::WIDTH];
        let field = BoundedField::from_bytes(&buf);

        assert_eq!(field.as_bytes()[BoundedField::WIDTH - 1], 0);
        assert_eq!(field.text_bytes().len(), BoundedField::WIDTH - 1);
    }
}
