// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Zero-copy views into the analyzed input buffer.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// Position and length of a run of bytes in the input buffer.
///
/// Unlike [`TextSlice`] this does not borrow the buffer, so it can be stored
/// in structures that outlive a single borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextSpan {
    pub position: usize,
    pub length: usize,
}

impl TextSpan {
    pub const fn new(position: usize, length: usize) -> Self {
        Self { position, length }
    }

    /// Exclusive end offset.
    pub const fn end(&self) -> usize {
        self.position + self.length
    }

    /// Borrow the spanned text. Returns an empty slice if the span does not
    /// fit inside `text`.
    pub fn slice<'a>(&self, text: &'a str) -> TextSlice<'a> {
        TextSlice::new(text, self.position, self.length)
    }
}

/// A view of `length` bytes of `text` starting at `position`.
///
/// Equality and hashing look at the viewed characters only, so two slices
/// with the same spelling compare equal wherever they sit in the buffer.
#[derive(Clone, Copy)]
pub struct TextSlice<'a> {
    text: &'a str,
    position: usize,
    length: usize,
}

impl<'a> TextSlice<'a> {
    /// Create a slice, clamping it to the buffer.
    pub fn new(text: &'a str, position: usize, length: usize) -> Self {
        let position = position.min(text.len());
        let length = length.min(text.len() - position);
        Self {
            text,
            position,
            length,
        }
    }

    /// A slice covering the whole of `text`.
    pub fn whole(text: &'a str) -> Self {
        Self::new(text, 0, text.len())
    }

    pub const fn empty() -> Self {
        Self {
            text: "",
            position: 0,
            length: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.position, self.length)
    }

    /// The viewed text. Slices that do not fall on character boundaries
    /// view as empty.
    pub fn as_str(&self) -> &'a str {
        self.text
            .get(self.position..self.position + self.length)
            .unwrap_or("")
    }

    /// Byte at `index`, relative to the start of the slice.
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.as_str().as_bytes().get(index).copied()
    }

    /// Character starting at byte `index`, relative to the start of the
    /// slice.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.as_str().get(index..).and_then(|rest| rest.chars().next())
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    pub fn contains(&self, c: char) -> bool {
        self.as_str().contains(c)
    }

    /// Offset of the first `c` relative to the start of the slice.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.as_str().find(c)
    }
}

impl PartialEq for TextSlice<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TextSlice<'_> {}

impl PartialEq<str> for TextSlice<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TextSlice<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Hash for TextSlice<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Debug for TextSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.as_str(), self.position)
    }
}

impl fmt::Display for TextSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_equality_ignores_position() {
        let text = ".LBB0_1: jmp .LBB0_1";
        let decl = TextSlice::new(text, 0, 7);
        let target = TextSlice::new(text, 13, 7);
        assert_eq!(decl, target);
        assert_ne!(decl.position(), target.position());

        let mut map = HashMap::new();
        map.insert(decl, 1);
        assert_eq!(map.get(&target), Some(&1));
    }

    #[test]
    fn test_helpers() {
        let slice = TextSlice::new("  .Ltmp3:", 2, 6);
        assert_eq!(slice.as_str(), ".Ltmp3");
        assert!(slice.starts_with(".L"));
        assert!(slice.contains('3'));
        assert_eq!(slice.index_of('t'), Some(2));
        assert_eq!(slice.byte_at(1), Some(b'L'));
        assert_eq!(slice.char_at(0), Some('.'));
        assert_eq!(slice.char_at(6), None);
        assert_eq!(slice, ".Ltmp3");
    }

    #[test]
    fn test_clamped_to_buffer() {
        let slice = TextSlice::new("abc", 2, 10);
        assert_eq!(slice.as_str(), "c");
        assert!(TextSlice::new("abc", 9, 1).is_empty());
    }

    #[test]
    fn test_span_round_trip() {
        let text = "call foo";
        let span = TextSpan::new(5, 3);
        assert_eq!(span.end(), 8);
        assert_eq!(span.slice(text).as_str(), "foo");
        assert_eq!(span.slice(text).span(), span);
    }
}
