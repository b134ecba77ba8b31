// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

//! Derivations: substrings, splitting, containment, trimming, case mapping,
//! and terminal-column measurements. None of these mutate the receiver; the
//! null state propagates (a derivation of null stays null), while a non-null
//! source that shrinks to nothing yields empty-not-null.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::UniString;
use crate::{CharCount, CharIndex, SplitList};

impl UniString {
    /// The first `count` code points. `count` past the end clamps to the
    /// whole string; `count <= 0` yields empty-not-null; a null source stays
    /// null.
    #[must_use]
    pub fn left(&self, count: impl Into<CharCount>) -> UniString {
        if self.is_null() {
            return UniString::new();
        }
        let chars = self.code_point_slice();
        let n = count.into().clamped_usize().min(chars.len());
        UniString::from(&chars[..n])
    }

    /// The last `count` code points, with the same clamping as
    /// [`Self::left`].
    #[must_use]
    pub fn right(&self, count: impl Into<CharCount>) -> UniString {
        if self.is_null() {
            return UniString::new();
        }
        let chars = self.code_point_slice();
        let n = count.into().clamped_usize().min(chars.len());
        UniString::from(&chars[chars.len() - n..])
    }

    /// `len` code points starting at the 1-based position `start`.
    /// `start == 0` is treated as 1; a negative `start`, a `start` beyond the
    /// content, or `len <= 0` yields empty; `len` clamps to the available
    /// range. A null source stays null.
    #[must_use]
    pub fn mid(&self, start: impl Into<CharIndex>, len: impl Into<CharCount>) -> UniString {
        if self.is_null() {
            return UniString::new();
        }
        let start = start.into().as_i64();
        let len = len.into().as_i64();
        if start < 0 || len <= 0 {
            return UniString::from("");
        }
        let start = usize::try_from(start.max(1)).unwrap_or(usize::MAX);
        let chars = self.code_point_slice();
        if start > chars.len() {
            return UniString::from("");
        }
        let begin = start - 1;
        let end = begin.saturating_add(usize::try_from(len).unwrap_or(usize::MAX)).min(chars.len());
        UniString::from(&chars[begin..end])
    }

    /// Splits on a character or string delimiter, preserving empty fields
    /// between consecutive delimiters. A null or empty source yields an empty
    /// list, not a list holding one empty field. An empty delimiter yields
    /// the whole string as a single field.
    #[must_use]
    pub fn split(&self, delimiter: impl Into<UniString>) -> SplitList {
        let mut fields = SplitList::new();
        if self.len() == 0 {
            return fields;
        }
        let delimiter = delimiter.into();
        let pattern = delimiter.code_point_slice();
        if pattern.is_empty() {
            fields.push(self.clone());
            return fields;
        }

        let chars = self.code_point_slice();
        let mut field_start = 0;
        let mut i = 0;
        while i + pattern.len() <= chars.len() {
            if &chars[i..i + pattern.len()] == pattern {
                fields.push(UniString::from(&chars[field_start..i]));
                i += pattern.len();
                field_start = i;
            } else {
                i += 1;
            }
        }
        fields.push(UniString::from(&chars[field_start..]));
        fields
    }

    /// Substring / character containment. A null, empty, or NUL needle never
    /// matches, and a null or empty haystack contains nothing.
    #[must_use]
    pub fn includes(&self, needle: impl Into<UniString>) -> bool {
        if self.len() == 0 {
            return false;
        }
        let needle = needle.into();
        let pattern = needle.code_point_slice();
        if pattern.is_empty() {
            return false;
        }
        self.code_point_slice().windows(pattern.len()).any(|window| window == pattern)
    }

    /// Strips Unicode whitespace from both ends. Trimming a non-null string
    /// down to nothing yields empty-not-null; a null source stays null.
    #[must_use]
    pub fn trim(&self) -> UniString { self.ltrim().rtrim() }

    /// Strips leading whitespace; state rules as in [`Self::trim`].
    #[must_use]
    pub fn ltrim(&self) -> UniString {
        if self.is_null() {
            return UniString::new();
        }
        let chars = self.code_point_slice();
        let start = chars.iter().take_while(|c| c.is_whitespace()).count();
        UniString::from(&chars[start..])
    }

    /// Strips trailing whitespace; state rules as in [`Self::trim`].
    #[must_use]
    pub fn rtrim(&self) -> UniString {
        if self.is_null() {
            return UniString::new();
        }
        let chars = self.code_point_slice();
        let end = chars.len() - chars.iter().rev().take_while(|c| c.is_whitespace()).count();
        UniString::from(&chars[..end])
    }

    #[must_use]
    pub fn to_uppercase(&self) -> UniString {
        if self.is_null() {
            return UniString::new();
        }
        UniString::from_buffer(self.chars().flat_map(char::to_uppercase).collect())
    }

    #[must_use]
    pub fn to_lowercase(&self) -> UniString {
        if self.is_null() {
            return UniString::new();
        }
        UniString::from_buffer(self.chars().flat_map(char::to_lowercase).collect())
    }

    /// Terminal columns this string occupies when rendered (wide CJK /
    /// emoji-aware). Widget code sizes labels with this, not with
    /// [`Self::len`].
    #[must_use]
    pub fn display_width(&self) -> usize {
        UnicodeWidthStr::width(self.as_str().unwrap_or(""))
    }

    /// Number of user-perceived characters (grapheme clusters).
    #[must_use]
    pub fn grapheme_count(&self) -> usize { self.graphemes().count() }

    /// Iterator over the user-perceived characters.
    pub fn graphemes(&self) -> impl Iterator<Item = &str> {
        self.as_str().unwrap_or("").graphemes(true)
    }
}
