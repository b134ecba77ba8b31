// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

//! Read access: views, indexed access, iteration, and the std formatting /
//! parsing traits.

use std::{convert::Infallible, fmt,
          ops::{Index, IndexMut},
          str::FromStr};

use super::UniString;
use crate::{CharIndex, NarrowString, Result, UniStringError};

impl UniString {
    /// The narrow (UTF-8) view. `None` in the null state. Derived lazily
    /// from the code-point buffer and cached until the next mutation.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.buf.as_ref().map(|buf| {
            self.narrow
                .get_or_init(|| {
                    let mut narrow = NarrowString::new();
                    for c in buf {
                        narrow.push(*c);
                    }
                    narrow
                })
                .as_str()
        })
    }

    /// The wide view: the code points themselves. `None` in the null state.
    #[must_use]
    pub fn code_points(&self) -> Option<&[char]> { self.buf.as_deref() }

    /// Lossy bridge for byte-oriented callers: the null state renders as an
    /// empty `String`.
    #[must_use]
    pub fn to_std_string(&self) -> String { self.as_str().unwrap_or("").to_string() }

    /// The code point at `index`.
    ///
    /// # Errors
    ///
    /// [`UniStringError::OutOfRange`] when `index` is negative or at/past the
    /// end; `index == len()` is not a valid past-the-end read.
    pub fn char_at(&self, index: impl Into<CharIndex>) -> Result<char> {
        let index = index.into().as_i64();
        let length = self.len();
        match usize::try_from(index) {
            Ok(i) if i < length => Ok(self.code_point_slice()[i]),
            _ => Err(UniStringError::OutOfRange { index, length }),
        }
    }

    /// Writes a single code point at `index`.
    ///
    /// # Errors
    ///
    /// [`UniStringError::OutOfRange`] under the same bounds as
    /// [`Self::char_at`].
    pub fn set_char_at(&mut self, index: impl Into<CharIndex>, ch: char) -> Result<&mut Self> {
        let index = index.into().as_i64();
        let length = self.len();
        match usize::try_from(index) {
            Ok(i) if i < length => {
                self.buf_mut()[i] = ch;
                self.commit_edit();
                Ok(self)
            }
            _ => Err(UniStringError::OutOfRange { index, length }),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, char> { self.code_point_slice().iter() }

    /// Iterator over the code points by value.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.code_point_slice().iter().copied()
    }

    /// Mutable iteration drops the cached narrow view up front, since every
    /// handed-out reference may rewrite a code point.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut char> {
        self.narrow.take();
        self.buf.as_mut().map(|buf| buf.iter_mut()).into_iter().flatten()
    }

    #[must_use]
    pub fn front(&self) -> Option<char> { self.code_point_slice().first().copied() }

    #[must_use]
    pub fn back(&self) -> Option<char> { self.code_point_slice().last().copied() }
}

impl Index<usize> for UniString {
    type Output = char;

    /// Panics past the end like slice indexing; `index == len()` included.
    /// Use [`UniString::char_at`] for the fallible variant.
    fn index(&self, index: usize) -> &char { &self.code_point_slice()[index] }
}

impl IndexMut<usize> for UniString {
    fn index_mut(&mut self, index: usize) -> &mut char {
        self.narrow.take();
        let Some(buf) = self.buf.as_mut() else {
            panic!("index {index} out of range for null string");
        };
        &mut buf[index]
    }
}

impl<'a> IntoIterator for &'a UniString {
    type Item = &'a char;
    type IntoIter = std::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl fmt::Display for UniString {
    /// Honors formatter width / fill / alignment; the null state renders as
    /// the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str().unwrap_or(""))
    }
}

impl fmt::Debug for UniString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            None => write!(f, "UniString(null)"),
            Some(s) => write!(f, "UniString({s:?})"),
        }
    }
}

impl FromStr for UniString {
    type Err = Infallible;

    /// Never fails; an empty input yields the empty-not-null state.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> { Ok(UniString::from(s)) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn views_cover_the_whole_content() {
        let s = UniString::from("abc");
        assert_eq!(s.as_str(), Some("abc"));
        assert_eq!(s.code_points(), Some(&['a', 'b', 'c'][..]));
        assert_eq!(s.to_std_string(), "abc");

        let cyrillic = UniString::from("АВС");
        assert_eq!(cyrillic.len(), 3);
        assert_eq!(cyrillic.as_str().map(str::len), Some(6)); // two bytes each
    }

    #[test]
    fn subscript_reads_and_writes() {
        let mut s = UniString::with_len(3);
        assert_eq!(s[0], '\0');
        assert_eq!(s[1], '\0');
        assert_eq!(s[2], '\0');
        s[0] = 'A';
        s[1] = 'B';
        s[2] = 'C';
        assert_eq!(s[0], 'A');
        assert_eq!(s[1], 'B');
        assert_eq!(s[2], 'C');
        assert_eq!(s.to_std_string(), "ABC");
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn char_at_bounds() {
        let s = UniString::from("abc");
        assert_eq!(s.char_at(0), Ok('a'));
        assert_eq!(s.char_at(2), Ok('c'));
        // index == len is not a valid past-the-end read
        assert_eq!(s.char_at(3), Err(UniStringError::OutOfRange { index: 3, length: 3 }));
        assert_eq!(s.char_at(4), Err(UniStringError::OutOfRange { index: 4, length: 3 }));
        assert_eq!(s.char_at(-1), Err(UniStringError::OutOfRange { index: -1, length: 3 }));
        assert!(UniString::new().char_at(0).is_err());
    }

    #[test]
    fn set_char_at_invalidates_narrow_view() {
        let mut s = UniString::from("abc");
        assert_eq!(s.as_str(), Some("abc"));
        s.set_char_at(1, 'X').unwrap();
        assert_eq!(s.as_str(), Some("aXc"));
        assert!(s.set_char_at(3, 'Y').is_err());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn subscript_past_end_panics() {
        let s = UniString::from("abc");
        let _ = s[3];
    }

    #[test]
    fn iteration_front_back_and_mutation() {
        let s = UniString::from("123456789");
        assert_eq!(s.front(), Some('1'));
        assert_eq!(s.back(), Some('9'));
        assert_eq!(s.chars().collect::<String>(), "123456789");

        let mut s2 = UniString::from("bcdefg");
        for c in s2.iter_mut() {
            *c = char::from_u32(*c as u32 - 1).unwrap();
        }
        assert_eq!(s2, "abcdef");

        assert_eq!(UniString::new().front(), None);
        assert_eq!(UniString::new().back(), None);
    }

    #[test]
    fn display_honors_width_and_fill() {
        let null = UniString::new();
        assert_eq!(format!("{null}"), "");
        assert_eq!(format!("{null:*>5}"), "*****");
        assert_eq!(format!("{null:+>7}"), "+++++++");

        let abc = UniString::from("abc");
        assert_eq!(format!("{abc}"), "abc");
        assert_eq!(format!("{abc:>5}"), "  abc");
        assert_eq!(format!("{abc:-<5}"), "abc--");
    }

    #[test]
    fn from_str_extraction() {
        let s: UniString = "ABC".parse().unwrap();
        assert_eq!(s, "ABC");
        assert_eq!(s.len(), 3);

        let empty: UniString = "".parse().unwrap();
        assert!(empty.is_empty());
        assert!(!empty.is_null());
    }

    #[test]
    fn debug_distinguishes_null() {
        assert_eq!(format!("{:?}", UniString::new()), "UniString(null)");
        assert_eq!(format!("{:?}", UniString::from("")), "UniString(\"\")");
        assert_eq!(format!("{:?}", UniString::from("ab")), "UniString(\"ab\")");
    }
}
