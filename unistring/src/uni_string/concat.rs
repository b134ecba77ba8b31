// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

//! Concatenation. Operator `+` / `+=` accept any string-like operand in both
//! directions; [`UniString::append`] is the stream-style variant that also
//! takes every numeric width and [`Symbol`] glyphs.

use std::ops::{Add, AddAssign};

use super::UniString;
use crate::Symbol;

impl UniString {
    /// Appends a chunk of code points. An empty chunk is a no-op and does not
    /// materialize a buffer, so concatenating with a null/empty operand keeps
    /// the receiver's state.
    pub(crate) fn push_chunk<I: IntoIterator<Item = char>>(&mut self, chunk: I) {
        let mut chunk = chunk.into_iter().peekable();
        if chunk.peek().is_none() {
            return;
        }
        self.buf_mut().extend(chunk);
        self.commit_edit();
    }

    /// Stream-style append, chainable:
    /// `status.append("x: ").append(42).append(Symbol::Euro)`.
    pub fn append<T: StreamItem>(&mut self, item: T) -> &mut Self {
        item.append_to(self);
        self
    }
}

impl<T: Into<UniString>> AddAssign<T> for UniString {
    fn add_assign(&mut self, rhs: T) {
        let rhs = rhs.into();
        self.push_chunk(rhs.chars());
    }
}

impl<T: Into<UniString>> Add<T> for UniString {
    type Output = UniString;

    fn add(mut self, rhs: T) -> UniString {
        self += rhs;
        self
    }
}

impl<T: Into<UniString>> Add<T> for &UniString {
    type Output = UniString;

    fn add(self, rhs: T) -> UniString {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

/// "primitive + `UniString`" directions.
mod primitive_plus_unistring {
    use super::{Add, UniString};

    impl Add<UniString> for &str {
        type Output = UniString;

        fn add(self, rhs: UniString) -> UniString {
            let mut out = UniString::from(self);
            out.push_chunk(rhs.chars());
            out
        }
    }

    impl Add<&UniString> for &str {
        type Output = UniString;

        fn add(self, rhs: &UniString) -> UniString {
            let mut out = UniString::from(self);
            out.push_chunk(rhs.chars());
            out
        }
    }

    impl Add<UniString> for String {
        type Output = UniString;

        fn add(self, rhs: UniString) -> UniString { self.as_str() + rhs }
    }

    impl Add<UniString> for char {
        type Output = UniString;

        fn add(self, rhs: UniString) -> UniString {
            let mut out = UniString::from(self);
            out.push_chunk(rhs.chars());
            out
        }
    }
}

/// Anything the stream-style [`UniString::append`] accepts.
pub trait StreamItem {
    fn append_to(self, target: &mut UniString);
}

impl StreamItem for &str {
    fn append_to(self, target: &mut UniString) { target.push_chunk(self.chars()); }
}

impl StreamItem for String {
    fn append_to(self, target: &mut UniString) { target.push_chunk(self.chars()); }
}

impl StreamItem for char {
    fn append_to(self, target: &mut UniString) {
        if self != '\0' {
            target.push_chunk(std::iter::once(self));
        }
    }
}

impl StreamItem for UniString {
    fn append_to(self, target: &mut UniString) { target.push_chunk(self.chars()); }
}

impl StreamItem for &UniString {
    fn append_to(self, target: &mut UniString) { target.push_chunk(self.chars()); }
}

impl StreamItem for Symbol {
    fn append_to(self, target: &mut UniString) {
        target.push_chunk(std::iter::once(self.as_char()));
    }
}

macro_rules! impl_stream_item_for_integers {
    ($($int_type:ty),* $(,)?) => {$(
        impl StreamItem for $int_type {
            fn append_to(self, target: &mut UniString) {
                target.push_chunk(self.to_string().chars());
            }
        }
    )*};
}

impl_stream_item_for_integers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl StreamItem for f32 {
    /// Renders like [`UniString::set_number`]: 6 significant digits.
    fn append_to(self, target: &mut UniString) {
        let rendered = super::num_format::format_general(f64::from(self), 6);
        target.push_chunk(rendered.chars());
    }
}

impl StreamItem for f64 {
    /// Renders like [`UniString::set_number`]: 15 significant digits.
    fn append_to(self, target: &mut UniString) {
        let rendered = super::num_format::format_general(self, 15);
        target.push_chunk(rendered.chars());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn addition_assignment() {
        let mut s1 = UniString::new();
        s1 += UniString::from("abc");
        assert_eq!(s1, "abc");
        s1 += UniString::from("def");
        assert_eq!(s1, "abcdef");
        s1 += UniString::new();
        assert_eq!(s1, "abcdef");
        s1 += UniString::from("");
        assert_eq!(s1, "abcdef");

        s1.clear();
        assert!(s1.is_null());
        s1 += "abc";
        assert_eq!(s1, "abc");
        s1 += String::from("def");
        assert_eq!(s1, "abcdef");

        s1.clear();
        s1 += 'a';
        assert_eq!(s1, "a");
        s1 += 'b';
        assert_eq!(s1, "ab");
    }

    #[test]
    fn addition_pairs_every_operand_type() {
        let s1 = UniString::from("abc");
        assert_eq!(s1.len(), 3);
        assert_eq!(&s1 + UniString::from("def"), "abcdef");
        assert_eq!(&s1 + String::from("def"), "abcdef");
        assert_eq!(&s1 + "def", "abcdef");
        assert_eq!(&s1 + 'd', "abcd");

        // Empty / null left operand.
        let s3 = UniString::new();
        assert_eq!(s3.len(), 0);
        assert_eq!(&s3 + UniString::from("def"), "def");
        assert_eq!(&s3 + String::from("def"), "def");
        assert_eq!(&s3 + "def", "def");
        assert_eq!(&s3 + 'd', "d");

        // Primitive + UniString.
        assert_eq!("abc" + UniString::from("def"), "abcdef");
        assert_eq!(String::from("abc") + UniString::from("def"), "abcdef");
        assert_eq!('a' + UniString::from("def"), "adef");

        // Primitive + null UniString.
        assert_eq!("abc" + UniString::new(), "abc");
        assert_eq!("abc" + UniString::from(""), "abc");
        assert_eq!('a' + UniString::new(), "a");
        assert_eq!(String::from("abc") + UniString::new(), "abc");
    }

    #[test]
    fn null_plus_null_stays_null() {
        let out = UniString::new() + UniString::new();
        assert!(out.is_null());
        let out = UniString::from("") + UniString::new();
        assert!(out.is_empty());
        assert!(!out.is_null());
    }

    #[test]
    fn stream_append_strings_and_chars() {
        let mut out = UniString::new();
        out.append(UniString::from("ABC"));
        assert_eq!(out, "ABC");

        out.clear();
        out.append(String::from("ABC"));
        assert_eq!(out, "ABC");

        out.clear();
        out.append("ABC");
        assert_eq!(out, "ABC");

        out.clear();
        out.append(Symbol::Euro);
        assert_eq!(out, "€");

        out.clear();
        out.append('A');
        assert_eq!(out, "A");
    }

    #[test]
    fn stream_append_every_integer_width() {
        let test_cases: &[(fn(&mut UniString), &str)] = &[
            (|s| { s.append(i8::MAX); }, "127"),
            (|s| { s.append(i8::MIN); }, "-128"),
            (|s| { s.append(u8::MAX); }, "255"),
            (|s| { s.append(i16::MAX); }, "32767"),
            (|s| { s.append(i16::MIN); }, "-32768"),
            (|s| { s.append(u16::MAX); }, "65535"),
            (|s| { s.append(i32::MAX); }, "2147483647"),
            (|s| { s.append(i32::MIN); }, "-2147483648"),
            (|s| { s.append(u32::MAX); }, "4294967295"),
            (|s| { s.append(i64::MAX); }, "9223372036854775807"),
            (|s| { s.append(i64::MIN); }, "-9223372036854775808"),
            (|s| { s.append(u64::MAX); }, "18446744073709551615"),
            (|s| { s.append(999_999_999_usize); }, "999999999"),
            (|s| { s.append(1_234_567_i32); }, "1234567"),
            (|s| { s.append(-1_234_567_i32); }, "-1234567"),
            (|s| { s.append(12_345_678_u32); }, "12345678"),
            (|s| { s.append(-34_721_053_343_141_isize); }, "-34721053343141"),
            (|s| { s.append(4_670_148_723_459_u64); }, "4670148723459"),
        ];

        for (append_fn, expected) in test_cases {
            let mut out = UniString::new();
            append_fn(&mut out);
            assert_eq!(out, *expected);
        }
    }

    #[test]
    fn stream_append_floats() {
        let mut out = UniString::new();
        out.append(3.14159_f32);
        assert_eq!(out, "3.14159");

        out.clear();
        out.append(3.141_592_653_5_f64);
        assert_eq!(out, "3.1415926535");
    }

    #[test]
    fn stream_append_chains() {
        let mut out = UniString::new();
        out.append("x: ").append(42_i32).append(' ').append(Symbol::CheckMark);
        assert_eq!(out, "x: 42 ✓");
    }
}
