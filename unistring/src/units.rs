// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

//! Signed unit newtypes for positions and counts inside a
//! [`crate::UniString`].
//!
//! Both units are signed on purpose: callers hand in negative values and each
//! operation documents whether a negative is clamped ([`crate::UniString::left`],
//! [`crate::UniString::overwrite`]) or rejected ([`crate::UniString::insert`],
//! [`crate::UniString::char_at`]). Unsigned values larger than `i64::MAX`
//! saturate.

use std::ops::{Deref, DerefMut};

/// A 0-based (or, for [`crate::UniString::mid`], 1-based) code-point position.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharIndex(pub i64);

pub fn char_index(arg: impl Into<CharIndex>) -> CharIndex { arg.into() }

mod char_index_impl_block {
    use super::{CharIndex, Deref, DerefMut};

    impl CharIndex {
        #[must_use]
        pub fn as_i64(&self) -> i64 { self.0 }
    }

    impl Deref for CharIndex {
        type Target = i64;
        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for CharIndex {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }

    impl From<i8> for CharIndex {
        fn from(it: i8) -> Self { Self(i64::from(it)) }
    }

    impl From<i16> for CharIndex {
        fn from(it: i16) -> Self { Self(i64::from(it)) }
    }

    impl From<i32> for CharIndex {
        fn from(it: i32) -> Self { Self(i64::from(it)) }
    }

    impl From<i64> for CharIndex {
        fn from(it: i64) -> Self { Self(it) }
    }

    impl From<u8> for CharIndex {
        fn from(it: u8) -> Self { Self(i64::from(it)) }
    }

    impl From<u16> for CharIndex {
        fn from(it: u16) -> Self { Self(i64::from(it)) }
    }

    impl From<u32> for CharIndex {
        fn from(it: u32) -> Self { Self(i64::from(it)) }
    }

    impl From<u64> for CharIndex {
        fn from(it: u64) -> Self { Self(i64::try_from(it).unwrap_or(i64::MAX)) }
    }

    impl From<usize> for CharIndex {
        fn from(it: usize) -> Self { Self(i64::try_from(it).unwrap_or(i64::MAX)) }
    }
}

/// A count of code points, e.g. the argument of [`crate::UniString::left`] or
/// the length argument of [`crate::UniString::remove`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharCount(pub i64);

pub fn char_count(arg: impl Into<CharCount>) -> CharCount { arg.into() }

mod char_count_impl_block {
    use super::{CharCount, Deref, DerefMut};

    impl CharCount {
        /// Negative counts mean "none"; this is the clamped non-negative view.
        #[must_use]
        pub fn clamped_usize(&self) -> usize { usize::try_from(self.0).unwrap_or(0) }

        #[must_use]
        pub fn as_i64(&self) -> i64 { self.0 }
    }

    impl Deref for CharCount {
        type Target = i64;
        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for CharCount {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }

    impl From<i8> for CharCount {
        fn from(it: i8) -> Self { Self(i64::from(it)) }
    }

    impl From<i16> for CharCount {
        fn from(it: i16) -> Self { Self(i64::from(it)) }
    }

    impl From<i32> for CharCount {
        fn from(it: i32) -> Self { Self(i64::from(it)) }
    }

    impl From<i64> for CharCount {
        fn from(it: i64) -> Self { Self(it) }
    }

    impl From<u8> for CharCount {
        fn from(it: u8) -> Self { Self(i64::from(it)) }
    }

    impl From<u16> for CharCount {
        fn from(it: u16) -> Self { Self(i64::from(it)) }
    }

    impl From<u32> for CharCount {
        fn from(it: u32) -> Self { Self(i64::from(it)) }
    }

    impl From<u64> for CharCount {
        fn from(it: u64) -> Self { Self(i64::try_from(it).unwrap_or(i64::MAX)) }
    }

    impl From<usize> for CharCount {
        fn from(it: usize) -> Self { Self(i64::try_from(it).unwrap_or(i64::MAX)) }
    }
}
