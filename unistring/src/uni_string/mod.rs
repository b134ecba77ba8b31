// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

//! The string core of the widget toolkit. [`UniString`] owns a canonical
//! sequence of code points and derives a narrow (UTF-8) view on demand; see
//! the [crate docs](crate) for the null / empty / non-empty state model.

use std::cell::OnceCell;

use crate::{CodePointArray, FORWARD_RESERVE, NarrowString};

mod access;
mod compare;
mod concat;
mod control;
mod edit;
mod num_format;
mod numeric;
mod printf;
mod slice;

pub use concat::StreamItem;
pub use num_format::{GroupDigits, Number};
pub use printf::SprintfArg;

/// A Unicode-aware string with three distinct states:
///
/// - *null*: no buffer at all; [`UniString::as_str`] and
///   [`UniString::code_points`] return `None`.
/// - *empty but not null*: a zero-length buffer, logically `""`.
/// - *non-empty*: one or more code points.
///
/// The distinction survives every derivation: constructing from a `None`
/// source or taking ([`UniString::take`]) yields *null*, constructing from an
/// explicit `""` yields *empty-not-null*, and trimming a non-null string down
/// to nothing yields *empty-not-null* as well.
///
/// # Capacity growth
///
/// The buffer reserves `length + 15` slots whenever `length > 0` and nothing
/// at all when `length == 0`. [`UniString::capacity`] reports exactly that
/// policy value; clones preserve it.
///
/// # Emptiness
///
/// [`UniString::is_empty`] reports "no printable content": a pre-sized
/// NUL-filled buffer ([`UniString::with_len`]) has a nonzero length yet is
/// still empty in this sense.
#[derive(Clone)]
pub struct UniString {
    /// `None` is the null state; `Some` with length 0 is empty-not-null.
    buf: Option<CodePointArray>,
    /// Reserved slot count per the growth policy; `0` iff length is `0`.
    capacity: usize,
    /// Narrow (UTF-8) view derived lazily from `buf`; every mutation resets
    /// it. Not part of the value: comparisons and hashing ignore it.
    narrow: OnceCell<NarrowString>,
}

impl Default for UniString {
    fn default() -> Self { Self::new() }
}

impl UniString {
    /// Creates a string in the null state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: None,
            capacity: 0,
            narrow: OnceCell::new(),
        }
    }

    /// Creates a pre-sized, NUL-filled string. The result is non-null with
    /// `len() == n`, yet [`Self::is_empty`] reports `true` because the
    /// content is all NUL. `n == 0` yields the null state.
    #[must_use]
    pub fn with_len(n: usize) -> Self {
        if n == 0 {
            return Self::new();
        }
        Self::from_buffer(std::iter::repeat_n('\0', n).collect())
    }

    /// Creates a string of `n` copies of `fill`. `n == 0` yields null.
    #[must_use]
    pub fn repeated(n: usize, fill: char) -> Self {
        if n == 0 {
            return Self::new();
        }
        Self::from_buffer(std::iter::repeat_n(fill, n).collect())
    }

    #[must_use]
    pub fn is_null(&self) -> bool { self.buf.is_none() }

    /// Number of code points. `0` in both the null and the empty state.
    #[must_use]
    pub fn len(&self) -> usize { self.code_point_slice().len() }

    /// `true` when there is no printable content: null, zero-length, or a
    /// buffer holding only NUL characters.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.code_point_slice().iter().all(|c| *c == '\0') }

    /// Reserved slot count per the growth policy (`length + 15`, or `0` for a
    /// zero-length string).
    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Reverts to the null state, releasing the buffer.
    pub fn clear(&mut self) -> &mut Self {
        self.buf = None;
        self.commit_edit();
        self
    }

    /// Moves the value out, leaving the receiver in the null state.
    #[must_use]
    pub fn take(&mut self) -> UniString { std::mem::take(self) }

    /// Overwrites the content in place. Assigning content identical to the
    /// current value is a detectable no-op: the buffer and the cached narrow
    /// view are left untouched.
    pub fn set_string(&mut self, src: impl Into<UniString>) -> &mut Self {
        let incoming = src.into();
        if *self == incoming {
            tracing::trace!("set_string: identical content, keeping buffer");
            return self;
        }
        *self = incoming;
        self
    }

    pub(crate) fn from_buffer(buf: CodePointArray) -> Self {
        let mut this = Self {
            buf: Some(buf),
            capacity: 0,
            narrow: OnceCell::new(),
        };
        this.commit_edit();
        this
    }

    /// The code points as a slice; empty for both null and empty states.
    pub(crate) fn code_point_slice(&self) -> &[char] { self.buf.as_deref().unwrap_or(&[]) }

    /// Buffer for in-place edits, materialized if the string was null. The
    /// caller must finish with [`Self::commit_edit`].
    pub(crate) fn buf_mut(&mut self) -> &mut CodePointArray {
        self.buf.get_or_insert_with(CodePointArray::new)
    }

    /// Re-establishes the invariants after a mutation: drops the cached
    /// narrow view and re-applies the capacity growth policy.
    pub(crate) fn commit_edit(&mut self) {
        self.narrow.take();
        match self.buf.as_mut() {
            Some(buf) if !buf.is_empty() => {
                buf.reserve(FORWARD_RESERVE);
                self.capacity = buf.len() + FORWARD_RESERVE;
            }
            _ => self.capacity = 0,
        }
    }
}

mod convert {
    use super::{CodePointArray, UniString};

    impl From<&str> for UniString {
        /// An empty source yields the *empty-not-null* state, never null.
        fn from(value: &str) -> Self { UniString::from_buffer(value.chars().collect()) }
    }

    impl From<&&str> for UniString {
        fn from(value: &&str) -> Self { UniString::from(*value) }
    }

    impl From<String> for UniString {
        fn from(value: String) -> Self { UniString::from(value.as_str()) }
    }

    impl From<&String> for UniString {
        fn from(value: &String) -> Self { UniString::from(value.as_str()) }
    }

    impl From<&[char]> for UniString {
        fn from(value: &[char]) -> Self {
            UniString::from_buffer(CodePointArray::from_slice(value))
        }
    }

    impl From<char> for UniString {
        /// A NUL character denotes "no content" and yields the null state,
        /// mirroring assignment from a NUL terminator.
        fn from(value: char) -> Self {
            if value == '\0' {
                UniString::new()
            } else {
                UniString::from_buffer(std::iter::once(value).collect())
            }
        }
    }

    /// `None` maps to the null state; this is the seam widget code uses when
    /// handing over optional label text.
    impl From<Option<&str>> for UniString {
        fn from(value: Option<&str>) -> Self {
            match value {
                None => UniString::new(),
                Some(s) => UniString::from(s),
            }
        }
    }

    impl From<&UniString> for UniString {
        fn from(value: &UniString) -> Self { value.clone() }
    }
}
