// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

//! Comparison across every string-like operand type. Every implementation
//! funnels through the code-point view; the only extra rule is the state
//! tie-break: the null state equals only another null, and sorts below the
//! empty state, which in turn sorts below any non-empty content.

use std::{cmp::Ordering, hash::{Hash, Hasher}};

use super::UniString;

impl PartialEq for UniString {
    fn eq(&self, other: &Self) -> bool {
        self.is_null() == other.is_null()
            && self.code_point_slice() == other.code_point_slice()
    }
}

impl Eq for UniString {}

impl Ord for UniString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code_point_slice()
            .cmp(other.code_point_slice())
            .then_with(|| (!self.is_null()).cmp(&(!other.is_null())))
    }
}

impl PartialOrd for UniString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Hash for UniString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_null().hash(state);
        self.code_point_slice().hash(state);
    }
}

/// `&str` / `String` / `char` operands compare through the same code-point
/// funnel. The null state never equals any `&str`, `""` included; for
/// ordering it sorts below everything.
mod against_primitives {
    use super::{Ordering, UniString};

    fn eq_chars(this: &UniString, other: impl Iterator<Item = char>) -> bool {
        !this.is_null() && this.chars().eq(other)
    }

    fn cmp_chars(this: &UniString, other: impl Iterator<Item = char>) -> Ordering {
        let ord = this.chars().cmp(other);
        if ord == Ordering::Equal && this.is_null() {
            Ordering::Less
        } else {
            ord
        }
    }

    impl PartialEq<&str> for UniString {
        fn eq(&self, other: &&str) -> bool { eq_chars(self, other.chars()) }
    }

    impl PartialEq<UniString> for &str {
        fn eq(&self, other: &UniString) -> bool { other == self }
    }

    impl PartialEq<String> for UniString {
        fn eq(&self, other: &String) -> bool { eq_chars(self, other.chars()) }
    }

    impl PartialEq<UniString> for String {
        fn eq(&self, other: &UniString) -> bool { other == self }
    }

    impl PartialEq<char> for UniString {
        fn eq(&self, other: &char) -> bool { eq_chars(self, std::iter::once(*other)) }
    }

    impl PartialEq<UniString> for char {
        fn eq(&self, other: &UniString) -> bool { other == self }
    }

    impl PartialOrd<&str> for UniString {
        fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
            Some(cmp_chars(self, other.chars()))
        }
    }

    impl PartialOrd<UniString> for &str {
        fn partial_cmp(&self, other: &UniString) -> Option<Ordering> {
            other.partial_cmp(self).map(Ordering::reverse)
        }
    }

    impl PartialOrd<String> for UniString {
        fn partial_cmp(&self, other: &String) -> Option<Ordering> {
            Some(cmp_chars(self, other.chars()))
        }
    }

    impl PartialOrd<UniString> for String {
        fn partial_cmp(&self, other: &UniString) -> Option<Ordering> {
            other.partial_cmp(self).map(Ordering::reverse)
        }
    }

    impl PartialOrd<char> for UniString {
        fn partial_cmp(&self, other: &char) -> Option<Ordering> {
            Some(cmp_chars(self, std::iter::once(*other)))
        }
    }

    impl PartialOrd<UniString> for char {
        fn partial_cmp(&self, other: &UniString) -> Option<Ordering> {
            other.partial_cmp(self).map(Ordering::reverse)
        }
    }
}
