// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

//! Static sizing for the stack-allocated storage used by [`crate::UniString`].
//! Smaller inline sizes are better than larger ones; past these thresholds the
//! backing [`smallvec::SmallVec`] / [`smallstr::SmallString`] spill to the heap.

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::UniString;

/// Inline slots for the canonical code-point buffer before it spills.
pub const DEFAULT_CODE_POINT_STORAGE_SIZE: usize = 16;

/// The canonical code-point buffer of a [`UniString`].
pub type CodePointArray = SmallVec<[char; DEFAULT_CODE_POINT_STORAGE_SIZE]>;

/// Inline bytes for the derived narrow (UTF-8) view before it spills.
pub const DEFAULT_NARROW_STORAGE_SIZE: usize = 16;

/// Cached narrow view derived from the code-point buffer.
pub type NarrowString = SmallString<[u8; DEFAULT_NARROW_STORAGE_SIZE]>;

/// Inline fields for [`UniString::split`] results before the list spills.
pub const INLINE_SPLIT_SIZE: usize = 8;

/// Field list produced by [`UniString::split`].
pub type SplitList = SmallVec<[UniString; INLINE_SPLIT_SIZE]>;

/// Head-room reserved past the current length by the capacity growth policy:
/// a buffer of length `n > 0` reserves `n + FORWARD_RESERVE` slots, and a
/// zero-length buffer reserves nothing.
pub const FORWARD_RESERVE: usize = 15;
