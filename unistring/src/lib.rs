// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

// cspell:words unistring widestring smallvec smallstr

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # unistring
//!
//! The string core of a terminal widget toolkit: a Unicode-aware string
//! value type, [`UniString`], built for widget labels, menu entries, and
//! status-bar text.
//!
//! Rust's [`String`] is a UTF-8 byte buffer; terminal widget code mostly
//! wants to think in *code points* (fixed-index editing, overwrite
//! semantics, control-code substitution) while still handing byte-oriented
//! callers a `&str`. [`UniString`] therefore owns a canonical code-point
//! buffer and derives the narrow UTF-8 view lazily, caching it until the
//! next mutation.
//!
//! ## Null, empty, non-empty
//!
//! Widget code needs "no label at all" to be different from "an empty
//! label". [`UniString`] keeps three states apart: *null* (no buffer,
//! [`UniString::as_str`] is `None`), *empty-not-null* (a zero-length
//! buffer), and non-empty content. Every operation documents how it
//! propagates the state; the short version is that null in, null out, and
//! shrinking a non-null string to nothing yields empty-not-null.
//!
//! ## Example
//!
//! ```
//! use unistring::{UniString, sprintf_args};
//!
//! let label = UniString::from("Look behind you, a three-headed monkey!");
//! assert_eq!(label.left(11), "Look behind");
//! assert_eq!(label.split(" ").len(), 6);
//! assert_eq!(label.replace("three", "3"), "Look behind you, a 3-headed monkey!");
//!
//! let mut status = UniString::new();
//! status.sprintf("%d of %d rows", sprintf_args![3, 12]);
//! assert_eq!(status, "3 of 12 rows");
//!
//! assert_eq!(UniString::from("-127").to_i16(), Ok(-127));
//! assert!(UniString::from("99999").to_i16().is_err());
//! ```
//!
//! Numeric conversions surface [`UniStringError`] with distinct
//! overflow/underflow/invalid-format kinds; indexed access reports
//! out-of-range positions the same way. The type is a plain single-threaded
//! value: copies are independent buffers and nothing is shared.

pub mod error;
pub mod sizing;
pub mod symbol;
pub mod uni_string;
pub mod units;

pub use error::{Result, UniStringError};
pub use sizing::{CodePointArray, DEFAULT_CODE_POINT_STORAGE_SIZE, DEFAULT_NARROW_STORAGE_SIZE,
                 FORWARD_RESERVE, INLINE_SPLIT_SIZE, NarrowString, SplitList};
pub use symbol::Symbol;
pub use uni_string::{GroupDigits, Number, SprintfArg, StreamItem, UniString};
pub use units::{CharCount, CharIndex, char_count, char_index};
