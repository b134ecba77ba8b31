// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

//! In-place edits (`insert`, `overwrite`, `remove`) and the pure first-match
//! `replace`. The in-place family returns `&mut Self` for chaining.

use super::UniString;
use crate::{CharCount, CharIndex, CodePointArray, Result, UniStringError};

impl UniString {
    /// Inserts `text` at the 0-based `position`; `position == len()`
    /// appends.
    ///
    /// # Errors
    ///
    /// [`UniStringError::OutOfRange`] when `position` is negative or beyond
    /// `len()`.
    pub fn insert(
        &mut self,
        text: impl Into<UniString>,
        position: impl Into<CharIndex>,
    ) -> Result<&mut Self> {
        let position = position.into().as_i64();
        let length = self.len();
        let pos = match usize::try_from(position) {
            Ok(pos) if pos <= length => pos,
            _ => return Err(UniStringError::OutOfRange { index: position, length }),
        };

        let text = text.into();
        if text.len() > 0 {
            self.buf_mut().insert_from_slice(pos, text.code_point_slice());
            self.commit_edit();
        }
        Ok(self)
    }

    /// Writes `text` over the existing content starting at `position`,
    /// extending the buffer when the replacement runs past the current end.
    /// A negative `position` clamps to 0; a `position` past the end appends.
    pub fn overwrite(
        &mut self,
        text: impl Into<UniString>,
        position: impl Into<CharIndex>,
    ) -> &mut Self {
        let text = text.into();
        if text.len() == 0 {
            return self;
        }
        // Negative positions clamp to 0 and overwrite from the start.
        let pos = usize::try_from(position.into().as_i64()).unwrap_or(0);
        let buf = self.buf_mut();
        let pos = pos.min(buf.len());
        let end = pos + text.len();
        if end > buf.len() {
            buf.resize(end, '\0');
        }
        buf[pos..end].copy_from_slice(text.code_point_slice());
        self.commit_edit();
        self
    }

    /// Deletes `count` code points starting at `position`. A `position`
    /// beyond the end is a no-op; `count` clamps to the available remainder.
    pub fn remove(
        &mut self,
        position: impl Into<CharIndex>,
        count: impl Into<CharCount>,
    ) -> &mut Self {
        let length = self.len();
        let Ok(pos) = usize::try_from(position.into().as_i64()) else {
            return self;
        };
        if pos >= length {
            return self;
        }
        let count = count.into().clamped_usize();
        if count == 0 {
            return self;
        }
        let end = pos.saturating_add(count).min(length);
        self.buf_mut().drain(pos..end);
        self.commit_edit();
        self
    }

    /// Replaces the **first** occurrence of `from` with `to`, returning the
    /// derived value; the receiver is untouched. An empty or null `from`
    /// leaves the content unchanged, and a null/empty receiver comes back in
    /// its unchanged state.
    #[must_use]
    pub fn replace(&self, from: impl Into<UniString>, to: impl Into<UniString>) -> UniString {
        if self.len() == 0 {
            return self.clone();
        }
        let from = from.into();
        let pattern = from.code_point_slice();
        if pattern.is_empty() {
            return self.clone();
        }
        let chars = self.code_point_slice();
        let Some(found) = chars.windows(pattern.len()).position(|window| window == pattern)
        else {
            return self.clone();
        };

        let to = to.into();
        let mut buf =
            CodePointArray::with_capacity(chars.len() - pattern.len() + to.len());
        buf.extend_from_slice(&chars[..found]);
        buf.extend_from_slice(to.code_point_slice());
        buf.extend_from_slice(&chars[found + pattern.len()..]);
        UniString::from_buffer(buf)
    }
}
