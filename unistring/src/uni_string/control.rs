// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

//! Terminal control-code handling: backspace/DEL editing models, tab
//! expansion, and substitution of control codes with visible glyphs.

use super::UniString;
use crate::{CharCount, CodePointArray};

const BACKSPACE: char = '\u{08}';
const TAB: char = '\t';
const DEL: char = '\u{7f}';

impl UniString {
    /// Interprets backspace as "delete the previous surviving character",
    /// producing the text as if typed at a terminal. Repeated backspaces can
    /// delete down to empty.
    #[must_use]
    pub fn remove_backspaces(&self) -> UniString {
        if self.is_null() {
            return UniString::new();
        }
        let mut buf = CodePointArray::new();
        for c in self.chars() {
            if c == BACKSPACE {
                buf.pop();
            } else {
                buf.push(c);
            }
        }
        UniString::from_buffer(buf)
    }

    /// Interprets DEL as "remove the immediately following character" under a
    /// left-to-right scan. Consecutive DELs accumulate, each consuming one
    /// following character: `"\x7f\x7f\x7f\x7fABC"` edits down to `""`.
    #[must_use]
    pub fn remove_del(&self) -> UniString {
        if self.is_null() {
            return UniString::new();
        }
        let mut buf = CodePointArray::new();
        let mut pending_deletes = 0_usize;
        for c in self.chars() {
            if c == DEL {
                pending_deletes += 1;
            } else if pending_deletes > 0 {
                pending_deletes -= 1;
            } else {
                buf.push(c);
            }
        }
        UniString::from_buffer(buf)
    }

    /// Replaces horizontal tabs with enough spaces to reach the next tab
    /// stop. `tab_width <= 0` disables expansion and leaves tabs verbatim.
    #[must_use]
    pub fn expand_tabs(&self, tab_width: impl Into<CharCount>) -> UniString {
        let tab_width = tab_width.into().as_i64();
        if tab_width <= 0 || self.len() == 0 {
            return self.clone();
        }
        let tab_width = tab_width as usize;

        let segments = self.split(TAB);
        let mut buf = CodePointArray::new();
        for (i, segment) in segments.iter().enumerate() {
            buf.extend_from_slice(segment.code_point_slice());
            if i + 1 < segments.len() {
                let pad = tab_width - segment.len() % tab_width;
                buf.extend(std::iter::repeat_n(' ', pad));
            }
        }
        UniString::from_buffer(buf)
    }

    /// Substitutes each C0 control code (NUL through 0x1F) with its visible
    /// Unicode control picture and DEL with `␡`. C1 codes (0x80–0x9F) map to
    /// a plain space instead, since some legacy character sets use that range
    /// for printable characters. Applying this twice is a no-op: control
    /// pictures are ordinary printable glyphs.
    #[must_use]
    pub fn replace_control_codes(&self) -> UniString {
        if self.is_null() {
            return UniString::new();
        }
        let buf = self
            .chars()
            .map(|c| match c {
                '\0'..='\u{1f}' => char::from_u32(0x2400 + u32::from(c)).unwrap_or(c),
                DEL => '\u{2421}',
                '\u{80}'..='\u{9f}' => ' ',
                _ => c,
            })
            .collect();
        UniString::from_buffer(buf)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn backspaces_delete_previous_characters() {
        let bs_str = UniString::from("t\u{8}\u{8}TesT\u{8}t");
        assert_eq!(bs_str.len(), 9);
        assert_eq!(bs_str.remove_backspaces(), "Test");
        assert_eq!(bs_str.remove_backspaces().len(), 4);

        let bs_str = UniString::from("ABC\u{8}\u{8}\u{8}\u{8}");
        assert_eq!(bs_str.remove_backspaces(), "");
        assert!(bs_str.remove_backspaces().is_empty());
        assert_eq!(bs_str.remove_backspaces().len(), 0);

        assert!(UniString::new().remove_backspaces().is_null());
    }

    #[test]
    fn del_consumes_following_characters() {
        let del_str = UniString::from("apple \u{7f}\u{7f}\u{7f}pietree");
        assert_eq!(del_str.len(), 16);
        assert_eq!(del_str.remove_del(), "apple tree");
        assert_eq!(del_str.remove_del().len(), 10);

        let del_str = UniString::from("\u{7f}\u{7f}\u{7f}\u{7f}ABC");
        assert_eq!(del_str.len(), 7);
        assert_eq!(del_str.remove_del(), "");
        assert!(del_str.remove_del().is_empty());
        assert_eq!(del_str.remove_del().len(), 0);

        assert!(UniString::new().remove_del().is_null());
    }

    #[test]
    fn tabs_expand_to_the_next_tab_stop() {
        #[rustfmt::skip]
        let test_cases = [
            ("one line",            8, "one line"),
            ("one line",            4, "one line"),
            ("one line",            2, "one line"),
            ("one\ttwo",            8, "one     two"),
            ("one\ttwo",            4, "one two"),
            ("one\ttwo",            2, "one two"),
            ("one\t\u{8}two",       8, "one     \u{8}two"),
            ("one\t\u{8}two",       4, "one \u{8}two"),
            ("one\t\u{8}two",       2, "one \u{8}two"),
            ("1\t2\t2",             8, "1       2       2"),
            ("1\t2\t2",             4, "1   2   2"),
            ("1\t2\t2",             2, "1 2 2"),
            ("12\t22\t2",           8, "12      22      2"),
            ("12\t22\t2",           4, "12  22  2"),
            ("12\t22\t2",           2, "12  22  2"),
            ("123\t222\t2",         8, "123     222     2"),
            ("123\t222\t2",         4, "123 222 2"),
            ("123\t222\t2",         2, "123 222 2"),
            ("1234\t2222\t2",       8, "1234    2222    2"),
            ("1234\t2222\t2",       4, "1234    2222    2"),
            ("1234\t2222\t2",       2, "1234  2222  2"),
            ("12345\t22222\t2",     8, "12345   22222   2"),
            ("12345\t22222\t2",     4, "12345   22222   2"),
            ("12345\t22222\t2",     2, "12345 22222 2"),
            ("123456\t222222\t2",   8, "123456  222222  2"),
            ("123456\t222222\t2",   4, "123456  222222  2"),
            ("123456\t222222\t2",   2, "123456  222222  2"),
            ("1234567\t2222222\t2", 8, "1234567 2222222 2"),
            ("1234567\t2222222\t2", 4, "1234567 2222222 2"),
            ("1234567\t2222222\t2", 2, "1234567 2222222 2"),
            ("12345678\t22222222\t2", 8, "12345678        22222222        2"),
            ("12345678\t22222222\t2", 4, "12345678    22222222    2"),
            ("12345678\t22222222\t2", 2, "12345678  22222222  2"),
            ("12345678\t2",          8, "12345678        2"),
            ("12345678\t2",          4, "12345678    2"),
            ("12345678\t2",          2, "12345678  2"),
        ];

        for (input, tab_width, expected) in test_cases {
            let tab_str = UniString::from(input);
            assert_eq!(tab_str.expand_tabs(tab_width), expected, "input {input:?} width {tab_width}");
        }
    }

    #[test]
    fn non_positive_tab_width_disables_expansion() {
        let tab_str = UniString::from("12345678\t2");
        assert_eq!(tab_str.expand_tabs(0), "12345678\t2");
        assert_eq!(tab_str.expand_tabs(-1), "12345678\t2");
        assert!(UniString::new().expand_tabs(8).is_null());
    }

    #[test]
    fn c0_codes_become_control_pictures() {
        // All C0 control codes except NUL, in order.
        let c0 = UniString::from_buffer((1..=0x1f_u32).map(|c| char::from_u32(c).unwrap()).collect());
        assert_eq!(c0.len(), 31);
        assert_eq!(c0.replace_control_codes(), "␁␂␃␄␅␆␇␈␉␊␋␌␍␎␏␐␑␒␓␔␕␖␗␘␙␚␛␜␝␞␟");
        assert_eq!(c0.replace_control_codes().len(), 31);

        let mixed = UniString::from("t\u{8}\u{8}Tes\u{7f}Tt");
        assert_eq!(mixed.replace_control_codes(), "t␈␈Tes␡Tt");

        let nul = UniString::with_len(1);
        assert_eq!(nul.replace_control_codes(), "␀");
    }

    #[test]
    fn c1_codes_become_plain_spaces() {
        let c1 = UniString::from_buffer((0x80..=0x9f_u32).map(|c| char::from_u32(c).unwrap()).collect());
        assert_eq!(c1.len(), 32);
        assert_eq!(c1.replace_control_codes(), UniString::repeated(32, ' '));
    }

    #[test]
    fn replace_control_codes_is_idempotent() {
        let c0 = UniString::from("a\u{1}b\u{1f}c\u{7f}");
        let once = c0.replace_control_codes();
        let twice = once.replace_control_codes();
        assert_eq!(once, twice);
        assert_eq!(once, "a␁b␟c␡");
    }
}
