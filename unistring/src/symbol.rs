// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

// You can get the unicode symbols for the glyphs here:
// - <https://symbl.cc/en/unicode/blocks/currency-symbols/>
// - <https://symbl.cc/en/unicode/blocks/arrows/>
// - <https://symbl.cc/en/unicode/blocks/geometric-shapes/>

use strum_macros::AsRefStr;

/// Named glyphs commonly used on widget labels and status bars. Streamed into
/// a [`crate::UniString`] via [`crate::UniString::append`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, AsRefStr)]
pub enum Symbol {
    #[strum(to_string = "€")]
    Euro,

    #[strum(to_string = "£")]
    Pound,

    #[strum(to_string = "¥")]
    Yen,

    #[strum(to_string = "¢")]
    Cent,

    #[strum(to_string = "°")]
    Degree,

    #[strum(to_string = "±")]
    PlusMinus,

    #[strum(to_string = "·")]
    MiddleDot,

    #[strum(to_string = "•")]
    Bullet,

    #[strum(to_string = "…")]
    Ellipsis,

    #[strum(to_string = "©")]
    Copyright,

    #[strum(to_string = "§")]
    Section,

    #[strum(to_string = "¶")]
    Pilcrow,

    #[strum(to_string = "π")]
    Pi,

    #[strum(to_string = "←")]
    ArrowLeft,

    #[strum(to_string = "→")]
    ArrowRight,

    #[strum(to_string = "↑")]
    ArrowUp,

    #[strum(to_string = "↓")]
    ArrowDown,

    #[strum(to_string = "◆")]
    Diamond,

    #[strum(to_string = "■")]
    BlackSquare,

    #[strum(to_string = "□")]
    WhiteSquare,

    #[strum(to_string = "█")]
    FullBlock,

    #[strum(to_string = "▒")]
    MediumShade,

    #[strum(to_string = "✓")]
    CheckMark,

    #[strum(to_string = "✗")]
    BallotX,

    #[strum(to_string = "\u{a0}")]
    NoBreakSpace,
}

impl Symbol {
    /// The single code point behind the glyph.
    #[must_use]
    pub fn as_char(&self) -> char { self.as_ref().chars().next().unwrap_or(' ') }
}
