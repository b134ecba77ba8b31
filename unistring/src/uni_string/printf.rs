// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

//! printf-style formatting. The format template is parsed with nom into
//! literal runs and conversion specs; arguments arrive as [`SprintfArg`]
//! values, usually packed by the [`sprintf_args!`] macro:
//!
//! ```
//! use unistring::{UniString, sprintf_args};
//!
//! let mut s = UniString::new();
//! s.sprintf("There are %d lions in the %s", sprintf_args![3, "zoo"]);
//! assert_eq!(s, "There are 3 lions in the zoo");
//! ```

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_while1},
          character::complete::{anychar, char as spec_char, digit1, one_of},
          combinator::{consumed, map, opt, value},
          multi::many0,
          sequence::preceded};

use super::{UniString,
            num_format::{format_general, format_scientific}};

/// One argument for [`UniString::sprintf`]. Heterogeneous argument lists are
/// packed with [`sprintf_args!`].
#[derive(Debug, Clone, PartialEq)]
pub enum SprintfArg {
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(UniString),
}

mod arg_conversions {
    use super::{SprintfArg, UniString};

    macro_rules! impl_from_signed {
        ($($int_type:ty),* $(,)?) => {$(
            impl From<$int_type> for SprintfArg {
                fn from(it: $int_type) -> Self { SprintfArg::Int(it as i64) }
            }
        )*};
    }

    macro_rules! impl_from_unsigned {
        ($($int_type:ty),* $(,)?) => {$(
            impl From<$int_type> for SprintfArg {
                fn from(it: $int_type) -> Self { SprintfArg::UInt(it as u64) }
            }
        )*};
    }

    impl_from_signed!(i8, i16, i32, i64, isize);
    impl_from_unsigned!(u8, u16, u32, u64, usize);

    impl From<f32> for SprintfArg {
        fn from(it: f32) -> Self { SprintfArg::Float(f64::from(it)) }
    }

    impl From<f64> for SprintfArg {
        fn from(it: f64) -> Self { SprintfArg::Float(it) }
    }

    impl From<char> for SprintfArg {
        fn from(it: char) -> Self { SprintfArg::Char(it) }
    }

    impl From<&str> for SprintfArg {
        fn from(it: &str) -> Self { SprintfArg::Str(UniString::from(it)) }
    }

    impl From<String> for SprintfArg {
        fn from(it: String) -> Self { SprintfArg::Str(UniString::from(it)) }
    }

    impl From<UniString> for SprintfArg {
        fn from(it: UniString) -> Self { SprintfArg::Str(it) }
    }

    impl From<&UniString> for SprintfArg {
        fn from(it: &UniString) -> Self { SprintfArg::Str(it.clone()) }
    }
}

impl SprintfArg {
    fn as_i64(&self) -> i64 {
        match self {
            SprintfArg::Int(v) => *v,
            SprintfArg::UInt(v) => *v as i64,
            SprintfArg::Float(v) => *v as i64,
            SprintfArg::Char(c) => i64::from(u32::from(*c)),
            SprintfArg::Str(_) => 0,
        }
    }

    fn as_u64(&self) -> u64 {
        match self {
            SprintfArg::Int(v) => *v as u64,
            SprintfArg::UInt(v) => *v,
            SprintfArg::Float(v) => *v as u64,
            SprintfArg::Char(c) => u64::from(u32::from(*c)),
            SprintfArg::Str(_) => 0,
        }
    }

    fn as_f64(&self) -> f64 {
        match self {
            SprintfArg::Int(v) => *v as f64,
            SprintfArg::UInt(v) => *v as f64,
            SprintfArg::Float(v) => *v,
            SprintfArg::Char(c) => f64::from(u32::from(*c)),
            SprintfArg::Str(s) => s.to_f64().unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Count {
    Literal(usize),
    FromArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Flags {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FormatSpec {
    flags: Flags,
    width: Option<Count>,
    precision: Option<Count>,
    conversion: char,
}

#[derive(Debug, Clone, PartialEq)]
enum Piece<'a> {
    Literal(&'a str),
    Percent,
    Spec(FormatSpec, &'a str),
}

fn parse_pieces(input: &str) -> Vec<Piece<'_>> {
    let mut rest = input;
    let mut pieces = Vec::new();
    while !rest.is_empty() {
        match piece(rest) {
            Ok((next, parsed)) => {
                pieces.push(parsed);
                rest = next;
            }
            // A trailing '%' with nothing parseable behind it.
            Err(_) => {
                pieces.push(Piece::Literal(rest));
                break;
            }
        }
    }
    pieces
}

fn piece(input: &str) -> IResult<&str, Piece<'_>> {
    alt((literal_run, percent_escape, conversion_spec)).parse(input)
}

fn literal_run(input: &str) -> IResult<&str, Piece<'_>> {
    map(take_while1(|c| c != '%'), Piece::Literal).parse(input)
}

fn percent_escape(input: &str) -> IResult<&str, Piece<'_>> {
    value(Piece::Percent, tag("%%")).parse(input)
}

fn conversion_spec(input: &str) -> IResult<&str, Piece<'_>> {
    map(consumed(spec_body), |(raw, spec)| Piece::Spec(spec, raw)).parse(input)
}

#[rustfmt::skip]
fn spec_body(input: &str) -> IResult<&str, FormatSpec> {
    let (input, _) = spec_char('%').parse(input)?;
    let (input, flag_chars) = many0(one_of("-+ 0#'")).parse(input)?;
    let (input, width) = opt(count).parse(input)?;
    let (input, precision) = opt(
        // "%.f" means precision 0.
        preceded(spec_char('.'), map(opt(count), |c| c.unwrap_or(Count::Literal(0))))
    ).parse(input)?;
    let (input, _length_modifier) = opt(
        alt((tag("hh"), tag("ll"), tag("h"), tag("l"), tag("L"), tag("z"), tag("j"), tag("t")))
    ).parse(input)?;
    let (input, conversion) = anychar(input)?;

    let mut flags = Flags::default();
    for c in flag_chars {
        match c {
            '-' => flags.minus = true,
            '+' => flags.plus = true,
            ' ' => flags.space = true,
            '0' => flags.zero = true,
            '#' => flags.alt = true,
            // The grouping flag is accepted but has no effect here; grouping
            // goes through set_formatted_number instead.
            _ => {}
        }
    }
    Ok((input, FormatSpec { flags, width, precision, conversion }))
}

fn count(input: &str) -> IResult<&str, Count> {
    alt((
        value(Count::FromArgs, spec_char('*')),
        map(digit1, |digits: &str| Count::Literal(digits.parse().unwrap_or(0))),
    ))
    .parse(input)
}

struct ArgCursor<'a> {
    args: &'a [SprintfArg],
    next: usize,
}

impl<'a> ArgCursor<'a> {
    fn next(&mut self) -> Option<&'a SprintfArg> {
        let arg = self.args.get(self.next);
        self.next += 1;
        arg
    }
}

impl UniString {
    /// printf-style formatting against a narrow, wide, or `UniString`
    /// template. A null or empty template yields the null state. Unknown
    /// conversions are kept literally and logged at `warn` level; a spec
    /// with no matching argument is kept literally as well.
    pub fn sprintf(&mut self, format: impl Into<UniString>, args: &[SprintfArg]) -> &mut Self {
        let format = format.into();
        let template = match format.as_str() {
            None | Some("") => {
                self.clear();
                return self;
            }
            Some(t) => t,
        };

        let mut cursor = ArgCursor { args, next: 0 };
        let mut out = String::new();
        for piece in parse_pieces(template) {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Percent => out.push('%'),
                Piece::Spec(spec, raw) => render_spec(&spec, raw, &mut cursor, &mut out),
            }
        }
        self.set_string(out);
        self
    }
}

fn render_spec(spec: &FormatSpec, raw: &str, cursor: &mut ArgCursor<'_>, out: &mut String) {
    let mut flags = spec.flags;

    // '*' pulls the count from the argument list; a negative width means
    // left-justification.
    let width = match spec.width {
        None => None,
        Some(Count::Literal(w)) => Some(w),
        Some(Count::FromArgs) => cursor.next().map(|arg| {
            let w = arg.as_i64();
            if w < 0 {
                flags.minus = true;
            }
            w.unsigned_abs() as usize
        }),
    };
    let precision = match spec.precision {
        None => None,
        Some(Count::Literal(p)) => Some(p),
        Some(Count::FromArgs) => cursor
            .next()
            .map(|arg| arg.as_i64())
            .and_then(|p| usize::try_from(p).ok()),
    };

    let rendered = match spec.conversion {
        'd' | 'i' => cursor.next().map(|arg| {
            let v = arg.as_i64();
            signed_digits(v < 0, v.unsigned_abs().to_string(), precision, &flags)
        }),
        'u' => cursor
            .next()
            .map(|arg| signed_digits(false, arg.as_u64().to_string(), precision, &flags)),
        'o' => cursor.next().map(|arg| {
            let digits = format!("{:o}", arg.as_u64());
            let digits = if flags.alt { format!("0{digits}") } else { digits };
            signed_digits(false, digits, precision, &Flags { plus: false, space: false, ..flags })
        }),
        'x' | 'X' => cursor.next().map(|arg| {
            let v = arg.as_u64();
            let digits = if spec.conversion == 'x' { format!("{v:x}") } else { format!("{v:X}") };
            let prefixed = match (flags.alt, v) {
                (true, 1..) if spec.conversion == 'x' => format!("0x{digits}"),
                (true, 1..) => format!("0X{digits}"),
                _ => digits,
            };
            Rendered { text: prefixed, numeric: true, prefix_len: if flags.alt { 2 } else { 0 } }
        }),
        'c' => cursor.next().map(|arg| {
            let c = match arg {
                SprintfArg::Char(c) => *c,
                other => char::from_u32(other.as_u64() as u32).unwrap_or('\u{fffd}'),
            };
            Rendered { text: c.to_string(), numeric: false, prefix_len: 0 }
        }),
        's' | 'S' => cursor.next().map(|arg| {
            let text = match arg {
                SprintfArg::Str(s) => s.to_std_string(),
                SprintfArg::Char(c) => c.to_string(),
                SprintfArg::Int(v) => v.to_string(),
                SprintfArg::UInt(v) => v.to_string(),
                SprintfArg::Float(v) => format_general(*v, 6),
            };
            let text = match precision {
                Some(max) => text.chars().take(max).collect(),
                None => text,
            };
            Rendered { text, numeric: false, prefix_len: 0 }
        }),
        'f' | 'F' => cursor.next().map(|arg| {
            let v = arg.as_f64();
            let body = format!("{:.*}", precision.unwrap_or(6), v.abs());
            float_with_sign(v.is_sign_negative(), body, &flags)
        }),
        'e' | 'E' => cursor.next().map(|arg| {
            let v = arg.as_f64();
            let body =
                format_scientific(v.abs(), precision.unwrap_or(6), spec.conversion == 'E');
            float_with_sign(v.is_sign_negative(), body, &flags)
        }),
        'g' | 'G' => cursor.next().map(|arg| {
            let v = arg.as_f64();
            let body = format_general(v.abs(), precision.unwrap_or(6).max(1));
            let body = if spec.conversion == 'G' { body.to_uppercase() } else { body };
            float_with_sign(v.is_sign_negative(), body, &flags)
        }),
        unknown => {
            tracing::warn!(conversion = %unknown, spec = %raw, "unknown conversion, kept literally");
            out.push_str(raw);
            return;
        }
    };

    match rendered {
        Some(rendered) => out.push_str(&apply_width(rendered, width, &flags)),
        None => {
            tracing::warn!(spec = %raw, "missing argument, spec kept literally");
            out.push_str(raw);
        }
    }
}

struct Rendered {
    text: String,
    numeric: bool,
    /// Characters (sign / radix prefix) that zero-padding must stay behind.
    prefix_len: usize,
}

fn signed_digits(negative: bool, digits: String, precision: Option<usize>, flags: &Flags) -> Rendered {
    let digits = match precision {
        Some(min) if digits.len() < min => format!("{}{digits}", "0".repeat(min - digits.len())),
        _ => digits,
    };
    let sign = if negative {
        "-"
    } else if flags.plus {
        "+"
    } else if flags.space {
        " "
    } else {
        ""
    };
    Rendered { prefix_len: sign.len(), text: format!("{sign}{digits}"), numeric: true }
}

fn float_with_sign(negative: bool, body: String, flags: &Flags) -> Rendered {
    let sign = if negative {
        "-"
    } else if flags.plus {
        "+"
    } else if flags.space {
        " "
    } else {
        ""
    };
    Rendered { prefix_len: sign.len(), text: format!("{sign}{body}"), numeric: true }
}

fn apply_width(rendered: Rendered, width: Option<usize>, flags: &Flags) -> String {
    let Some(width) = width else {
        return rendered.text;
    };
    let current = rendered.text.chars().count();
    if current >= width {
        return rendered.text;
    }
    let pad = width - current;
    if flags.minus {
        format!("{}{}", rendered.text, " ".repeat(pad))
    } else if flags.zero && rendered.numeric {
        let split: usize = rendered.text.chars().take(rendered.prefix_len).map(char::len_utf8).sum();
        let (prefix, digits) = rendered.text.split_at(split);
        format!("{prefix}{}{digits}", "0".repeat(pad))
    } else {
        format!("{}{}", " ".repeat(pad), rendered.text)
    }
}

/// Packs heterogeneous arguments into a `&[SprintfArg]` slice for
/// [`UniString::sprintf`].
#[macro_export]
macro_rules! sprintf_args {
    () => { &[] as &[$crate::SprintfArg] };
    ($($arg:expr),+ $(,)?) => { &[$($crate::SprintfArg::from($arg)),+][..] };
}
