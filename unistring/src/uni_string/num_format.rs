// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

//! Number-to-text conversion: canonical decimal rendering with significant-
//! digit control for floats, and digit grouping for integers.

use super::UniString;

/// A numeric value accepted by [`UniString::set_number`]. The float width is
/// kept so the default significant-digit count can differ per type (6 for
/// `f32`, 15 for `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    F32(f32),
    F64(f64),
}

mod number_conversions {
    use super::Number;

    macro_rules! impl_from_signed {
        ($($int_type:ty),* $(,)?) => {$(
            impl From<$int_type> for Number {
                fn from(it: $int_type) -> Self { Number::Int(i64::from(it)) }
            }
        )*};
    }

    macro_rules! impl_from_unsigned {
        ($($int_type:ty),* $(,)?) => {$(
            impl From<$int_type> for Number {
                fn from(it: $int_type) -> Self { Number::UInt(u64::from(it)) }
            }
        )*};
    }

    impl_from_signed!(i8, i16, i32, i64);
    impl_from_unsigned!(u8, u16, u32, u64);

    impl From<isize> for Number {
        fn from(it: isize) -> Self { Number::Int(it as i64) }
    }

    impl From<usize> for Number {
        fn from(it: usize) -> Self { Number::UInt(it as u64) }
    }

    impl From<f32> for Number {
        fn from(it: f32) -> Self { Number::F32(it) }
    }

    impl From<f64> for Number {
        fn from(it: f64) -> Self { Number::F64(it) }
    }
}

/// Integer types whose digits can be grouped by
/// [`UniString::set_formatted_number`].
pub trait GroupDigits: Copy {
    fn sign_and_magnitude(self) -> (bool, u64);
}

macro_rules! impl_group_digits_signed {
    ($($int_type:ty),* $(,)?) => {$(
        impl GroupDigits for $int_type {
            fn sign_and_magnitude(self) -> (bool, u64) {
                (self < 0, u64::from(self.unsigned_abs()))
            }
        }
    )*};
}

macro_rules! impl_group_digits_unsigned {
    ($($int_type:ty),* $(,)?) => {$(
        impl GroupDigits for $int_type {
            fn sign_and_magnitude(self) -> (bool, u64) { (false, u64::from(self)) }
        }
    )*};
}

impl_group_digits_signed!(i8, i16, i32, i64);
impl_group_digits_unsigned!(u8, u16, u32, u64);

impl GroupDigits for isize {
    fn sign_and_magnitude(self) -> (bool, u64) { (self < 0, self.unsigned_abs() as u64) }
}

impl GroupDigits for usize {
    fn sign_and_magnitude(self) -> (bool, u64) { (false, self as u64) }
}

impl UniString {
    /// Overwrites the content with the canonical decimal form of `value`.
    ///
    /// Integers render in full; floats render with their natural
    /// significant-digit count (6 for `f32`, 15 for `f64`) in the shortest of
    /// fixed/scientific notation, trailing fraction zeros removed.
    pub fn set_number(&mut self, value: impl Into<Number>) -> &mut Self {
        match value.into() {
            Number::Int(v) => self.set_string(v.to_string()),
            Number::UInt(v) => self.set_string(v.to_string()),
            Number::F32(v) => self.set_string(format_general(f64::from(v), 6)),
            Number::F64(v) => self.set_string(format_general(v, 15)),
        }
    }

    /// Like [`Self::set_number`] with an explicit significant-digit count for
    /// floats. A count of `0` forces scientific notation with a minimal
    /// mantissa (`1234.56` renders as `"1e+03"`); large counts expand the
    /// exact binary value. Integers ignore the count.
    pub fn set_number_with_precision(
        &mut self,
        value: impl Into<Number>,
        significant_digits: usize,
    ) -> &mut Self {
        match value.into() {
            Number::Int(v) => self.set_string(v.to_string()),
            Number::UInt(v) => self.set_string(v.to_string()),
            Number::F32(v) => self.set_string(format_general(f64::from(v), significant_digits)),
            Number::F64(v) => self.set_string(format_general(v, significant_digits)),
        }
    }

    /// Overwrites the content with `value` rendered in groups of three digits
    /// from the right, joined by `separator`. A NUL separator falls back to a
    /// single space.
    pub fn set_formatted_number<N: GroupDigits>(&mut self, value: N, separator: char) -> &mut Self {
        let (negative, magnitude) = value.sign_and_magnitude();
        let separator = if separator == '\0' { ' ' } else { separator };
        let digits = magnitude.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if negative {
            grouped.push('-');
        }
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(digit);
        }
        self.set_string(grouped)
    }
}

/// C `%.*g`-style rendering: `significant_digits` significant digits, fixed
/// notation while the exponent fits, scientific otherwise, trailing fraction
/// zeros stripped. The scientific exponent carries a sign and at least two
/// digits.
pub(crate) fn format_general(value: f64, significant_digits: usize) -> String {
    let digits = significant_digits.max(1);
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to the requested digit count first; the notation choice depends
    // on the exponent *after* rounding (999.6 at one digit is "1e+03").
    let rounded = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = rounded.split_once('e') else {
        return rounded;
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);

    if exponent >= -4 && exponent < digits as i64 {
        let decimals = usize::try_from(digits as i64 - 1 - exponent).unwrap_or(0);
        strip_fraction_zeros(format!("{value:.decimals$}"))
    } else {
        let mantissa = strip_fraction_zeros(mantissa.to_string());
        format!("{mantissa}e{}{:02}", if exponent < 0 { '-' } else { '+' }, exponent.abs())
    }
}

/// C `%e`-style rendering with a fixed fraction digit count and a signed
/// two-digit exponent.
pub(crate) fn format_scientific(value: f64, decimals: usize, uppercase: bool) -> String {
    let rendered = format!("{value:.decimals$e}");
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        return rendered;
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let e = if uppercase { 'E' } else { 'e' };
    format!("{mantissa}{e}{}{:02}", if exponent < 0 { '-' } else { '+' }, exponent.abs())
}

fn strip_fraction_zeros(rendered: String) -> String {
    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        rendered
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn number(value: impl Into<Number>) -> UniString {
        let mut s = UniString::new();
        s.set_number(value);
        s
    }

    #[test]
    fn set_number_integers() {
        assert_eq!(number(-12_i8), "-12");
        assert_eq!(number(12_u8), "12");
        assert_eq!(number(-1234_i16), "-1234");
        assert_eq!(number(1234_u16), "1234");
        assert_eq!(number(-12345_i32), "-12345");
        assert_eq!(number(12345_u32), "12345");
        assert_eq!(number(-12_345_678_i64), "-12345678");
        assert_eq!(number(12_345_678_u64), "12345678");
        assert_eq!(number(12_345_678_usize), "12345678");
        assert_eq!(number(i64::MIN), "-9223372036854775808");
        assert_eq!(number(u64::MAX), "18446744073709551615");
    }

    #[test]
    fn set_number_floats_default_precision() {
        assert_eq!(number(1234.56_f32), "1234.56");
        assert_eq!(number(1234.5678_f64), "1234.5678");
        assert_eq!(number(3.14159_f32), "3.14159");
        assert_eq!(number(3.141_592_653_5_f64), "3.1415926535");
        assert_eq!(number(0.0_f64), "0");
        assert_eq!(number(-2.5_f64), "-2.5");
        assert_eq!(number(100.0_f64), "100");
    }

    #[test]
    fn set_number_precision_zero_forces_scientific() {
        let mut s = UniString::new();
        s.set_number_with_precision(1234.56_f32, 0);
        assert_eq!(s, "1e+03");
        s.set_number_with_precision(1234.5678_f64, 0);
        assert_eq!(s, "1e+03");
        s.set_number_with_precision(0.000_05_f64, 0);
        assert_eq!(s, "5e-05");
    }

    #[test]
    fn set_number_large_precision_expands_exact_binary_value() {
        let mut s = UniString::new();
        s.set_number_with_precision(1234.56_f32, 100);
        assert_eq!(s, "1234.56005859375");
        s.set_number_with_precision(1234.5678_f64, 100);
        assert_eq!(s, "1234.567800000000033833202905952930450439453125");
    }

    #[test]
    fn format_general_notation_boundaries() {
        let test_cases = [
            (0.000_123_456, 3, "0.000123"),
            (0.000_012_3, 3, "1.23e-05"),
            (999.6, 1, "1e+03"),
            (1e300, 15, "1e+300"),
            (1e-300, 15, "1e-300"),
            (-1234.56005859375, 6, "-1234.56"),
            (12345.6789, 15, "12345.6789"),
        ];

        for (value, digits, expected) in test_cases {
            assert_eq!(format_general(value, digits), expected);
        }
    }

    #[test]
    fn format_scientific_exponent_shape() {
        assert_eq!(format_scientific(50.0, 6, false), "5.000000e+01");
        assert_eq!(format_scientific(-0.000_25, 2, false), "-2.50e-04");
        assert_eq!(format_scientific(50.0, 1, true), "5.0E+01");
    }

    #[test]
    fn set_formatted_number_groups_of_three() {
        let mut fnum = UniString::new();

        fnum.set_formatted_number(u64::MAX, '\'');
        assert_eq!(fnum, "18'446'744'073'709'551'615");

        fnum.set_formatted_number(-9_223_372_036_854_775_807_i64, ' ');
        assert_eq!(fnum, "-9 223 372 036 854 775 807");

        // NUL separator falls back to a space.
        fnum.set_formatted_number(9_223_372_036_854_775_807_i64, '\0');
        assert_eq!(fnum, "9 223 372 036 854 775 807");

        fnum.set_formatted_number(-2048_i16, '_');
        assert_eq!(fnum, "-2_048");

        fnum.set_formatted_number(65535_u16, ' ');
        assert_eq!(fnum, "65 535");

        // Three digits or fewer: no separator at all.
        fnum.set_formatted_number(-123_i8, '*');
        assert_eq!(fnum, "-123");

        fnum.set_formatted_number(255_u8, ' ');
        assert_eq!(fnum, "255");

        fnum.set_formatted_number(0_u8, ' ');
        assert_eq!(fnum, "0");
    }

    #[test]
    fn round_trip_integers() {
        for value in [0_i64, 1, -1, 999, -1000, i64::MAX, i64::MIN] {
            let mut s = UniString::new();
            s.set_number(value);
            assert_eq!(s.to_i64(), Ok(value));
        }
        for value in [0_u64, 7, 1_000_000, u64::MAX] {
            let mut s = UniString::new();
            s.set_number(value);
            assert_eq!(s.to_u64(), Ok(value));
        }
    }

    #[test]
    fn round_trip_floats_within_precision() {
        for value in [1.5_f64, -2.25, 1234.5678, 0.000_9, 6.022e23, 0.0] {
            let mut s = UniString::new();
            s.set_number(value);
            let parsed = s.to_f64().unwrap();
            let tolerance = value.abs() * 1e-14;
            assert!((parsed - value).abs() <= tolerance, "{value} round-tripped as {parsed}");
        }
        for value in [1.5_f32, -2.25, 1234.56, 3.14159] {
            let mut s = UniString::new();
            s.set_number(value);
            let parsed = s.to_f32().unwrap();
            let tolerance = value.abs() * 1e-5;
            assert!((parsed - value).abs() <= tolerance, "{value} round-tripped as {parsed}");
        }
    }
}
