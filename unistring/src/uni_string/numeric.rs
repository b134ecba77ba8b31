// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

//! Numeric parsing. Every conversion trims the content first and then
//! requires the whole remainder to be a number; there is no partial-parse
//! success. Overflow and underflow are distinct error kinds, per width.

use super::UniString;
use crate::{Result, UniStringError};

impl UniString {
    /// Content with Unicode whitespace stripped from both ends.
    fn trimmed_content(&self) -> &[char] {
        let chars = self.code_point_slice();
        let start = chars.iter().take_while(|c| c.is_whitespace()).count();
        let end = chars.len() - chars[start..].iter().rev().take_while(|c| c.is_whitespace()).count();
        &chars[start..end]
    }

    /// Parses a signed 64-bit integer: optional sign, decimal digits.
    ///
    /// # Errors
    ///
    /// [`UniStringError::InvalidFormat`] for null/empty/non-numeric content,
    /// [`UniStringError::Overflow`] / [`UniStringError::Underflow`] when the
    /// magnitude leaves the `i64` range.
    pub fn to_i64(&self) -> Result<i64> {
        let mut chars = self.trimmed_content().iter().copied().peekable();
        let negative = match chars.peek() {
            Some('-') => {
                chars.next();
                true
            }
            Some('+') => {
                chars.next();
                false
            }
            _ => false,
        };

        // Accumulate on the negative side so that i64::MIN parses without a
        // final negation step.
        let mut acc: i64 = 0;
        let mut saw_digit = false;
        for c in chars {
            let Some(digit) = c.to_digit(10) else {
                return Err(UniStringError::InvalidFormat);
            };
            saw_digit = true;
            let digit = i64::from(digit);
            acc = acc
                .checked_mul(10)
                .and_then(|acc| {
                    if negative {
                        acc.checked_sub(digit)
                    } else {
                        acc.checked_add(digit)
                    }
                })
                .ok_or(if negative {
                    UniStringError::Underflow
                } else {
                    UniStringError::Overflow
                })?;
        }
        if !saw_digit {
            return Err(UniStringError::InvalidFormat);
        }
        Ok(acc)
    }

    /// Parses an unsigned 64-bit integer. A well-formed negative number is an
    /// [`UniStringError::Underflow`], not an invalid format.
    ///
    /// # Errors
    ///
    /// See [`Self::to_i64`].
    pub fn to_u64(&self) -> Result<u64> {
        let mut chars = self.trimmed_content().iter().copied().peekable();
        let negative = match chars.peek() {
            Some('-') => {
                chars.next();
                true
            }
            Some('+') => {
                chars.next();
                false
            }
            _ => false,
        };

        let mut acc: u64 = 0;
        let mut saw_digit = false;
        for c in chars {
            let Some(digit) = c.to_digit(10) else {
                return Err(UniStringError::InvalidFormat);
            };
            saw_digit = true;
            acc = acc
                .checked_mul(10)
                .and_then(|acc| acc.checked_add(u64::from(digit)))
                .ok_or(UniStringError::Overflow)?;
        }
        if !saw_digit {
            return Err(UniStringError::InvalidFormat);
        }
        if negative {
            return Err(UniStringError::Underflow);
        }
        Ok(acc)
    }

    /// # Errors
    ///
    /// See [`Self::to_i64`]; the range checks use the 16-bit limits.
    pub fn to_i16(&self) -> Result<i16> {
        narrow_signed(self.to_i64()?, i64::from(i16::MIN), i64::from(i16::MAX)).map(|v| v as i16)
    }

    /// # Errors
    ///
    /// See [`Self::to_i64`]; the range checks use the 32-bit limits.
    pub fn to_i32(&self) -> Result<i32> {
        narrow_signed(self.to_i64()?, i64::from(i32::MIN), i64::from(i32::MAX)).map(|v| v as i32)
    }

    /// # Errors
    ///
    /// See [`Self::to_u64`]; the range check uses the 16-bit limit.
    pub fn to_u16(&self) -> Result<u16> {
        narrow_unsigned(self.to_u64()?, u64::from(u16::MAX)).map(|v| v as u16)
    }

    /// # Errors
    ///
    /// See [`Self::to_u64`]; the range check uses the 32-bit limit.
    pub fn to_u32(&self) -> Result<u32> {
        narrow_unsigned(self.to_u64()?, u64::from(u32::MAX)).map(|v| v as u32)
    }

    /// Parses standard decimal / exponent notation.
    ///
    /// # Errors
    ///
    /// [`UniStringError::InvalidFormat`] for null/empty/non-numeric content;
    /// [`UniStringError::Overflow`] beyond the finite range (either sign);
    /// [`UniStringError::Underflow`] for nonzero magnitudes below
    /// [`f64::EPSILON`].
    pub fn to_f64(&self) -> Result<f64> {
        let trimmed: String = self.trimmed_content().iter().collect();
        if trimmed.is_empty() {
            return Err(UniStringError::InvalidFormat);
        }
        let value: f64 = trimmed.parse().map_err(|_| UniStringError::InvalidFormat)?;
        if value.is_infinite() {
            return Err(UniStringError::Overflow);
        }
        if value != 0.0 && value.abs() < f64::EPSILON {
            return Err(UniStringError::Underflow);
        }
        Ok(value)
    }

    /// Like [`Self::to_f64`] with the 32-bit range: overflow past
    /// [`f32::MAX`] in either sign, underflow for nonzero magnitudes below
    /// [`f32::EPSILON`].
    ///
    /// # Errors
    ///
    /// See [`Self::to_f64`].
    pub fn to_f32(&self) -> Result<f32> {
        let value = self.to_f64()?;
        if value.abs() > f64::from(f32::MAX) {
            return Err(UniStringError::Overflow);
        }
        if value != 0.0 && value.abs() < f64::from(f32::EPSILON) {
            return Err(UniStringError::Underflow);
        }
        Ok(value as f32)
    }
}

fn narrow_signed(value: i64, min: i64, max: i64) -> Result<i64> {
    if value > max {
        Err(UniStringError::Overflow)
    } else if value < min {
        Err(UniStringError::Underflow)
    } else {
        Ok(value)
    }
}

fn narrow_unsigned(value: u64, max: u64) -> Result<u64> {
    if value > max {
        Err(UniStringError::Overflow)
    } else {
        Ok(value)
    }
}
