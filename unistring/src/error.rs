// Copyright (c) 2026 the unistring authors. Licensed under Apache License, Version 2.0.

//! Error taxonomy for [`crate::UniString`] operations. Each failure mode is a
//! distinct kind so widget-layer callers can decide per kind whether to log,
//! ignore, or abort rendering. See [`UniStringError`].

/// Errors surfaced by numeric conversion and indexed access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum UniStringError {
    /// Numeric parsing was asked to convert null, empty, or non-numeric
    /// content.
    #[error("invalid format: content is not a well-formed number")]
    #[diagnostic(
        code(unistring::invalid_format),
        help("the whole trimmed string must be a number; partial parses do not succeed")
    )]
    InvalidFormat,

    /// The parsed magnitude exceeds the maximum of the requested type.
    #[error("overflow: value exceeds the maximum of the requested type")]
    #[diagnostic(code(unistring::overflow))]
    Overflow,

    /// The parsed value falls below the minimum of the requested type. For
    /// floating point this covers nonzero magnitudes smaller than the type's
    /// epsilon; for unsigned integers any negative input lands here.
    #[error("underflow: value falls below the minimum of the requested type")]
    #[diagnostic(code(unistring::underflow))]
    Underflow,

    /// Indexed access outside `[0, length)`. `index == length` is not a valid
    /// past-the-end read.
    #[error("index {index} out of range for length {length}")]
    #[diagnostic(
        code(unistring::out_of_range),
        help("valid read indices are 0..length; insert additionally accepts index == length")
    )]
    OutOfRange { index: i64, length: usize },
}

pub type Result<T> = std::result::Result<T, UniStringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_are_distinguishable() {
        assert_ne!(UniStringError::Overflow, UniStringError::Underflow);
        assert_ne!(UniStringError::InvalidFormat, UniStringError::Overflow);
        let err = UniStringError::OutOfRange { index: 4, length: 3 };
        assert_eq!(err.to_string(), "index 4 out of range for length 3");
    }
}
