//! Lenient text-to-number conversion for vectors read from text sources
//!
//! Values coming out of XML attributes or hand-edited files are converted with
//! `strtod`-like rules: leading whitespace and an optional sign are accepted,
//! then the longest decimal prefix is used and anything after it is ignored.
//! Text with no numeric prefix becomes `0.0`.
//!
//! This conversion is lossy on purpose and never raises. It is kept apart
//! from the arithmetic in [`Space`], which stays strict.

use lazy_static::lazy_static;
use regex::Regex;

use super::Space;

/// Text used for a missing component
pub const ZERO_STRING: &str = "0.0";

lazy_static! {
    /// Optional whitespace and sign, mantissa, optional exponent
    static ref NUMBER_PREFIX: Regex =
        Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
            .expect("number prefix pattern is valid");
}

/// Parse the leading decimal number in `text`, yielding 0.0 on any failure
///
/// Overflowing values (e.g. `"1e400"`) also yield 0.0 so the result is always
/// finite.
///
/// # Examples
///
/// ```rust
/// use cartesian::space::parse_or_zero;
///
/// assert_eq!(parse_or_zero("1.23"), 1.23);
/// assert_eq!(parse_or_zero("  -1.23e-7"), -1.23e-7);
/// assert_eq!(parse_or_zero("3.5 meters"), 3.5);
/// assert_eq!(parse_or_zero("asdf"), 0.0);
/// assert_eq!(parse_or_zero(""), 0.0);
/// ```
pub fn parse_or_zero(text: &str) -> f64 {
    let value = NUMBER_PREFIX
        .find(text)
        .and_then(|m| m.as_str().trim_start().parse::<f64>().ok())
        .unwrap_or(0.0);

    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl Space {
    /// Builds a vector from one to three text fields (x, then y, then z)
    ///
    /// Missing fields are treated as [`ZERO_STRING`]; fields past the third
    /// are ignored. Each field goes through [`parse_or_zero`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartesian::space::Space;
    ///
    /// let v = Space::from_strs(&["1.23", "-1.23e-7", "10"]);
    /// assert_eq!(v, Space::new(1.23, -1.23e-7, 10.0));
    ///
    /// let w = Space::from_strs(&["-1.5"]);
    /// assert_eq!(w, Space::new(-1.5, 0.0, 0.0));
    /// ```
    pub fn from_strs(fields: &[&str]) -> Space {
        let field = |i: usize| parse_or_zero(fields.get(i).copied().unwrap_or(ZERO_STRING));
        Space::new(field(0), field(1), field(2))
    }
}
