//! Per-variable text formats for ASCII stream files.
//!
//! Configuration files describe the rendering of each variable with a
//! printf-style descriptor such as `%.4f`.  Descriptors are parsed once, when
//! the stream file is configured, into a closed set of [`TextFormat`]
//! strategies; rendering a value is then a pure function and never
//! interprets a format string at write time.
//!
//! Accepted grammar: `%[-][width][.precision][l]conv`, with `conv` one of
//! `f F e E d i`.  The single descriptor `*` selects [`TextFormat::DEFAULT`].

use std::fmt;
use std::str::FromStr;

use crate::{OutputError, OutputResult};

/// Default precision of `%f`/`%e` when none is given.
const C_DEFAULT_PRECISION: usize = 6;

/// Rendering strategy for one variable.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TextFormat {
    /// `%W.Pf`, `%W.PF` — `F` spells non-finite values in upper case.
    Fixed {
        width:     Option<usize>,
        precision: usize,
        upper:     bool,
        left:      bool,
    },
    /// `%W.Pe`, `%W.PE` — mantissa plus a signed, at least two digit exponent.
    Scientific {
        width:     Option<usize>,
        precision: usize,
        upper:     bool,
        left:      bool,
    },
    /// `%Wd` — value truncated toward zero.
    Integer {
        width: Option<usize>,
        left:  bool,
    },
}

impl TextFormat {
    /// `%.4f`, used for the `*` descriptor.
    pub const DEFAULT: TextFormat = TextFormat::Fixed {
        width:     None,
        precision: 4,
        upper:     false,
        left:      false,
    };

    pub const fn fixed(precision: usize) -> Self {
        TextFormat::Fixed { width: None, precision, upper: false, left: false }
    }

    pub const fn scientific(precision: usize) -> Self {
        TextFormat::Scientific { width: None, precision, upper: false, left: false }
    }

    pub const fn integer() -> Self {
        TextFormat::Integer { width: None, left: false }
    }

    /// A `Display` adapter rendering `value` with this format.
    #[inline]
    pub fn render(&self, value: f64) -> Rendered<'_> {
        Rendered { format: self, value }
    }

    fn body(&self, value: f64) -> String {
        match *self {
            TextFormat::Fixed { precision, upper, .. } => match non_finite(value) {
                Some(s) if upper => s.to_ascii_uppercase(),
                Some(s) => s.to_string(),
                None => format!("{value:.precision$}"),
            },
            TextFormat::Scientific { precision, upper, .. } => match non_finite(value) {
                Some(s) if upper => s.to_ascii_uppercase(),
                Some(s) => s.to_string(),
                None => c_exponent(&format!("{value:.precision$e}"), upper),
            },
            TextFormat::Integer { .. } => (value as i64).to_string(),
        }
    }

    fn layout(&self) -> (Option<usize>, bool) {
        match *self {
            TextFormat::Fixed { width, left, .. }
            | TextFormat::Scientific { width, left, .. }
            | TextFormat::Integer { width, left } => (width, left),
        }
    }
}

impl Default for TextFormat {
    fn default() -> Self {
        TextFormat::DEFAULT
    }
}

/// C spelling of non-finite values.
fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value.is_infinite() {
        Some(if value > 0.0 { "inf" } else { "-inf" })
    } else {
        None
    }
}

/// Rewrite Rust's `1.5e-3` exponent as C's `1.5e-03`.
fn c_exponent(rust: &str, upper: bool) -> String {
    let Some((mantissa, exp)) = rust.split_once('e') else {
        return rust.to_string();
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    let e = if upper { 'E' } else { 'e' };
    format!("{mantissa}{e}{sign}{digits:0>2}")
}

/// Returned by [`TextFormat::render`].
pub struct Rendered<'a> {
    format: &'a TextFormat,
    value:  f64,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.format.body(self.value);
        match self.format.layout() {
            (Some(width), true) => write!(f, "{body:<width$}"),
            (Some(width), false) => write!(f, "{body:>width$}"),
            (None, _) => f.write_str(&body),
        }
    }
}

impl FromStr for TextFormat {
    type Err = OutputError;

    fn from_str(descriptor: &str) -> OutputResult<Self> {
        let bad = |reason| OutputError::BadTextFormat {
            descriptor: descriptor.to_string(),
            reason,
        };

        let s = descriptor.trim();
        if s == "*" {
            return Ok(TextFormat::DEFAULT);
        }
        let mut rest = s.strip_prefix('%').ok_or_else(|| bad("must start with '%'"))?;

        let left = match rest.strip_prefix('-') {
            Some(r) => {
                rest = r;
                true
            }
            None => false,
        };

        let (width, r) = take_digits(rest);
        rest = r;

        let precision = match rest.strip_prefix('.') {
            Some(r) => {
                let (p, r) = take_digits(r);
                rest = r;
                // "%.f" means precision 0, as in C.
                Some(p.unwrap_or(0))
            }
            None => None,
        };

        rest = rest.strip_prefix('l').unwrap_or(rest);

        let mut chars = rest.chars();
        let conv = chars.next().ok_or_else(|| bad("missing conversion character"))?;
        if chars.next().is_some() {
            return Err(bad("trailing characters after the conversion"));
        }

        match conv {
            'f' | 'F' => Ok(TextFormat::Fixed {
                width,
                precision: precision.unwrap_or(C_DEFAULT_PRECISION),
                upper: conv == 'F',
                left,
            }),
            'e' | 'E' => Ok(TextFormat::Scientific {
                width,
                precision: precision.unwrap_or(C_DEFAULT_PRECISION),
                upper: conv == 'E',
                left,
            }),
            'd' | 'i' if precision.is_none() => Ok(TextFormat::Integer { width, left }),
            'd' | 'i' => Err(bad("integer conversions take no precision")),
            _ => Err(bad("expected one of f, e, E, d, i")),
        }
    }
}

fn take_digits(s: &str) -> (Option<usize>, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return (None, s);
    }
    (s[..end].parse().ok(), &s[end..])
}
