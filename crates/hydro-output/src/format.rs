//! File formats, binary byte order, and per-variable target encodings.

use std::fmt;
use std::str::FromStr;

use log::error;

use crate::{OutputError, OutputResult};

// ── FileFormat ────────────────────────────────────────────────────────────────

/// Wire format of one stream file.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FileFormat {
    /// Tab-delimited text, one line per record.
    Ascii,
    /// Packed fixed-width fields, no delimiters.
    Binary,
}

impl FileFormat {
    fn unsupported(value: String) -> OutputError {
        error!("Unrecognized OUT_FORMAT option: {value:?}");
        OutputError::UnsupportedFormat(value)
    }
}

impl FromStr for FileFormat {
    type Err = OutputError;

    /// Parse an `OUT_FORMAT` option (`ASCII` or `BINARY`, case-insensitive).
    ///
    /// Any other value is fatal for the stream: it is logged once at error
    /// level and returned as [`OutputError::UnsupportedFormat`].
    fn from_str(s: &str) -> OutputResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASCII" => Ok(FileFormat::Ascii),
            "BINARY" => Ok(FileFormat::Binary),
            _ => Err(Self::unsupported(s.to_string())),
        }
    }
}

impl TryFrom<u8> for FileFormat {
    type Error = OutputError;

    /// Numeric option codes: `0` = ASCII, `1` = BINARY.
    fn try_from(code: u8) -> OutputResult<Self> {
        match code {
            0 => Ok(FileFormat::Ascii),
            1 => Ok(FileFormat::Binary),
            n => Err(Self::unsupported(n.to_string())),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileFormat::Ascii => "ASCII",
            FileFormat::Binary => "BINARY",
        })
    }
}

// ── ByteOrder ─────────────────────────────────────────────────────────────────

/// Byte order of every multi-byte binary field (header and payload).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ByteOrder {
    /// Host order.
    #[default]
    Native,
    Little,
    Big,
}

// ── OutType ───────────────────────────────────────────────────────────────────

/// Target numeric encoding of one variable in binary files.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum OutType {
    /// Signed 8-bit.
    Char,
    /// Signed 16-bit.
    ShortInt,
    /// Unsigned 16-bit.
    UShortInt,
    /// Signed 32-bit.
    Int,
    /// 32-bit IEEE 754.
    Float,
    /// 64-bit IEEE 754.
    Double,
}

impl OutType {
    pub const ALL: [OutType; 6] = [
        OutType::Char,
        OutType::ShortInt,
        OutType::UShortInt,
        OutType::Int,
        OutType::Float,
        OutType::Double,
    ];

    /// Encoded width in bytes.
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            OutType::Char => 1,
            OutType::ShortInt | OutType::UShortInt => 2,
            OutType::Int | OutType::Float => 4,
            OutType::Double => 8,
        }
    }

    /// Configuration keyword, e.g. `OUT_TYPE_SINT`.
    pub const fn keyword(self) -> &'static str {
        match self {
            OutType::Char => "OUT_TYPE_CHAR",
            OutType::ShortInt => "OUT_TYPE_SINT",
            OutType::UShortInt => "OUT_TYPE_USINT",
            OutType::Int => "OUT_TYPE_INT",
            OutType::Float => "OUT_TYPE_FLOAT",
            OutType::Double => "OUT_TYPE_DOUBLE",
        }
    }
}

impl FromStr for OutType {
    type Err = OutputError;

    /// Accepts `OUT_TYPE_CHAR` … `OUT_TYPE_DOUBLE` or the bare suffix,
    /// case-insensitive.
    fn from_str(s: &str) -> OutputResult<Self> {
        let upper = s.trim().to_ascii_uppercase();
        let key = upper.strip_prefix("OUT_TYPE_").unwrap_or(&upper);
        match key {
            "CHAR" => Ok(OutType::Char),
            "SINT" => Ok(OutType::ShortInt),
            "USINT" => Ok(OutType::UShortInt),
            "INT" => Ok(OutType::Int),
            "FLOAT" => Ok(OutType::Float),
            "DOUBLE" => Ok(OutType::Double),
            _ => Err(OutputError::UnsupportedType(s.to_string())),
        }
    }
}

impl fmt::Display for OutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
