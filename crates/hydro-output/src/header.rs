//! Record time header.
//!
//! | Reporting interval | Fields                              |
//! |--------------------|-------------------------------------|
//! | `dt < 86400`       | year, month, day, day_seconds       |
//! | `dt >= 86400`      | year, month, day                    |
//!
//! Binary files store each field as a 4-byte signed integer.  ASCII files
//! write zero-padded, tab-terminated fields; the trailing tab separates the
//! header from the first variable field.

use std::io::{self, Write};

use byteorder::{BigEndian, ByteOrder as _, LittleEndian, NativeEndian};
use hydro_core::{Dmy, is_subdaily};

use crate::format::ByteOrder;

/// Largest header: four `i32` fields.
pub const MAX_HEADER_BYTES: usize = 16;

/// Number of header fields for a reporting interval of `dt` seconds.
#[inline]
pub fn header_field_count(dt: f64) -> usize {
    if is_subdaily(dt) { 4 } else { 3 }
}

/// Write the binary header: 3 or 4 contiguous `i32` fields.
///
/// Returns the number of bytes written.
pub fn write_binary_header<W: Write>(
    sink:  &mut W,
    dmy:   &Dmy,
    dt:    f64,
    order: ByteOrder,
) -> io::Result<usize> {
    let fields = [
        i32::from(dmy.year),
        i32::from(dmy.month),
        i32::from(dmy.day),
        dmy.day_seconds as i32,
    ];
    let n = header_field_count(dt);
    let len = n * 4;

    let mut buf = [0u8; MAX_HEADER_BYTES];
    match order {
        ByteOrder::Native => NativeEndian::write_i32_into(&fields[..n], &mut buf[..len]),
        ByteOrder::Little => LittleEndian::write_i32_into(&fields[..n], &mut buf[..len]),
        ByteOrder::Big => BigEndian::write_i32_into(&fields[..n], &mut buf[..len]),
    }
    sink.write_all(&buf[..len])?;
    Ok(len)
}

/// Write the ASCII header, e.g. `1999\t01\t01\t00000\t`.
pub fn write_ascii_header<W: Write>(sink: &mut W, dmy: &Dmy, dt: f64) -> io::Result<()> {
    if is_subdaily(dt) {
        write!(
            sink,
            "{:04}\t{:02}\t{:02}\t{:05}\t",
            dmy.year, dmy.month, dmy.day, dmy.day_seconds
        )
    } else {
        write!(sink, "{:04}\t{:02}\t{:02}\t", dmy.year, dmy.month, dmy.day)
    }
}
