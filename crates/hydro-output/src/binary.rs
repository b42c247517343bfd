//! Packed binary encoder.
//!
//! Each variable is narrowed element by element into the working buffer of
//! its [`OutType`], converted to bytes in the file's byte order, and emitted
//! as one contiguous write of exactly `nelem × size` bytes.  Nothing
//! separates elements or variables.
//!
//! # Narrowing
//!
//! Conversions are unchecked and lossy, never an error:
//!
//! | Target                       | Rule                                              |
//! |------------------------------|---------------------------------------------------|
//! | `Char`, `ShortInt`, `UShortInt`, `Int` | truncate toward zero, then wrap to the width (`NaN` → 0) |
//! | `Float`                      | round to nearest `f32` (overflow → ±inf)          |
//! | `Double`                     | identity                                          |

use std::io::Write;

use byteorder::{BigEndian, LittleEndian, NativeEndian};
use hydro_core::Dmy;

use crate::OutputResult;
use crate::format::{ByteOrder, OutType};
use crate::header::write_binary_header;
use crate::stream::{OutputStream, StreamEntry};
use crate::table::DispatchTable;
use crate::writer::RecordEncoder;

// ── Narrowing casts ───────────────────────────────────────────────────────────

// `f64 as i8` would saturate; going through i64 wraps like a C cast does on
// common targets.
#[inline]
pub fn to_char(v: f64) -> i8 {
    v as i64 as i8
}

#[inline]
pub fn to_short(v: f64) -> i16 {
    v as i64 as i16
}

#[inline]
pub fn to_ushort(v: f64) -> u16 {
    v as i64 as u16
}

#[inline]
pub fn to_int(v: f64) -> i32 {
    v as i64 as i32
}

#[inline]
pub fn to_float(v: f64) -> f32 {
    v as f32
}

// ── Working buffers ───────────────────────────────────────────────────────────

/// One working buffer per target encoding plus a byte staging area.
///
/// Allocated once per file target with a fixed element capacity and reused
/// for every record.  Only the write cursor is reset between variables; the
/// contents are simply overwritten.
#[derive(Debug)]
pub struct EncodeBuffers {
    capacity: usize,
    chars:    Vec<i8>,
    shorts:   Vec<i16>,
    ushorts:  Vec<u16>,
    ints:     Vec<i32>,
    floats:   Vec<f32>,
    doubles:  Vec<f64>,
    bytes:    Vec<u8>,
}

impl EncodeBuffers {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            chars:   Vec::with_capacity(capacity),
            shorts:  Vec::with_capacity(capacity),
            ushorts: Vec::with_capacity(capacity),
            ints:    Vec::with_capacity(capacity),
            floats:  Vec::with_capacity(capacity),
            doubles: Vec::with_capacity(capacity),
            bytes:   Vec::with_capacity(capacity.saturating_mul(OutType::Double.size())),
        }
    }

    /// Element capacity of each typed buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Narrow `entry`'s slot-0 values to `out_type` and return their bytes.
    ///
    /// The returned slice is exactly `entry.nelem() * out_type.size()` long.
    ///
    /// # Panics
    /// Panics if an element of `entry` has no aggregation slot.  Debug builds
    /// also panic when `entry.nelem()` exceeds [`capacity`](Self::capacity).
    pub fn encode<E: byteorder::ByteOrder>(&mut self, out_type: OutType, entry: &StreamEntry) -> &[u8] {
        debug_assert!(entry.nelem() <= self.capacity, "working buffer overrun");

        self.bytes.clear();
        self.bytes.resize(entry.nelem() * out_type.size(), 0);

        match out_type {
            OutType::Char => {
                self.chars.clear();
                self.chars.extend(entry.values().map(to_char));
                for (dst, &c) in self.bytes.iter_mut().zip(&self.chars) {
                    *dst = c as u8;
                }
            }
            OutType::ShortInt => {
                self.shorts.clear();
                self.shorts.extend(entry.values().map(to_short));
                E::write_i16_into(&self.shorts, &mut self.bytes);
            }
            OutType::UShortInt => {
                self.ushorts.clear();
                self.ushorts.extend(entry.values().map(to_ushort));
                E::write_u16_into(&self.ushorts, &mut self.bytes);
            }
            OutType::Int => {
                self.ints.clear();
                self.ints.extend(entry.values().map(to_int));
                E::write_i32_into(&self.ints, &mut self.bytes);
            }
            OutType::Float => {
                self.floats.clear();
                self.floats.extend(entry.values().map(to_float));
                E::write_f32_into(&self.floats, &mut self.bytes);
            }
            OutType::Double => {
                self.doubles.clear();
                self.doubles.extend(entry.values());
                E::write_f64_into(&self.doubles, &mut self.bytes);
            }
        }

        &self.bytes
    }
}

// ── Encoder ───────────────────────────────────────────────────────────────────

/// [`RecordEncoder`] for binary stream files.
#[derive(Debug)]
pub struct BinaryEncoder {
    order:   ByteOrder,
    buffers: EncodeBuffers,
}

impl BinaryEncoder {
    pub fn new(order: ByteOrder, capacity: usize) -> Self {
        Self {
            order,
            buffers: EncodeBuffers::new(capacity),
        }
    }

    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffers.capacity()
    }

    fn write_all_vars<E: byteorder::ByteOrder, W: Write>(
        &mut self,
        sink:   &mut W,
        table:  &DispatchTable,
        stream: &OutputStream,
    ) -> OutputResult<()> {
        for (desc, entry) in table.iter().zip(&stream.entries) {
            let bytes = self.buffers.encode::<E>(desc.out_type, entry);
            sink.write_all(bytes)?;
        }
        Ok(())
    }
}

impl RecordEncoder for BinaryEncoder {
    fn write_header<W: Write>(&mut self, sink: &mut W, dmy: &Dmy, dt: f64) -> OutputResult<()> {
        write_binary_header(sink, dmy, dt, self.order)?;
        Ok(())
    }

    fn write_variables<W: Write>(
        &mut self,
        sink:   &mut W,
        table:  &DispatchTable,
        stream: &OutputStream,
    ) -> OutputResult<()> {
        match self.order {
            ByteOrder::Native => self.write_all_vars::<NativeEndian, W>(sink, table, stream),
            ByteOrder::Little => self.write_all_vars::<LittleEndian, W>(sink, table, stream),
            ByteOrder::Big => self.write_all_vars::<BigEndian, W>(sink, table, stream),
        }
    }
}
