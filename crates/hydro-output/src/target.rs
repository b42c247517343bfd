//! `OutputFileTarget<W>` — one configured stream file and its record dispatcher.

use std::io::{self, Write};

use hydro_core::{Dmy, ModelSizing, OutputMetadata};
use log::{debug, trace};

use crate::ascii::AsciiEncoder;
use crate::binary::BinaryEncoder;
use crate::format::{ByteOrder, FileFormat};
use crate::header::header_field_count;
use crate::stream::OutputStream;
use crate::table::{DispatchTable, StreamFileConfig};
use crate::writer::RecordEncoder;
use crate::{OutputError, OutputResult};

/// What one [`OutputFileTarget::write_data`] call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordStats {
    /// 3 or 4.
    pub header_fields: usize,
    /// Variable fields written (total element count).
    pub values:        usize,
    pub bytes:         usize,
}

enum Encoder {
    Binary(BinaryEncoder),
    Ascii(AsciiEncoder),
}

/// A stream file: format, variable table, working buffers, and the sink.
///
/// The sink is owned exclusively; `write_data` takes `&mut self`, so one
/// target is never written concurrently.  Opening, rotating, and closing the
/// underlying file is the caller's business.
pub struct OutputFileTarget<W: Write> {
    table:   DispatchTable,
    encoder: Encoder,
    sink:    W,
    records: u64,
}

impl<W: Write> OutputFileTarget<W> {
    /// Create a target over an already resolved table.
    ///
    /// Binary targets allocate their working buffers here, sized to
    /// `table.capacity()`, and reuse them for every record.
    pub fn new(format: FileFormat, byte_order: ByteOrder, table: DispatchTable, sink: W) -> Self {
        let encoder = match format {
            FileFormat::Binary => Encoder::Binary(BinaryEncoder::new(byte_order, table.capacity())),
            FileFormat::Ascii => Encoder::Ascii(AsciiEncoder),
        };
        debug!(
            "configured {format} stream file: {} variables, buffer capacity {}",
            table.len(),
            table.capacity()
        );
        Self {
            table,
            encoder,
            sink,
            records: 0,
        }
    }

    /// Parse `config` and create a target writing to `sink`.
    ///
    /// The file format is checked first; an unrecognized value is logged and
    /// returned as [`OutputError::UnsupportedFormat`] and `sink` is dropped
    /// untouched.
    pub fn from_config(
        config:   &StreamFileConfig,
        metadata: &OutputMetadata,
        sizing:   &ModelSizing,
        sink:     W,
    ) -> OutputResult<Self> {
        let format: FileFormat = config.format.parse()?;
        let table = DispatchTable::build(metadata, sizing, &config.vars)?;
        Ok(Self::new(format, config.byte_order, table, sink))
    }

    pub fn format(&self) -> FileFormat {
        match self.encoder {
            Encoder::Binary(_) => FileFormat::Binary,
            Encoder::Ascii(_) => FileFormat::Ascii,
        }
    }

    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    /// Records successfully written so far.
    pub fn records_written(&self) -> u64 {
        self.records
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Unwrap the sink (e.g. to inspect the bytes written).
    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Serialize one record: the time header for `dmy` at reporting interval
    /// `dt` seconds, then every variable of `stream` in order.
    ///
    /// `stream` must match the table entry for entry: same variable count,
    /// same ids, same element counts, and at least one aggregation slot per
    /// element.  A mismatch is reported before anything is written.
    pub fn write_data(&mut self, stream: &OutputStream, dmy: &Dmy, dt: f64) -> OutputResult<RecordStats> {
        self.check_stream(stream)?;

        let mut sink = Counting::new(&mut self.sink);
        match &mut self.encoder {
            Encoder::Binary(enc) => enc.write_record(&mut sink, &self.table, stream, dmy, dt)?,
            Encoder::Ascii(enc) => enc.write_record(&mut sink, &self.table, stream, dmy, dt)?,
        }

        let stats = RecordStats {
            header_fields: header_field_count(dt),
            values:        stream.total_elements(),
            bytes:         sink.bytes,
        };
        self.records += 1;
        trace!(
            "record {} at {dmy}: {} values, {} bytes",
            self.records, stats.values, stats.bytes
        );
        Ok(stats)
    }

    /// Flush the sink.
    ///
    /// Every call flushes, so a target may keep writing after `finish` and be
    /// finished again; calling it twice in a row is harmless.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.sink.flush()?;
        debug!("flushed {} records", self.records);
        Ok(())
    }

    fn check_stream(&self, stream: &OutputStream) -> OutputResult<()> {
        if stream.len() != self.table.len() {
            return Err(OutputError::VariableCountMismatch {
                expected: self.table.len(),
                got:      stream.len(),
            });
        }

        let capacity = self.table.capacity();
        for (index, (desc, entry)) in self.table.iter().zip(&stream.entries).enumerate() {
            if entry.id != desc.id {
                return Err(OutputError::VariableIdMismatch {
                    index,
                    expected: desc.id,
                    got:      entry.id,
                });
            }
            if entry.nelem() != desc.nelem {
                return Err(OutputError::ElementCountMismatch {
                    id:       desc.id,
                    expected: desc.nelem,
                    got:      entry.nelem(),
                });
            }
            if entry.nelem() > capacity {
                return Err(OutputError::CapacityExceeded {
                    id:    desc.id,
                    nelem: entry.nelem(),
                    capacity,
                });
            }
            if let Some(element) = entry.aggdata.iter().position(Vec::is_empty) {
                return Err(OutputError::EmptyAggregate { id: desc.id, element });
            }
        }
        Ok(())
    }
}

/// Byte-counting pass-through writer.
struct Counting<'a, W: Write> {
    inner: &'a mut W,
    bytes: usize,
}

impl<'a, W: Write> Counting<'a, W> {
    fn new(inner: &'a mut W) -> Self {
        Self { inner, bytes: 0 }
    }
}

impl<W: Write> Write for Counting<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
