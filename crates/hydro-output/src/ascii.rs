//! Delimited text encoder.
//!
//! Fields are separated by `"\t "`.  The first field of a record gets no
//! separator because the time header already ends with a tab.  Each record
//! ends with exactly one `\n`.

use std::io::Write;

use hydro_core::Dmy;

use crate::OutputResult;
use crate::header::write_ascii_header;
use crate::stream::OutputStream;
use crate::table::DispatchTable;
use crate::writer::RecordEncoder;

/// Separator written between two adjacent fields.
pub const FIELD_SEPARATOR: &str = "\t ";

/// [`RecordEncoder`] for ASCII stream files.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiEncoder;

impl RecordEncoder for AsciiEncoder {
    fn write_header<W: Write>(&mut self, sink: &mut W, dmy: &Dmy, dt: f64) -> OutputResult<()> {
        write_ascii_header(sink, dmy, dt)?;
        Ok(())
    }

    fn write_variables<W: Write>(
        &mut self,
        sink:   &mut W,
        table:  &DispatchTable,
        stream: &OutputStream,
    ) -> OutputResult<()> {
        let mut first = true;
        for (desc, entry) in table.iter().zip(&stream.entries) {
            for value in entry.values() {
                if !first {
                    sink.write_all(FIELD_SEPARATOR.as_bytes())?;
                }
                first = false;
                write!(sink, "{}", desc.format.render(value))?;
            }
        }
        sink.write_all(b"\n")?;
        Ok(())
    }
}
