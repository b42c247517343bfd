//! The `RecordEncoder` trait implemented by the binary and ASCII encoders.

use std::io::Write;

use hydro_core::Dmy;

use crate::OutputResult;
use crate::stream::OutputStream;
use crate::table::DispatchTable;

/// Encodes one output record (time header plus variable payload) into a sink.
///
/// Implementors trust their inputs: [`OutputFileTarget`] checks that the
/// stream matches the table before calling in.
///
/// [`OutputFileTarget`]: crate::OutputFileTarget
pub trait RecordEncoder {
    /// Write the time header for `dmy` at reporting interval `dt` seconds.
    fn write_header<W: Write>(&mut self, sink: &mut W, dmy: &Dmy, dt: f64) -> OutputResult<()>;

    /// Write every variable of `stream`, in order, as described by `table`.
    ///
    /// # Panics
    /// May panic if an entry of `stream` has an element with no aggregation
    /// slot, or more elements than the encoder's buffers hold.
    fn write_variables<W: Write>(
        &mut self,
        sink:   &mut W,
        table:  &DispatchTable,
        stream: &OutputStream,
    ) -> OutputResult<()>;

    /// Header followed by variables.
    fn write_record<W: Write>(
        &mut self,
        sink:   &mut W,
        table:  &DispatchTable,
        stream: &OutputStream,
        dmy:    &Dmy,
        dt:     f64,
    ) -> OutputResult<()> {
        self.write_header(sink, dmy, dt)?;
        self.write_variables(sink, table, stream)
    }
}
