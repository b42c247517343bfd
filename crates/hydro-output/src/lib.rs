//! `hydro-output` — per-timestep output record serializer.
//!
//! One call of [`OutputFileTarget::write_data`] writes one record: a time
//! header followed by the aggregated values of every configured variable.
//! Two wire formats are supported:
//!
//! | Format   | Header                           | Variables                                  |
//! |----------|----------------------------------|--------------------------------------------|
//! | `BINARY` | 3 or 4 × `i32`                   | `nelem × size(out_type)` packed bytes each  |
//! | `ASCII`  | `YYYY\tMM\tDD\t[SSSSS\t]`        | `"\t "`-separated text fields, then `\n`   |
//!
//! The header carries a seconds field only when the reporting interval is
//! shorter than a day.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hydro_output::{OutputFileTarget, OutputStream, StreamEntry, StreamFileConfig};
//!
//! let mut target = OutputFileTarget::from_config(&config, &metadata, &sizing, file)?;
//! for step in steps {
//!     let stream = aggregate(step);
//!     target.write_data(&stream, &step.dmy, 3_600.0)?;
//! }
//! target.finish()?;
//! ```

pub mod ascii;
pub mod binary;
pub mod error;
pub mod format;
pub mod header;
pub mod stream;
pub mod table;
pub mod target;
pub mod text;
pub mod writer;


pub use ascii::AsciiEncoder;
pub use binary::{BinaryEncoder, EncodeBuffers};
pub use error::{OutputError, OutputResult};
pub use format::{ByteOrder, FileFormat, OutType};
pub use stream::{OutputStream, StreamEntry};
pub use table::{DispatchTable, StreamFileConfig, StreamVarConfig, VarDescriptor};
pub use target::{OutputFileTarget, RecordStats};
pub use text::TextFormat;
pub use writer::RecordEncoder;
