//! Stream file configuration and the per-variable dispatch table.
//!
//! A stream file lists its variables in output order together with each
//! variable's binary encoding and text format.  [`DispatchTable::build`]
//! resolves that list against the [`OutputMetadata`] registry into one
//! ordered sequence of [`VarDescriptor`]s, so id, element count, encoding,
//! and format can never drift out of alignment.

use hydro_core::{ModelSizing, OutputMetadata, VarId};

use crate::format::{ByteOrder, OutType};
use crate::text::TextFormat;
use crate::{OutputError, OutputResult};

// ── Configuration ─────────────────────────────────────────────────────────────

/// One variable entry of a stream file configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamVarConfig {
    pub varname:  String,
    /// `OUT_TYPE_*` keyword; used by binary files.
    pub out_type: String,
    /// printf-style descriptor or `*`; used by ASCII files.
    pub format:   String,
}

impl StreamVarConfig {
    pub fn new(varname: &str, out_type: &str, format: &str) -> Self {
        Self {
            varname:  varname.to_string(),
            out_type: out_type.to_string(),
            format:   format.to_string(),
        }
    }
}

/// Configuration of one output stream file.
///
/// With the `serde` feature this deserializes directly from the driver's
/// parameter file; `byte_order` may be omitted and defaults to native.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamFileConfig {
    /// `ASCII` or `BINARY`.
    pub format:     String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub byte_order: ByteOrder,
    pub vars:       Vec<StreamVarConfig>,
}

// ── Dispatch table ────────────────────────────────────────────────────────────

/// Resolved description of one variable of a stream file.
#[derive(Clone, Debug, PartialEq)]
pub struct VarDescriptor {
    pub id:       VarId,
    pub varname:  String,
    pub nelem:    usize,
    pub out_type: OutType,
    pub format:   TextFormat,
}

/// Ordered variable descriptors of one stream file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DispatchTable {
    vars:     Vec<VarDescriptor>,
    capacity: usize,
}

impl DispatchTable {
    /// Resolve `vars` against `metadata`, in order.
    ///
    /// Fails on unknown variable names, unparseable types or formats, and on
    /// any variable whose element count exceeds the working buffer capacity
    /// derived from `sizing`.
    pub fn build(
        metadata: &OutputMetadata,
        sizing:   &ModelSizing,
        vars:     &[StreamVarConfig],
    ) -> OutputResult<Self> {
        let capacity = sizing.buffer_capacity(metadata.len());

        let vars = vars
            .iter()
            .map(|cfg| {
                let id = metadata.lookup(&cfg.varname)?;
                let nelem = metadata.nelem(id)?;
                if nelem > capacity {
                    return Err(OutputError::CapacityExceeded { id, nelem, capacity });
                }
                Ok(VarDescriptor {
                    id,
                    varname: cfg.varname.clone(),
                    nelem,
                    out_type: cfg.out_type.parse()?,
                    format: cfg.format.parse()?,
                })
            })
            .collect::<OutputResult<Vec<_>>>()?;

        Ok(Self { vars, capacity })
    }

    /// Build directly from resolved descriptors.
    pub fn from_descriptors(vars: Vec<VarDescriptor>, capacity: usize) -> OutputResult<Self> {
        if let Some(v) = vars.iter().find(|v| v.nelem > capacity) {
            return Err(OutputError::CapacityExceeded {
                id:    v.id,
                nelem: v.nelem,
                capacity,
            });
        }
        Ok(Self { vars, capacity })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Per-encoding working buffer capacity, in elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&VarDescriptor> {
        self.vars.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VarDescriptor> {
        self.vars.iter()
    }
}

impl<'a> IntoIterator for &'a DispatchTable {
    type Item = &'a VarDescriptor;
    type IntoIter = std::slice::Iter<'a, VarDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}
