//! Aggregated values of one output record.

use hydro_core::VarId;

/// Aggregated values of one variable.
///
/// `aggdata[element][slot]`: one row per element, one column per aggregation
/// statistic computed upstream.  Only slot 0 is serialized.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamEntry {
    pub id:      VarId,
    pub aggdata: Vec<Vec<f64>>,
}

impl StreamEntry {
    pub fn new(id: VarId, aggdata: Vec<Vec<f64>>) -> Self {
        Self { id, aggdata }
    }

    /// An entry with a single aggregation slot per element.
    pub fn from_values(id: VarId, values: &[f64]) -> Self {
        Self {
            id,
            aggdata: values.iter().map(|&v| vec![v]).collect(),
        }
    }

    #[inline]
    pub fn nelem(&self) -> usize {
        self.aggdata.len()
    }

    /// Slot-0 value of `element`.
    ///
    /// # Panics
    /// Panics if the element has no slots; [`OutputFileTarget::write_data`]
    /// checks this before encoding.
    ///
    /// [`OutputFileTarget::write_data`]: crate::OutputFileTarget::write_data
    #[inline]
    pub fn value(&self, element: usize) -> f64 {
        self.aggdata[element][0]
    }

    /// Slot-0 values in element order.
    ///
    /// # Panics
    /// The iterator panics on reaching an element with no slots.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.aggdata.iter().map(|slots| slots[0])
    }
}

/// Ordered per-variable aggregated values for one timestep.
///
/// Built fresh every timestep by the aggregation stage; the serializer only
/// reads it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutputStream {
    pub entries: Vec<StreamEntry>,
}

impl OutputStream {
    pub fn new(entries: Vec<StreamEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: StreamEntry) {
        self.entries.push(entry);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total element count across all variables.
    pub fn total_elements(&self) -> usize {
        self.entries.iter().map(StreamEntry::nelem).sum()
    }
}
