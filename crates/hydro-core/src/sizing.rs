//! Model dimensions that bound per-variable element counts.

use crate::{CoreError, CoreResult};

/// Global model sizing.
///
/// A multi-valued output variable has at most one element per soil layer per
/// snow band, so `n_layers * snow_bands` bounds any variable's element count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelSizing {
    /// Number of soil layers.
    pub n_layers:   usize,
    /// Number of elevation (snow) bands.
    pub snow_bands: usize,
}

impl ModelSizing {
    pub fn new(n_layers: usize, snow_bands: usize) -> CoreResult<Self> {
        if n_layers == 0 || snow_bands == 0 {
            return Err(CoreError::Config(format!(
                "model sizing must be non-zero (n_layers={n_layers}, snow_bands={snow_bands})"
            )));
        }
        Ok(Self { n_layers, snow_bands })
    }

    /// Static bound for one working buffer of the binary encoder:
    /// `n_var_kinds × n_layers × snow_bands` slots.
    ///
    /// Deliberately generous: it is computed once from configuration rather
    /// than from the variables actually written.
    #[inline]
    pub fn buffer_capacity(&self, n_var_kinds: usize) -> usize {
        n_var_kinds
            .saturating_mul(self.n_layers)
            .saturating_mul(self.snow_bands)
    }
}

impl Default for ModelSizing {
    /// Three soil layers, one snow band.
    fn default() -> Self {
        Self { n_layers: 3, snow_bands: 1 }
    }
}
