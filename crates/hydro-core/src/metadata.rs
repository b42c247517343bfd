//! Output variable metadata.
//!
//! The registry is built once at startup and never mutated afterwards.  Its
//! length is the number of distinct output variable kinds, which together
//! with [`ModelSizing`][crate::ModelSizing] bounds the per-encoding working
//! buffers of the serializer.

use std::collections::HashMap;

use crate::{CoreError, CoreResult, VarId};

/// Description of one output variable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutVarMeta {
    /// Short name used in configuration files, e.g. `OUT_SOIL_MOIST`.
    pub varname:     String,
    pub long_name:   String,
    pub units:       String,
    pub description: String,
    /// Number of elements (soil layers, snow bands, …).  At least 1.
    pub nelem:       usize,
}

impl OutVarMeta {
    pub fn new(varname: &str, units: &str, nelem: usize) -> Self {
        Self {
            varname:     varname.to_string(),
            long_name:   String::new(),
            units:       units.to_string(),
            description: String::new(),
            nelem,
        }
    }

    pub fn with_description(mut self, long_name: &str, description: &str) -> Self {
        self.long_name = long_name.to_string();
        self.description = description.to_string();
        self
    }
}

/// Process-wide registry mapping [`VarId`] to its [`OutVarMeta`].
#[derive(Clone, Debug, Default)]
pub struct OutputMetadata {
    vars:    Vec<OutVarMeta>,
    by_name: HashMap<String, VarId>,
}

impl OutputMetadata {
    /// Build the registry.  `VarId(i)` refers to `vars[i]`.
    ///
    /// Fails on duplicate names and on variables declaring zero elements.
    pub fn new(vars: Vec<OutVarMeta>) -> CoreResult<Self> {
        let mut by_name = HashMap::with_capacity(vars.len());
        for (i, meta) in vars.iter().enumerate() {
            if meta.nelem == 0 {
                return Err(CoreError::Config(format!(
                    "output variable {} declares zero elements",
                    meta.varname
                )));
            }
            let id = VarId::try_from(i)
                .map_err(|_| CoreError::Config(format!("too many output variables ({})", vars.len())))?;
            if by_name.insert(meta.varname.clone(), id).is_some() {
                return Err(CoreError::Config(format!(
                    "duplicate output variable {}",
                    meta.varname
                )));
            }
        }
        Ok(Self { vars, by_name })
    }

    /// Number of distinct output variable kinds.
    #[inline]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, id: VarId) -> CoreResult<&OutVarMeta> {
        self.vars.get(id.index()).ok_or(CoreError::VarNotFound(id))
    }

    /// Element count of `id`.
    pub fn nelem(&self, id: VarId) -> CoreResult<usize> {
        self.get(id).map(|m| m.nelem)
    }

    /// Resolve a configured variable name.
    pub fn lookup(&self, varname: &str) -> CoreResult<VarId> {
        self.by_name
            .get(varname)
            .copied()
            .ok_or_else(|| CoreError::UnknownVariable(varname.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (VarId, &OutVarMeta)> {
        self.vars
            .iter()
            .enumerate()
            .map(|(i, m)| (VarId(i as u32), m))
    }
}
