//! `hydro-core` — foundational types shared by the hydro output crates.
//!
//! This crate has no `hydro-*` dependencies and minimal external ones (only
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VarId`                                               |
//! | [`time`]        | `Dmy` record timestamp, `SEC_PER_DAY`                 |
//! | [`metadata`]    | `OutVarMeta`, `OutputMetadata` registry               |
//! | [`sizing`]      | `ModelSizing` (soil layers × snow bands)              |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to configuration types.     |

pub mod error;
pub mod ids;
pub mod metadata;
pub mod sizing;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::VarId;
pub use metadata::{OutVarMeta, OutputMetadata};
pub use sizing::ModelSizing;
pub use time::{Dmy, SEC_PER_DAY, is_subdaily};
