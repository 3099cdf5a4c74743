//! Fitted model parameters.
//!
//! - [`ParameterStore`] — read-only lookup of per-component models and the
//!   global usage standardization statistics
//! - [`ParameterRegistry`] — explicit, refreshable holder of the active store
//! - [`ParameterSnapshot`] — serde model of the JSON the fitter writes
//!
//! String-keyed coefficient access stops at this boundary: the calculator
//! only ever sees the typed [`ComponentModel`].

mod model;
mod registry;
mod snapshot;
mod store;

pub use model::{ComponentModel, StandardizationStats};
pub use registry::ParameterRegistry;
pub use snapshot::{ParameterSnapshot, RawComponentModel, RawStats};
pub use store::ParameterStore;
