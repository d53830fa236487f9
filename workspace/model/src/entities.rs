//! Root for the domain entity modules.
//!
//! Regions and diseases are closed label sets; case and prediction records
//! are plain value types keyed by them.

pub mod case_record;
pub mod disease;
pub mod prediction;
pub mod region;

use thiserror::Error;

/// Returned when a label does not name a known region or disease.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}'")]
pub struct UnknownLabel {
    /// Which label set was searched ("region" or "disease")
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

impl UnknownLabel {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
