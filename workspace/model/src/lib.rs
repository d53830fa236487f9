//! Domain types for the disease-case dataset: the region and disease labels
//! that key every series, the observed case rows and the projected rows.

pub mod entities;

pub use entities::case_record::CaseRecord;
pub use entities::disease::Disease;
pub use entities::prediction::PredictionRecord;
pub use entities::region::Region;
pub use entities::UnknownLabel;
