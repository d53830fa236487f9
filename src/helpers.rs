pub mod converters;
pub mod errors;
