pub mod forecast;
pub mod overview;
pub mod serve;

pub use forecast::forecast;
pub use overview::overview;
pub use serve::serve;
