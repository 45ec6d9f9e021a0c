//! API request handlers.

mod dataset;
mod scatter;
mod states;

pub use dataset::*;
pub use scatter::*;
pub use states::*;
