//! Error types

mod mutation;
mod table;
mod validation;

pub use mutation::*;
pub use table::*;
pub use validation::*;
