//! Typed models

mod company;
mod contact;
mod dates;
mod deal;
mod entity;
mod task;
pub mod types;
mod value;

pub use company::*;
pub use contact::*;
pub use deal::*;
pub use entity::*;
pub use task::*;
pub use value::*;
