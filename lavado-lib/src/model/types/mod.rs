//! Shared field types for CRM records

mod address;
mod attachment;
mod money;
mod socials;

pub use address::*;
pub use attachment::*;
pub use money::*;
pub use socials::*;
