//! Create, update and delete flows.
//!
//! A [`MutationFlow`] sits between a user action and the remote store. It
//! validates, calls the store, and reports the outcome through an injected
//! [`Notifier`]. Errors are also returned to the caller unchanged.

mod flow;
mod notify;
mod store;

pub use flow::*;
pub use notify::*;
pub use store::*;
