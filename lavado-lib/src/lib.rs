//! Data layer for the laundry CRM dashboard.
//!
//! [`table`] holds the list machinery shared by every entity page: column
//! definitions, filtering, sorting, pagination and row selection, combined in
//! [`table::TableView`]. [`model`] defines the records, [`validation`] their
//! forms and [`mutation`] the create/update/delete flow with notifications.

pub mod error;
pub mod model;
pub mod mutation;
pub mod table;
pub mod validation;
pub mod workspace;
