//! Form validation for CRM records.
//!
//! A fluent [`Validator`] collects rules per field and reports the first
//! failing rule of each field. [`forms`] holds the rules for every entity
//! form in the product.
//!
//! # Example
//!
//! ```
//! use lavado_lib::validation::Validator;
//!
//! let result = Validator::new()
//!     .field("title", "")
//!         .required("Se requiere un título")
//!     .field("email", "no-es-email")
//!         .email("Email inválido")
//!     .validate();
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.errors().len(), 2);
//! ```

pub mod forms;
mod result;
mod validator;

pub use result::ValidationResult;
pub use validator::{FieldBuilder, Validator};
