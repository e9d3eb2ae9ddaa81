//! Validator builder for fluent validation API.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;
use url::Url;

use super::result::ValidationResult;
use crate::error::FieldValidationError;

/// Type alias for validation rule closures.
type Rule = Box<dyn Fn(&str) -> Result<(), String>>;

/// Builder for validating multiple form fields.
///
/// Field values are the raw text the user typed. Each field reports only
/// its first failing rule, in the order the rules were added.
#[derive(Default)]
pub struct Validator {
    errors: Vec<FieldValidationError>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to validate.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            name: name.into(),
            value: value.into(),
            rules: Vec::new(),
        }
    }

    /// Run all validations.
    pub fn validate(self) -> ValidationResult {
        if self.errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(self.errors)
        }
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    validator: Validator,
    name: String,
    value: String,
    rules: Vec<Rule>,
}

impl FieldBuilder {
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        let msg = msg.into();
        self.rules
            .push(Box::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Continue to the next field.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> FieldBuilder {
        self.finalize().field(name, value)
    }

    /// Finalize and run all validations.
    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    /// Finalize this field and return the validator.
    fn finalize(self) -> Validator {
        let mut validator = self.validator;
        if let Some(message) = self.rules.iter().find_map(|rule| rule(&self.value).err()) {
            validator
                .errors
                .push(FieldValidationError::new(self.name, message));
        }
        validator
    }

    /// Require the field to be non-blank.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum trimmed length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.trim().chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a regex. Blank values pass.
    pub fn pattern(self, re: &Regex, msg: impl Into<String>) -> Self {
        let re = re.clone();
        self.rule(move |v| v.is_empty() || re.is_match(v), msg)
    }

    /// Require a valid email address. Blank values pass.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| {
                let v = v.trim();
                v.is_empty() || email_address::EmailAddress::is_valid(v)
            },
            msg,
        )
    }

    /// Require an absolute http(s) URL. Blank values pass.
    pub fn url(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| {
                let v = v.trim();
                v.is_empty()
                    || Url::parse(v).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
            },
            msg,
        )
    }

    /// Require a number of at least `min`. Blank or non-numeric values fail.
    pub fn min_value(self, min: Decimal, msg: impl Into<String>) -> Self {
        self.rule(
            move |v| Decimal::from_str(v.trim()).is_ok_and(|n| n >= min),
            msg,
        )
    }
}
