//! Validation rules for each entity form.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use super::{ValidationResult, Validator};
use crate::model::{Company, Contact, Deal, Task};

/// Letters (including Spanish accents and ñ), apostrophes and spaces.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ'´ ]+$").expect("name pattern is valid"));

/// Optional country code, then up to four digit groups split by `-`, `.` or a space.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?(\d{1,4})?[-.\s]?(\d{1,4})[-.\s]?(\d{1,4})[-.\s]?(\d{1,9})$")
        .expect("phone pattern is valid")
});

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number(value: &Option<Decimal>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// Trimmed copy of a company as the form submits it. A website typed
/// without a scheme gets `https://` in front; a blank one is dropped.
pub fn normalize_company(company: &Company) -> Company {
    let website = company
        .website
        .as_deref()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(|w| {
            let lower = w.to_lowercase();
            if lower.starts_with("https://") || lower.starts_with("http://") {
                w.to_string()
            } else {
                format!("https://{}", w)
            }
        });
    Company {
        name: company.name.trim().to_string(),
        website,
        ..company.clone()
    }
}

/// Company create/edit form.
pub fn validate_company(company: &Company) -> ValidationResult {
    Validator::new()
        .field("name", company.name.as_str())
        .min_length(3, "El nombre de la empresa debe tener al menos 3 caracteres")
        .field("companyType", text(&company.company_type))
        .required("Se requiere un tipo de empresa")
        .field("employees", text(&company.employees))
        .required("Seleccione la cantidad de empleados")
        .field("description", text(&company.description))
        .required("Ingrese una descripción")
        .field("annualRevenue", number(&company.annual_revenue))
        .min_value(Decimal::new(1000, 0), "El monto debe ser al menos $1000")
        .field("website", text(&company.website))
        .url("Ingresa un URL válido.")
        .validate()
}

/// Contact create/edit form.
pub fn validate_contact(contact: &Contact) -> ValidationResult {
    let mut validator = Validator::new()
        .field("firstName", contact.first_name.as_str())
        .required("Se requiere un nombre")
        .pattern(&NAME_PATTERN, "El nombre solo puede contener letras, tildes y apóstrofos")
        .field("lastName", contact.last_name.as_str())
        .required("Se requiere un apellido")
        .pattern(&NAME_PATTERN, "El apellido solo puede contener letras, tildes y apóstrofos")
        .field(
            "birthday",
            contact.birthday.map(|d| d.to_string()).unwrap_or_default(),
        )
        .required("Se requiere una fecha de cumpleaños")
        .field("phone", text(&contact.phone))
        .required("Se requiere un número de teléfono")
        .pattern(
            &PHONE_PATTERN,
            "Por favor ingresa un número de teléfono válido (solo números, entre 9 y 15 dígitos)",
        )
        .field("salutation", text(&contact.salutation))
        .required("Se requiere un prefijo de saludo")
        .field("email", text(&contact.email))
        .email("Email inválido.");

    for (network, url) in contact.socials.links() {
        validator = validator
            .field(format!("socials.{}", network), url)
            .url("Ingresa un URL válido.");
    }
    validator.validate()
}

/// Task create/edit form.
pub fn validate_task(task: &Task) -> ValidationResult {
    Validator::new()
        .field("title", task.title.as_str())
        .required("Se requiere un título")
        .field("status", task.status.map(|s| s.as_str()).unwrap_or_default())
        .required("Seleccione un estado")
        .field("priority", task.priority.map(|p| p.as_str()).unwrap_or_default())
        .required("Seleccione una prioridad")
        .validate()
}

/// Deal create/edit form.
pub fn validate_deal(deal: &Deal) -> ValidationResult {
    let amount = number(&deal.amount);
    let mut validator = Validator::new()
        .field("title", deal.title.as_str())
        .required("Se requiere un título")
        .field("stage", deal.stage.map(|s| s.as_str()).unwrap_or_default())
        .required("Seleccione un estado");
    if !amount.is_empty() {
        validator = validator
            .field("amount", amount)
            .min_value(Decimal::ZERO, "El monto no puede ser negativo");
    }
    validator.validate()
}

/// Sign-up form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl SignupForm {
    /// Trimmed copy with names starting in upper case, as submitted.
    pub fn normalized(&self) -> Self {
        Self {
            first_name: capitalize_first(self.first_name.trim()),
            last_name: capitalize_first(self.last_name.trim()),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    pub fn validate(&self) -> ValidationResult {
        Validator::new()
            .field("firstName", self.first_name.as_str())
            .min_length(2, "Nombres requeridos.")
            .field("lastName", self.last_name.as_str())
            .min_length(2, "Apellidos requeridos.")
            .field("email", self.email.as_str())
            .required("Email invalido.")
            .email("Email invalido.")
            .field("password", self.password.as_str())
            .required("Contraseña es requerida.")
            .min_length(8, "Contraseña no segura.")
            .validate()
    }
}

/// Profile form input. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub bio: String,
    pub urls: Vec<String>,
}

impl ProfileForm {
    /// Trimmed copy with a lower-case username.
    pub fn normalized(&self) -> Self {
        Self {
            username: self.username.trim().to_lowercase(),
            email: self.email.trim().to_string(),
            bio: self.bio.clone(),
            urls: self.urls.iter().map(|u| u.trim().to_string()).collect(),
        }
    }

    pub fn validate(&self) -> ValidationResult {
        let mut validator = Validator::new()
            .field("email", self.email.as_str())
            .email("Email invalido.")
            .field("bio", self.bio.as_str())
            .max_length(80, "La biografía no puede superar 80 caracteres.");
        for (index, url) in self.urls.iter().enumerate() {
            validator = validator
                .field(format!("urls.{}", index), url.as_str())
                .required("Ingresa un URL válido.")
                .url("Ingresa un URL válido.");
        }
        validator.validate()
    }
}
