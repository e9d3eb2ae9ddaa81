//! Entity kinds and the trait tying records to their forms

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Company, Contact, Deal, Task};
use crate::table::{Column, Row};
use crate::validation::{ValidationResult, forms};

/// The four record kinds the CRM manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Company,
    Contact,
    Task,
    Deal,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Company,
        EntityKind::Contact,
        EntityKind::Task,
        EntityKind::Deal,
    ];

    /// Singular noun used in messages.
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Company => "empresa",
            EntityKind::Contact => "contacto",
            EntityKind::Task => "tarea",
            EntityKind::Deal => "pedido",
        }
    }

    fn feminine(self) -> bool {
        matches!(self, EntityKind::Company | EntityKind::Task)
    }

    /// `"La tarea «X»"` / `"El pedido «X»"`.
    fn subject(self, title: &str) -> String {
        let article = if self.feminine() { "La" } else { "El" };
        format!("{} {} «{}»", article, self.noun(), title)
    }

    fn participle(self, stem: &str) -> String {
        format!("{}{}", stem, if self.feminine() { "a" } else { "o" })
    }

    pub fn created_message(self, title: &str) -> String {
        format!("{} fue {} con éxito.", self.subject(title), self.participle("cread"))
    }

    pub fn updated_message(self, title: &str) -> String {
        format!("{} fue {} con éxito.", self.subject(title), self.participle("actualizad"))
    }

    pub fn deleted_message(self, title: &str) -> String {
        format!("{} fue {} con éxito.", self.subject(title), self.participle("borrad"))
    }

    pub fn failure_message(self, verb: &str) -> String {
        let article = if self.feminine() { "la" } else { "el" };
        format!("Ocurrió un fallo al {} {} {}.", verb, article, self.noun())
    }

    /// Parse a kind from its CLI/API name (`tasks`, `deal`, ...).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().trim_end_matches('s') {
            "company" | "companie" | "empresa" => Some(EntityKind::Company),
            "contact" | "contacto" => Some(EntityKind::Contact),
            "task" | "tarea" => Some(EntityKind::Task),
            "deal" | "pedido" => Some(EntityKind::Deal),
            _ => None,
        }
    }
}

/// A CRM record: a table row with a kind, a title, a form and JSON shape.
pub trait Entity: Row + Serialize + DeserializeOwned {
    const KIND: EntityKind;

    /// Short human-facing name used in notifications.
    fn title(&self) -> String;

    /// Run the record's form validation.
    fn validate(&self) -> ValidationResult;

    /// Standard list columns.
    fn columns() -> Vec<Column<Self>>;
}

impl Entity for Company {
    const KIND: EntityKind = EntityKind::Company;

    fn title(&self) -> String {
        self.name.clone()
    }

    fn validate(&self) -> ValidationResult {
        forms::validate_company(self)
    }

    fn columns() -> Vec<Column<Self>> {
        Company::columns()
    }
}

impl Entity for Contact {
    const KIND: EntityKind = EntityKind::Contact;

    fn title(&self) -> String {
        self.full_name()
    }

    fn validate(&self) -> ValidationResult {
        forms::validate_contact(self)
    }

    fn columns() -> Vec<Column<Self>> {
        Contact::columns()
    }
}

impl Entity for Task {
    const KIND: EntityKind = EntityKind::Task;

    fn title(&self) -> String {
        self.code.clone().unwrap_or_else(|| self.title.clone())
    }

    fn validate(&self) -> ValidationResult {
        forms::validate_task(self)
    }

    fn columns() -> Vec<Column<Self>> {
        Task::columns()
    }
}

impl Entity for Deal {
    const KIND: EntityKind = EntityKind::Deal;

    fn title(&self) -> String {
        self.title.clone()
    }

    fn validate(&self) -> ValidationResult {
        forms::validate_deal(self)
    }

    fn columns() -> Vec<Column<Self>> {
        Deal::columns()
    }
}
