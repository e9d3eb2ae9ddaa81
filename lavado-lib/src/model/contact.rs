//! Contact records

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use super::Value;
use super::types::{Address, Socials};
use crate::table::{Column, Row};

/// A person the laundry deals with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "super::dates", skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    /// Courtesy title (`Sr.`, `Sra.`, `Dr.`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(skip_serializing_if = "Address::is_empty")]
    pub address: Address,
    #[serde(skip_serializing_if = "Socials::is_empty")]
    pub socials: Socials,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Contact {
    /// First and last name joined, ignoring blanks.
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Standard columns for the contact list.
    pub fn columns() -> Vec<Column<Contact>> {
        vec![
            Column::new("name", "Nombre", |c: &Contact| Value::from(c.full_name())),
            Column::new("email", "Email", |c: &Contact| Value::from(c.email.as_ref())),
            Column::new("phone", "Teléfono", |c: &Contact| Value::from(c.phone.as_ref())),
            Column::new("birthday", "Cumpleaños", |c: &Contact| Value::from(c.birthday)),
            Column::new("city", "Ciudad", |c: &Contact| Value::from(c.address.city.as_ref())),
            Column::new("salutation", "Saludo", |c: &Contact| {
                Value::from(c.salutation.as_ref())
            })
            .hidden(),
        ]
    }
}

impl Row for Contact {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }
}
