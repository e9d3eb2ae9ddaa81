//! Company records

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use super::Value;
use super::types::{Address, Money};
use crate::table::{Column, Row};

/// A business customer.
///
/// Addresses are always present; an unfilled address is
/// [`Address::default()`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    /// Headcount bracket as picked in the form (`"11-50"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_revenue: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Uploaded logo URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Address::is_empty")]
    pub billing_address: Address,
    #[serde(skip_serializing_if = "Address::is_empty")]
    pub shipping_address: Address,
}

impl Row for Company {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }
}

impl Company {
    /// Standard columns for the company list.
    pub fn columns() -> Vec<Column<Company>> {
        vec![
            Column::new("name", "Empresa", |c: &Company| Value::from(&c.name)),
            Column::new("companyType", "Tipo", |c: &Company| Value::from(c.company_type.as_ref())),
            Column::new("employees", "Empleados", |c: &Company| Value::from(c.employees.as_ref())),
            Column::new("annualRevenue", "Ingresos anuales", |c: &Company| {
                Value::from(c.annual_revenue)
            })
            .render(|v| match v {
                Value::Decimal(amount) => Money::new(*amount).to_string(),
                _ => String::new(),
            }),
            Column::new("city", "Ciudad", |c: &Company| {
                Value::from(c.billing_address.city.as_ref())
            }),
            Column::new("tag", "Etiqueta", |c: &Company| Value::from(c.tag.as_ref())),
            Column::new("website", "Web", |c: &Company| Value::from(c.website.as_ref()))
                .sortable(false)
                .hidden(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_addresses_default_empty() {
        let company: Company = serde_json::from_str(r#"{"_id":"c1","name":"Hotel Sol"}"#).unwrap();
        assert!(company.billing_address.is_empty());
        assert!(company.shipping_address.is_empty());

        let json = serde_json::to_value(&company).unwrap();
        assert!(json.get("billingAddress").is_none());
    }

    #[test]
    fn test_city_column_reads_billing_address() {
        let company: Company = serde_json::from_str(
            r#"{"_id":"c1","name":"Hotel Sol","billingAddress":{"City":"Cusco","BillingCode":"B1"}}"#,
        )
        .unwrap();
        let columns = Company::columns();
        let city = columns.iter().find(|c| c.id == "city").unwrap();
        assert_eq!(city.value(&company), Value::from("Cusco"));
        assert!(city.value(&Company::default()).is_missing());
    }
}
