//! Deal (order) records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use super::Value;
use super::types::{Attachment, Money};
use crate::table::{Column, Row};

/// Pipeline stage of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Prospect,
    Quoted,
    Negotiation,
    Won,
    Lost,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Prospect,
        Stage::Quoted,
        Stage::Negotiation,
        Stage::Won,
        Stage::Lost,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Prospect => "prospect",
            Stage::Quoted => "quoted",
            Stage::Negotiation => "negotiation",
            Stage::Won => "won",
            Stage::Lost => "lost",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Prospect => "Prospecto",
            Stage::Quoted => "Cotizado",
            Stage::Negotiation => "Negociación",
            Stage::Won => "Ganado",
            Stage::Lost => "Perdido",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Won and lost deals are closed.
    pub fn is_closed(self) -> bool {
        matches!(self, Stage::Won | Stage::Lost)
    }
}

/// A sales opportunity (an order in the laundry's terms).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Deal {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(with = "super::dates", skip_serializing_if = "Option::is_none")]
    pub closing_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(rename = "attachements", skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Row for Deal {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }
}

impl Deal {
    /// Standard columns for the deal list.
    pub fn columns() -> Vec<Column<Deal>> {
        vec![
            Column::new("title", "Pedido", |d: &Deal| Value::from(&d.title)),
            Column::new("stage", "Estado", |d: &Deal| Value::from(d.stage.map(Stage::as_str))).render(
                |v| {
                    v.as_str()
                        .and_then(Stage::from_str_opt)
                        .map(|s| s.label().to_string())
                        .unwrap_or_default()
                },
            ),
            Column::new("amount", "Monto", |d: &Deal| Value::from(d.amount)).render(|v| match v {
                Value::Decimal(amount) => Money::new(*amount).to_string(),
                _ => String::new(),
            }),
            Column::new("closingDate", "Cierre", |d: &Deal| Value::from(d.closing_date)),
            Column::new("assignee", "Asignado", |d: &Deal| Value::from(d.assignee.as_ref())),
            Column::new("notes", "Notas", |d: &Deal| Value::from(d.notes.as_ref()))
                .sortable(false)
                .hidden(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_renders_as_money() {
        let deal = Deal {
            id: "d1".into(),
            amount: Some(Decimal::new(250000, 2)),
            ..Default::default()
        };
        let columns = Deal::columns();
        let amount = columns.iter().find(|c| c.id == "amount").unwrap();
        assert_eq!(amount.cell(&deal), "S/ 2,500.00");
        assert_eq!(amount.cell(&Deal::default()), "");
    }

    #[test]
    fn test_deserialize_plain_date() {
        let deal: Deal =
            serde_json::from_str(r#"{"_id":"x","title":"Uniformes","stage":"won","amount":120.5,"closingDate":"2024-02-01"}"#)
                .unwrap();
        assert_eq!(deal.stage, Some(Stage::Won));
        assert!(deal.stage.unwrap().is_closed());
        assert_eq!(deal.amount, Some(Decimal::new(1205, 1)));
        assert_eq!(deal.closing_date, NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_deserialize_object_attachments() {
        let deals: Vec<Deal> = serde_json::from_str(
            r#"[{"_id":"d1","title":"Manteles","attachements":[
                {"name":"cotizacion.png","size":5120,"type":"image/png","url":"https://utfs.io/f/q.png"},
                "https://utfs.io/f/legacy.pdf"
            ]}]"#,
        )
        .unwrap();
        let attachments = &deals[0].attachments;
        assert_eq!(attachments.len(), 2);
        assert!(attachments[0].is_image());
        assert_eq!(attachments[0].size, Some(5120));
        assert_eq!(attachments[1].file_name().as_deref(), Some("legacy.pdf"));
    }
}
