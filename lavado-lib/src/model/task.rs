//! Task records

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use super::Value;
use super::types::Attachment;
use crate::table::{Column, Row};

/// Workflow state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Backlog,
    Todo,
    InProgress,
    Done,
    Canceled,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Backlog,
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Done,
        TaskStatus::Canceled,
    ];

    /// Value as stored by the API; faceted filters match on this.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Backlog => "backlog",
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
            TaskStatus::Canceled => "canceled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Backlog => "Pendiente",
            TaskStatus::Todo => "Por hacer",
            TaskStatus::InProgress => "En progreso",
            TaskStatus::Done => "Hecho",
            TaskStatus::Canceled => "Cancelado",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Baja",
            Priority::Medium => "Media",
            Priority::High => "Alta",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// A to-do item for the laundry staff.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    /// Record identifier assigned by the API.
    #[serde(rename = "_id")]
    pub id: String,
    /// Human-facing code (`TASK-1042`).
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(with = "super::dates", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "attachements", skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Row for Task {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }
}

fn status_label(value: &Value) -> String {
    value
        .as_str()
        .and_then(TaskStatus::from_str_opt)
        .map(|s| s.label().to_string())
        .unwrap_or_default()
}

fn priority_label(value: &Value) -> String {
    value
        .as_str()
        .and_then(Priority::from_str_opt)
        .map(|p| p.label().to_string())
        .unwrap_or_default()
}

impl Task {
    /// Standard columns for the task list.
    pub fn columns() -> Vec<Column<Task>> {
        vec![
            Column::new("id", "Tarea", |t: &Task| Value::from(t.code.as_ref())).hidden(),
            Column::new("title", "Título", |t: &Task| Value::from(&t.title)),
            Column::new("status", "Estado", |t: &Task| {
                Value::from(t.status.map(TaskStatus::as_str))
            })
            .render(status_label),
            Column::new("priority", "Prioridad", |t: &Task| {
                Value::from(t.priority.map(Priority::as_str))
            })
            .render(priority_label),
            Column::new("label", "Etiqueta", |t: &Task| Value::from(t.label.as_ref())),
            Column::new("dueDate", "Vence", |t: &Task| Value::from(t.due_date)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "_id": "665f1c",
            "id": "TASK-7",
            "title": "Recoger edredones",
            "status": "in-progress",
            "priority": "high",
            "dueDate": "2024-06-15T00:00:00.000Z",
            "attachements": [
                {"name": "factura.pdf", "size": 1024, "type": "application/pdf", "url": "https://utfs.io/f/x.pdf"}
            ]
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.key(), "665f1c");
        assert_eq!(task.status, Some(TaskStatus::InProgress));
        assert_eq!(task.priority, Some(Priority::High));
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert_eq!(task.attachments.len(), 1);
        assert_eq!(task.attachments[0].name.as_deref(), Some("factura.pdf"));
        assert_eq!(task.attachments[0].mime.as_deref(), Some("application/pdf"));
        assert_eq!(task.attachments[0].url, "https://utfs.io/f/x.pdf");
        assert_eq!(task.description, None);
    }

    #[test]
    fn test_status_column_filters_on_value_renders_label() {
        let task = Task {
            id: "1".into(),
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        let columns = Task::columns();
        let status = columns.iter().find(|c| c.id == "status").unwrap();
        assert_eq!(status.value(&task), Value::from("done"));
        assert_eq!(status.cell(&task), "Hecho");
        assert_eq!(status.cell(&Task::default()), "");
    }
}
