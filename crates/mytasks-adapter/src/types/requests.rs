/*
[INPUT]:  Validated form values
[OUTPUT]: JSON body for POST /mytasks and PATCH /mytasks/{id}
[POS]:    Data layer - write payload sent to the service
[UPDATE]: When writable task fields change
*/

use serde::{Deserialize, Serialize};

use super::enums::{Priority, RecurrencePattern, TaskStatus};

/// Body shared by create and update.
///
/// Server-owned fields (`id`, `createdAt`, `updatedAt`, `completedAt`) have
/// no place here. Minute counts are omitted when unset; `recurrencePattern`
/// is always written so that a non-recurring task clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: String,
    pub category: String,
    pub tags: Vec<String>,
    pub assigned_to: String,
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_minutes: Option<u32>,
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence_pattern: Option<RecurrencePattern>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> TaskPayload {
        TaskPayload {
            title: "Buy milk".to_string(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::Low,
            due_date: "today".to_string(),
            category: String::new(),
            tags: vec![],
            assigned_to: String::new(),
            created_by: "user123".to_string(),
            estimated_minutes: None,
            actual_minutes: None,
            is_recurring: false,
            recurrence_pattern: None,
        }
    }

    #[test]
    fn test_payload_wire_shape() {
        let value = serde_json::to_value(payload()).expect("serialize");
        assert_eq!(
            value,
            json!({
                "title": "Buy milk",
                "description": "",
                "status": "todo",
                "priority": "low",
                "dueDate": "today",
                "category": "",
                "tags": [],
                "assignedTo": "",
                "createdBy": "user123",
                "isRecurring": false,
                "recurrencePattern": null
            })
        );
    }

    #[test]
    fn test_minutes_serialize_as_numbers() {
        let value = serde_json::to_value(TaskPayload {
            estimated_minutes: Some(30),
            ..payload()
        })
        .expect("serialize");
        assert_eq!(value["estimatedMinutes"], json!(30));
        assert!(value.get("actualMinutes").is_none());
    }
}
