/*
[INPUT]:  Task read model or user edits (typed or name/value text)
[OUTPUT]: Immutable TaskForm state and the TaskPayload it serializes to
[POS]:    Data layer - mapping between the editable form and the wire model
[UPDATE]: When writable task fields or their text conversions change
*/

use thiserror::Error;

use super::enums::{DueDate, Priority, RecurrencePattern, TaskStatus};
use super::models::Task;
use super::requests::TaskPayload;

/// Reasons a form cannot become a payload, or an edit cannot be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("title is required")]
    MissingTitle,

    #[error("{field} must be a whole number of minutes, got {value:?}")]
    InvalidMinutes { field: &'static str, value: String },

    #[error("a recurrence pattern is required when the task repeats")]
    MissingRecurrencePattern,

    #[error("unknown form field {0:?}")]
    UnknownField(String),

    #[error("invalid value {value:?} for {field}")]
    InvalidValue { field: &'static str, value: String },

    #[error("{0} cannot be changed on an existing task")]
    ReadOnlyField(&'static str),
}

/// A single form edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Title(String),
    Description(String),
    Status(TaskStatus),
    Priority(Priority),
    DueDate(String),
    Category(String),
    Tags(String),
    AssignedTo(String),
    CreatedBy(String),
    EstimatedMinutes(String),
    ActualMinutes(String),
    IsRecurring(bool),
    RecurrencePattern(Option<RecurrencePattern>),
}

impl FormField {
    /// Field names accepted by [`FormField::parse`], in wire spelling
    pub const NAMES: [&'static str; 13] = [
        "title",
        "description",
        "status",
        "priority",
        "dueDate",
        "category",
        "tags",
        "assignedTo",
        "createdBy",
        "estimatedMinutes",
        "actualMinutes",
        "isRecurring",
        "recurrencePattern",
    ];

    /// Wire name of the field this edit targets
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title(_) => "title",
            FormField::Description(_) => "description",
            FormField::Status(_) => "status",
            FormField::Priority(_) => "priority",
            FormField::DueDate(_) => "dueDate",
            FormField::Category(_) => "category",
            FormField::Tags(_) => "tags",
            FormField::AssignedTo(_) => "assignedTo",
            FormField::CreatedBy(_) => "createdBy",
            FormField::EstimatedMinutes(_) => "estimatedMinutes",
            FormField::ActualMinutes(_) => "actualMinutes",
            FormField::IsRecurring(_) => "isRecurring",
            FormField::RecurrencePattern(_) => "recurrencePattern",
        }
    }

    /// Build an edit from a field name and its text value.
    ///
    /// Names match case-insensitively and may be camelCase, snake_case or
    /// kebab-case. Text fields are taken verbatim; minute fields are only
    /// checked when the form is serialized.
    pub fn parse(name: &str, value: &str) -> Result<Self, FormError> {
        let key: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        let field = match key.as_str() {
            "title" => FormField::Title(value.to_string()),
            "description" => FormField::Description(value.to_string()),
            "status" => FormField::Status(value.parse().map_err(|_| FormError::InvalidValue {
                field: "status",
                value: value.to_string(),
            })?),
            "priority" => FormField::Priority(value.parse().map_err(|_| {
                FormError::InvalidValue {
                    field: "priority",
                    value: value.to_string(),
                }
            })?),
            "duedate" => FormField::DueDate(value.to_string()),
            "category" => FormField::Category(value.to_string()),
            "tags" => FormField::Tags(value.to_string()),
            "assignedto" => FormField::AssignedTo(value.to_string()),
            "createdby" => FormField::CreatedBy(value.to_string()),
            "estimatedminutes" => FormField::EstimatedMinutes(value.to_string()),
            "actualminutes" => FormField::ActualMinutes(value.to_string()),
            "isrecurring" => FormField::IsRecurring(parse_flag(value).ok_or_else(|| {
                FormError::InvalidValue {
                    field: "isRecurring",
                    value: value.to_string(),
                }
            })?),
            "recurrencepattern" => {
                let trimmed = value.trim();
                if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
                    FormField::RecurrencePattern(None)
                } else {
                    FormField::RecurrencePattern(Some(trimmed.parse().map_err(|_| {
                        FormError::InvalidValue {
                            field: "recurrencePattern",
                            value: value.to_string(),
                        }
                    })?))
                }
            }
            _ => return Err(FormError::UnknownField(name.to_string())),
        };
        Ok(field)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Text-oriented editing state for a task.
///
/// The form is immutable: every edit goes through [`TaskForm::with_field`],
/// which returns a new form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    description: String,
    status: TaskStatus,
    priority: Priority,
    due_date: String,
    category: String,
    tags: String,
    assigned_to: String,
    created_by: String,
    estimated_minutes: String,
    actual_minutes: String,
    is_recurring: bool,
    recurrence_pattern: Option<RecurrencePattern>,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new("")
    }
}

impl TaskForm {
    /// Blank form for a new task created by `created_by`
    pub fn new(created_by: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::default(),
            priority: Priority::default(),
            due_date: DueDate::default().as_str().to_string(),
            category: String::new(),
            tags: String::new(),
            assigned_to: String::new(),
            created_by: created_by.into(),
            estimated_minutes: String::new(),
            actual_minutes: String::new(),
            is_recurring: false,
            recurrence_pattern: None,
        }
    }

    /// Load an existing task for editing
    pub fn from_task(task: &Task) -> Self {
        let due_date = task
            .due_date
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| DueDate::default().as_str().to_string());

        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            priority: task.priority,
            due_date,
            category: task.category.clone().unwrap_or_default(),
            tags: join_tags(&task.tags),
            assigned_to: task.assigned_to.clone().unwrap_or_default(),
            created_by: task.created_by.clone().unwrap_or_default(),
            estimated_minutes: minutes_text(task.estimated_minutes),
            actual_minutes: minutes_text(task.actual_minutes),
            is_recurring: task.is_recurring,
            recurrence_pattern: task.recurrence_pattern,
        }
    }

    /// Return a copy of this form with one field replaced
    pub fn with_field(self, field: FormField) -> Self {
        match field {
            FormField::Title(title) => Self { title, ..self },
            FormField::Description(description) => Self {
                description,
                ..self
            },
            FormField::Status(status) => Self { status, ..self },
            FormField::Priority(priority) => Self { priority, ..self },
            FormField::DueDate(due_date) => Self { due_date, ..self },
            FormField::Category(category) => Self { category, ..self },
            FormField::Tags(tags) => Self { tags, ..self },
            FormField::AssignedTo(assigned_to) => Self {
                assigned_to,
                ..self
            },
            FormField::CreatedBy(created_by) => Self { created_by, ..self },
            FormField::EstimatedMinutes(estimated_minutes) => Self {
                estimated_minutes,
                ..self
            },
            FormField::ActualMinutes(actual_minutes) => Self {
                actual_minutes,
                ..self
            },
            FormField::IsRecurring(is_recurring) => Self {
                is_recurring,
                ..self
            },
            FormField::RecurrencePattern(recurrence_pattern) => Self {
                recurrence_pattern,
                ..self
            },
        }
    }

    /// Serialize the form into the body for create/update.
    ///
    /// Tags are split on commas, trimmed and stripped of empties. Minute
    /// fields are parsed only when non-blank and are otherwise omitted.
    /// A non-recurring task always carries `recurrencePattern: null`.
    pub fn to_payload(&self) -> Result<TaskPayload, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingTitle);
        }

        let estimated_minutes = parse_minutes("estimatedMinutes", &self.estimated_minutes)?;
        let actual_minutes = parse_minutes("actualMinutes", &self.actual_minutes)?;

        let recurrence_pattern = if self.is_recurring {
            Some(
                self.recurrence_pattern
                    .ok_or(FormError::MissingRecurrencePattern)?,
            )
        } else {
            None
        };

        Ok(TaskPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            priority: self.priority,
            due_date: self.due_date.clone(),
            category: self.category.clone(),
            tags: split_tags(&self.tags),
            assigned_to: self.assigned_to.clone(),
            created_by: self.created_by.clone(),
            estimated_minutes,
            actual_minutes,
            is_recurring: self.is_recurring,
            recurrence_pattern,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn assigned_to(&self) -> &str {
        &self.assigned_to
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub fn estimated_minutes(&self) -> &str {
        &self.estimated_minutes
    }

    pub fn actual_minutes(&self) -> &str {
        &self.actual_minutes
    }

    pub fn is_recurring(&self) -> bool {
        self.is_recurring
    }

    pub fn recurrence_pattern(&self) -> Option<RecurrencePattern> {
        self.recurrence_pattern
    }
}

/// Split comma-separated tag text into trimmed, non-empty tags in order
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tags into the editable comma-separated text
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// Parse minute text: blank is `None`, anything else must be a non-negative integer
pub fn parse_minutes(field: &'static str, text: &str) -> Result<Option<u32>, FormError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| FormError::InvalidMinutes {
            field,
            value: text.to_string(),
        })
}

fn minutes_text(minutes: Option<u32>) -> String {
    minutes.map(|m| m.to_string()).unwrap_or_default()
}
