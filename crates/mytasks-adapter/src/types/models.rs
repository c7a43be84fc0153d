/*
[INPUT]:  Task service schema and serde requirements
[OUTPUT]: Typed Task read model with default-filling deserialization
[POS]:    Data layer - wire representation returned by the service
[UPDATE]: When the service adds or renames task fields
*/

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::enums::{DueDate, Priority, RecurrencePattern, TaskStatus};

/// A task as returned by `GET /mytasks` and `GET /mytasks/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::default_on_null")]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "serde_helpers::default_on_null")]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::default_on_null")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_minutes: Option<u32>,
    #[serde(default, deserialize_with = "serde_helpers::default_on_null")]
    pub is_recurring: bool,
    #[serde(
        default,
        deserialize_with = "serde_helpers::blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub recurrence_pattern: Option<RecurrencePattern>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Due date preset, if the stored value is one of the known tokens
    pub fn due_preset(&self) -> Option<DueDate> {
        self.due_date.as_deref().and_then(|raw| raw.parse().ok())
    }

    /// Calendar date of `createdAt` as seen in `zone`
    pub fn created_on<Tz: TimeZone>(&self, zone: &Tz) -> Option<NaiveDate> {
        parse_timestamp_date(&self.created_at, zone)
    }

    pub fn completed_on<Tz: TimeZone>(&self, zone: &Tz) -> Option<NaiveDate> {
        self.completed_at
            .as_deref()
            .and_then(|raw| parse_timestamp_date(raw, zone))
    }
}

/// Extract the calendar date from an ISO-8601 timestamp.
///
/// RFC 3339 values (`2024-03-05T12:00:00.000Z`) carry an offset and are
/// converted to `zone` first. Naive date-times and bare dates are taken as
/// written.
pub fn parse_timestamp_date<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(zone).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use std::fmt::Display;
    use std::str::FromStr;

    /// Treat an explicit `null` the same as a missing field
    pub fn default_on_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Map `null`, `""` and whitespace-only strings to `None`
    pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}
