/*
[INPUT]:  Task backend, task id and view scope
[OUTPUT]: Task detail view (badges, details, tags, time tracking, recurrence)
[POS]:    Presentation layer - view screen
[UPDATE]: When detail sections or the not-found state change
*/

use console::style;
use chrono::{Local, NaiveDate};
use mytasks_adapter::{Task, TaskApi};

use super::{Screen, info_row, section};
use crate::screen::{LoadState, ViewScope};
use crate::theme;

pub struct ViewScreen {
    id: u64,
    state: LoadState<Option<Task>>,
}

impl ViewScreen {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            state: LoadState::Idle,
        }
    }

    /// Fetch the task on every mount; nothing is cached between views
    pub async fn mount(&mut self, api: &dyn TaskApi, scope: &ViewScope) {
        self.state.track(scope, "get task", api.get_task(self.id)).await;
    }

}

/// Local calendar date of a server timestamp, or the raw text when it does not parse
fn display_date(date: Option<NaiveDate>, raw: &str) -> String {
    date.map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn display_due(task: &Task) -> String {
    match task.due_preset() {
        Some(preset) => preset.label().to_string(),
        None => task.due_date.clone().unwrap_or_default(),
    }
}

pub(crate) fn detail_lines(task: &Task) -> Vec<String> {
    let mut lines = vec![
        style(task.title.as_str()).bold().to_string(),
        format!(
            "{} {}",
            theme::badge(task.status.as_str(), theme::status_swatch(task.status)),
            theme::badge(task.priority.as_str(), theme::priority_swatch(task.priority))
        ),
    ];

    if let Some(description) = task.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(String::new());
        lines.push(section("Description"));
        lines.extend(description.lines().map(|line| format!("  {}", line)));
    }

    lines.push(String::new());
    lines.push(section("Details"));
    lines.push(info_row("Due Date", &display_due(task)));
    lines.push(info_row(
        "Created",
        &display_date(task.created_on(&Local), &task.created_at),
    ));
    if let Some(completed_at) = task.completed_at.as_deref() {
        lines.push(info_row(
            "Completed",
            &display_date(task.completed_on(&Local), completed_at),
        ));
    }
    lines.push(info_row("Category", task.category.as_deref().unwrap_or_default()));
    lines.push(info_row(
        "Assigned To",
        task.assigned_to.as_deref().unwrap_or_default(),
    ));
    lines.push(info_row(
        "Created By",
        task.created_by.as_deref().unwrap_or_default(),
    ));

    if !task.tags.is_empty() {
        lines.push(String::new());
        lines.push(section("Tags"));
        let tags: Vec<String> = task
            .tags
            .iter()
            .map(|tag| style(format!("#{}", tag)).fg(theme::ACCENT.color()).to_string())
            .collect();
        lines.push(format!("  {}", tags.join("  ")));
    }

    if task.estimated_minutes.is_some() || task.actual_minutes.is_some() {
        lines.push(String::new());
        lines.push(section("Time Tracking"));
        if let Some(minutes) = task.estimated_minutes {
            lines.push(info_row("Estimated", &format!("{} min", minutes)));
        }
        if let Some(minutes) = task.actual_minutes {
            lines.push(info_row("Actual", &format!("{} min", minutes)));
        }
    }

    if task.is_recurring {
        lines.push(String::new());
        lines.push(section("Recurrence"));
        let pattern = task
            .recurrence_pattern
            .map(|pattern| pattern.as_str())
            .unwrap_or_default();
        lines.push(info_row("Pattern", pattern));
    }

    lines
}

impl Screen for ViewScreen {
    fn render(&self) -> Vec<String> {
        match &self.state {
            LoadState::Idle | LoadState::Loading => vec!["Loading task...".to_string()],
            LoadState::Failed(message) => vec![format!(
                "{} {}",
                style(format!("Could not load task #{}:", self.id)).red(),
                message
            )],
            LoadState::Loaded(None) => vec!["Task not found".to_string()],
            LoadState::Loaded(Some(task)) => detail_lines(task),
        }
    }

    fn succeeded(&self) -> bool {
        matches!(self.state, LoadState::Loaded(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mytasks_adapter::{MockTaskApi, Priority, RecurrencePattern, TaskStatus};

    fn full_task() -> Task {
        Task {
            id: 12,
            title: "Ship release".to_string(),
            description: Some("Tag and publish".to_string()),
            status: TaskStatus::Completed,
            priority: Priority::Urgent,
            due_date: Some("this_week".to_string()),
            category: Some("work".to_string()),
            tags: vec!["release".to_string(), "ops".to_string()],
            assigned_to: None,
            created_by: Some("user123".to_string()),
            estimated_minutes: Some(90),
            actual_minutes: None,
            is_recurring: true,
            recurrence_pattern: Some(RecurrencePattern::Weekly),
            created_at: "2024-03-05T12:00:00.000".to_string(),
            updated_at: None,
            completed_at: Some("2024-03-07 09:00:00".to_string()),
        }
    }

    #[tokio::test]
    async fn test_renders_details() {
        console::set_colors_enabled(false);
        let api = MockTaskApi::new(vec![full_task()], "2024-03-05T12:00:00Z");
        let scope = ViewScope::new();
        let mut screen = ViewScreen::new(12);
        screen.mount(&api, &scope).await;

        assert!(screen.succeeded());
        let lines = screen.render();
        assert_eq!(lines[0], "Ship release");
        assert_eq!(lines[1], "[completed] [urgent]");
        for expected in [
            "  Tag and publish",
            "  Due Date     This week",
            "  Created      2024-03-05",
            "  Completed    2024-03-07",
            "  Assigned To  Not set",
            "  #release  #ops",
            "  Estimated    90 min",
            "  Pattern      weekly",
        ] {
            assert!(
                lines.contains(&expected.to_string()),
                "missing {expected:?} in {lines:#?}"
            );
        }
        assert!(!lines.iter().any(|line| line.contains("Actual")));
    }

    #[tokio::test]
    async fn test_missing_task_renders_not_found() {
        let api = MockTaskApi::new(Vec::new(), "2024-03-05T12:00:00Z");
        let scope = ViewScope::new();
        let mut screen = ViewScreen::new(999);
        screen.mount(&api, &scope).await;

        assert_eq!(screen.render(), vec!["Task not found"]);
        assert!(!screen.succeeded());
    }

    #[test]
    fn test_display_date_falls_back_to_raw() {
        assert_eq!(display_date(NaiveDate::from_ymd_opt(2024, 3, 6), "x"), "2024-03-06");
        assert_eq!(display_date(None, "last tuesday"), "last tuesday");
    }

    #[test]
    fn test_created_date_uses_viewer_zone() {
        let mut task = full_task();
        task.created_at = "2024-03-05T23:30:00Z".to_string();
        let tokyo = chrono::FixedOffset::east_opt(9 * 3600).expect("offset");

        assert_eq!(
            display_date(task.created_on(&tokyo), &task.created_at),
            "2024-03-06"
        );
        assert_eq!(
            display_date(task.created_on(&Local), &task.created_at),
            chrono::DateTime::parse_from_rfc3339(&task.created_at)
                .expect("rfc3339")
                .with_timezone(&Local)
                .format("%Y-%m-%d")
                .to_string()
        );
    }
}
