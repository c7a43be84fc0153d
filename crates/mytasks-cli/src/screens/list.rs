/*
[INPUT]:  Task backend and view scope
[OUTPUT]: "All Tasks" listing with status/priority badges
[POS]:    Presentation layer - list screen
[UPDATE]: When the list layout or empty/error states change
*/

use console::style;
use mytasks_adapter::{Task, TaskApi};

use super::Screen;
use crate::screen::{LoadState, ViewScope};
use crate::theme::{self, FALLBACK};

#[derive(Debug, Default)]
pub struct ListScreen {
    state: LoadState<Vec<Task>>,
}

impl ListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch every task
    pub async fn mount(&mut self, api: &dyn TaskApi, scope: &ViewScope) {
        self.state.track(scope, "list tasks", api.list_tasks()).await;
    }

    pub fn state(&self) -> &LoadState<Vec<Task>> {
        &self.state
    }
}

fn task_count(count: usize) -> String {
    if count == 1 {
        "1 task".to_string()
    } else {
        format!("{} tasks", count)
    }
}

fn task_rows(task: &Task) -> Vec<String> {
    let priority = theme::priority_swatch(task.priority);
    let checkbox = if task.is_completed() { "[x]" } else { "[ ]" };
    let title = if task.is_completed() {
        style(task.title.as_str()).strikethrough().dim().to_string()
    } else {
        style(task.title.as_str()).bold().to_string()
    };

    let mut rows = vec![format!(
        "{} {} {}",
        style(checkbox).fg(priority.color()),
        title,
        style(format!("#{}", task.id)).fg(FALLBACK.color())
    )];

    if let Some(first_line) = task
        .description
        .as_deref()
        .and_then(|text| text.lines().map(str::trim).find(|line| !line.is_empty()))
    {
        rows.push(format!("    {}", style(first_line).fg(FALLBACK.color())));
    }

    rows.push(format!(
        "    {} {}",
        theme::badge(task.status.as_str(), theme::status_swatch(task.status)),
        theme::badge(task.priority.as_str(), priority)
    ));
    rows
}

impl Screen for ListScreen {
    fn render(&self) -> Vec<String> {
        let heading = style("All Tasks").bold().to_string();
        match &self.state {
            LoadState::Idle | LoadState::Loading => vec!["Loading tasks...".to_string()],
            LoadState::Failed(message) => vec![
                heading,
                String::new(),
                format!("{} {}", style("Could not load tasks:").red(), message),
            ],
            LoadState::Loaded(tasks) if tasks.is_empty() => vec![
                heading,
                task_count(0),
                String::new(),
                "No tasks yet".to_string(),
                style("Run `mytasks add` to create your first task")
                    .fg(FALLBACK.color())
                    .to_string(),
            ],
            LoadState::Loaded(tasks) => {
                let mut lines = vec![heading, task_count(tasks.len()), String::new()];
                for task in tasks {
                    lines.extend(task_rows(task));
                }
                lines
            }
        }
    }

    fn succeeded(&self) -> bool {
        self.state.loaded().is_some()
    }
}
