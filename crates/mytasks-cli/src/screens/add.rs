/*
[INPUT]:  Task backend, form edits and view scope
[OUTPUT]: Created task (or a visible error) after submitting a new form
[POS]:    Presentation layer - add screen
[UPDATE]: When the add flow or its defaults change
*/

use console::style;
use mytasks_adapter::{FormField, Task, TaskApi, TaskForm};
use tracing::warn;

use super::view::detail_lines;
use super::{Screen, check_form, form_lines};
use crate::screen::{LoadState, ViewScope};

pub struct AddScreen {
    form: TaskForm,
    state: LoadState<Option<Task>>,
}

impl AddScreen {
    /// Blank form; new tasks are attributed to `created_by`
    pub fn new(created_by: impl Into<String>) -> Self {
        Self {
            form: TaskForm::new(created_by),
            state: LoadState::Idle,
        }
    }

    pub fn with_edits(self, edits: impl IntoIterator<Item = FormField>) -> Self {
        let form = edits
            .into_iter()
            .fold(self.form, |form, field| form.with_field(field));
        Self { form, ..self }
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    /// POST the form. On failure the form is kept as-is for another attempt.
    pub async fn submit(&mut self, api: &dyn TaskApi, scope: &ViewScope) {
        if let Err(message) = check_form(&self.form) {
            warn!(error = %message, "task form rejected");
            self.state = LoadState::Failed(message);
            return;
        }
        self.state
            .track(scope, "create task", api.create_task(&self.form))
            .await;
    }
}

impl Screen for AddScreen {
    fn render(&self) -> Vec<String> {
        match &self.state {
            LoadState::Idle => {
                let mut lines = vec![style("New Task").bold().to_string()];
                lines.extend(form_lines(&self.form));
                lines
            }
            LoadState::Loading => vec!["Creating task...".to_string()],
            LoadState::Failed(message) => vec![format!(
                "{} {}",
                style("Could not create task:").red(),
                message
            )],
            LoadState::Loaded(None) => vec![style("Task created").green().to_string()],
            LoadState::Loaded(Some(task)) => {
                let mut lines = vec![
                    style(format!("Task #{} created", task.id)).green().to_string(),
                    String::new(),
                ];
                lines.extend(detail_lines(task));
                lines
            }
        }
    }

    fn succeeded(&self) -> bool {
        self.state.loaded().is_some()
    }
}
