/*
[INPUT]:  Task backend, task id, form edits and view scope
[OUTPUT]: Updated task (or a visible error) after loading, editing and saving
[POS]:    Presentation layer - edit screen
[UPDATE]: When the edit flow or read-only fields change
*/

use console::style;
use mytasks_adapter::{FormError, FormField, Task, TaskApi, TaskForm};
use tracing::warn;

use super::view::detail_lines;
use super::{Screen, check_form, form_lines};
use crate::screen::{LoadState, ViewScope};

pub struct EditScreen {
    id: u64,
    loaded: LoadState<Option<Task>>,
    form: Option<TaskForm>,
    saved: LoadState<Option<Task>>,
}

impl EditScreen {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            loaded: LoadState::Idle,
            form: None,
            saved: LoadState::Idle,
        }
    }

    /// Load the task and turn it into an editable form
    pub async fn mount(&mut self, api: &dyn TaskApi, scope: &ViewScope) {
        self.loaded.track(scope, "load task", api.get_task(self.id)).await;
        self.form = self
            .loaded
            .loaded()
            .and_then(|task| task.as_ref())
            .map(TaskForm::from_task);
    }

    /// Form as loaded, once the task exists
    pub fn form(&self) -> Option<&TaskForm> {
        self.form.as_ref()
    }

    /// Apply `edits` to the loaded form and PATCH it.
    ///
    /// Does nothing when no task was loaded. `createdBy` belongs to the
    /// original author and is rejected here without contacting the service.
    pub async fn submit(
        &mut self,
        api: &dyn TaskApi,
        scope: &ViewScope,
        edits: impl IntoIterator<Item = FormField>,
    ) {
        let Some(form) = self.form.take() else {
            return;
        };

        let mut next = form.clone();
        for field in edits {
            if matches!(field, FormField::CreatedBy(_)) {
                self.form = Some(form);
                self.saved = LoadState::Failed(FormError::ReadOnlyField("createdBy").to_string());
                return;
            }
            next = next.with_field(field);
        }

        if let Err(message) = check_form(&next) {
            warn!(id = self.id, error = %message, "task form rejected");
            self.saved = LoadState::Failed(message);
            self.form = Some(next);
            return;
        }

        self.saved
            .track(scope, "update task", api.update_task(self.id, &next))
            .await;
        self.form = Some(next);
    }
}

impl Screen for EditScreen {
    fn render(&self) -> Vec<String> {
        match &self.loaded {
            LoadState::Idle | LoadState::Loading => return vec!["Loading task...".to_string()],
            LoadState::Failed(message) => {
                return vec![format!(
                    "{} {}",
                    style(format!("Could not load task #{}:", self.id)).red(),
                    message
                )];
            }
            LoadState::Loaded(None) => return vec!["Task not found".to_string()],
            LoadState::Loaded(Some(_)) => {}
        }

        match &self.saved {
            LoadState::Idle => {
                let mut lines = vec![style(format!("Edit Task #{}", self.id)).bold().to_string()];
                if let Some(form) = &self.form {
                    lines.extend(form_lines(form));
                }
                lines
            }
            LoadState::Loading => vec!["Saving task...".to_string()],
            LoadState::Failed(message) => vec![format!(
                "{} {}",
                style(format!("Could not update task #{}:", self.id)).red(),
                message
            )],
            LoadState::Loaded(None) => {
                vec![style(format!("Task #{} updated", self.id)).green().to_string()]
            }
            LoadState::Loaded(Some(task)) => {
                let mut lines = vec![
                    style(format!("Task #{} updated", self.id)).green().to_string(),
                    String::new(),
                ];
                lines.extend(detail_lines(task));
                lines
            }
        }
    }

    fn succeeded(&self) -> bool {
        self.saved.loaded().is_some()
    }
}
