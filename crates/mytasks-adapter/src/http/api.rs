/*
[INPUT]:  Task ids and form values
[OUTPUT]: Task records from a task backend
[POS]:    HTTP layer - backend abstraction consumed by the screens
[UPDATE]: When task operations are added or change signature
*/

use async_trait::async_trait;
use std::sync::Mutex;

use crate::http::{Result, TaskClient, TaskClientError};
use crate::types::{Task, TaskForm, TaskPayload};

/// Operations a task backend offers.
///
/// [`TaskClient`] talks to the remote service; [`MockTaskApi`] keeps tasks
/// in memory for tests and offline demos.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// `GET /mytasks`
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// `GET /mytasks/{id}`; `None` when the task does not exist
    async fn get_task(&self, id: u64) -> Result<Option<Task>>;

    /// `POST /mytasks`
    async fn create_task(&self, form: &TaskForm) -> Result<Option<Task>>;

    /// `PATCH /mytasks/{id}`
    async fn update_task(&self, id: u64, form: &TaskForm) -> Result<Option<Task>>;
}

#[async_trait]
impl TaskApi for TaskClient {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        TaskClient::list_tasks(self).await
    }

    async fn get_task(&self, id: u64) -> Result<Option<Task>> {
        TaskClient::get_task(self, id).await
    }

    async fn create_task(&self, form: &TaskForm) -> Result<Option<Task>> {
        TaskClient::create_task(self, form).await
    }

    async fn update_task(&self, id: u64, form: &TaskForm) -> Result<Option<Task>> {
        TaskClient::update_task(self, id, form).await
    }
}

/// In-memory task backend for testing
#[derive(Debug)]
pub struct MockTaskApi {
    tasks: Mutex<Vec<Task>>,
    created_at: String,
}

impl MockTaskApi {
    /// Create a backend seeded with `tasks`; new tasks get `created_at` as their timestamp
    pub fn new(tasks: Vec<Task>, created_at: &str) -> Self {
        Self {
            tasks: Mutex::new(tasks),
            created_at: created_at.to_string(),
        }
    }

    /// Snapshot of the stored tasks
    pub fn tasks(&self) -> Vec<Task> {
        self.lock().map(|tasks| tasks.clone()).unwrap_or_default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Task>>> {
        self.tasks
            .lock()
            .map_err(|_| TaskClientError::Config("mock task store poisoned".to_string()))
    }

    fn apply(task: &mut Task, payload: TaskPayload) {
        task.title = payload.title;
        task.description = Some(payload.description);
        task.status = payload.status;
        task.priority = payload.priority;
        task.due_date = Some(payload.due_date);
        task.category = Some(payload.category);
        task.tags = payload.tags;
        task.assigned_to = Some(payload.assigned_to);
        task.created_by = Some(payload.created_by);
        task.estimated_minutes = payload.estimated_minutes;
        task.actual_minutes = payload.actual_minutes;
        task.is_recurring = payload.is_recurring;
        task.recurrence_pattern = payload.recurrence_pattern;
    }
}

#[async_trait]
impl TaskApi for MockTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.lock()?.clone())
    }

    async fn get_task(&self, id: u64) -> Result<Option<Task>> {
        Ok(self.lock()?.iter().find(|task| task.id == id).cloned())
    }

    async fn create_task(&self, form: &TaskForm) -> Result<Option<Task>> {
        let payload = form.to_payload()?;
        let mut tasks = self.lock()?;
        let id = tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;
        let mut task = Task {
            id,
            title: String::new(),
            description: None,
            status: Default::default(),
            priority: Default::default(),
            due_date: None,
            category: None,
            tags: Vec::new(),
            assigned_to: None,
            created_by: None,
            estimated_minutes: None,
            actual_minutes: None,
            is_recurring: false,
            recurrence_pattern: None,
            created_at: self.created_at.clone(),
            updated_at: None,
            completed_at: None,
        };
        Self::apply(&mut task, payload);
        tasks.push(task.clone());
        Ok(Some(task))
    }

    async fn update_task(&self, id: u64, form: &TaskForm) -> Result<Option<Task>> {
        let payload = form.to_payload()?;
        let mut tasks = self.lock()?;
        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            return Err(TaskClientError::Http {
                status: 404,
                body: format!("task {} not found", id),
            });
        };
        Self::apply(task, payload);
        task.updated_at = Some(self.created_at.clone());
        Ok(Some(task.clone()))
    }
}
