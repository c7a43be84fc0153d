/*
[INPUT]:  Task ids and form values
[OUTPUT]: Task records (list, single, created, updated)
[POS]:    HTTP layer - /mytasks endpoints
[UPDATE]: When adding task endpoints or changing the payload mapping
*/

use reqwest::Method;
use tracing::{debug, info, warn};

use crate::http::{Result, TaskClient};
use crate::types::{Task, TaskForm};

impl TaskClient {
    /// List all tasks
    ///
    /// GET /mytasks
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.request(Method::GET, "/mytasks")?;
        let tasks: Vec<Task> = self.send_json(builder).await?;
        debug!(count = tasks.len(), "tasks listed");
        Ok(tasks)
    }

    /// Fetch one task; a missing task is `Ok(None)`
    ///
    /// GET /mytasks/{id}
    pub async fn get_task(&self, id: u64) -> Result<Option<Task>> {
        let endpoint = format!("/mytasks/{}", id);
        let builder = self.request(Method::GET, &endpoint)?;
        let task = self.send_json_optional(builder).await?;
        if task.is_none() {
            debug!(id, "task not found");
        }
        Ok(task)
    }

    /// Create a task from form values
    ///
    /// POST /mytasks
    pub async fn create_task(&self, form: &TaskForm) -> Result<Option<Task>> {
        let payload = form.to_payload().inspect_err(|err| {
            warn!(error = %err, "task form rejected before create");
        })?;
        let builder = self.request(Method::POST, "/mytasks")?.json(&payload);
        let created: Option<Task> = self.send_write(builder).await.inspect_err(|err| {
            warn!(error = %err, "error creating task");
        })?;
        info!(id = ?created.as_ref().map(|task| task.id), "task created");
        Ok(created)
    }

    /// Update a task from form values
    ///
    /// PATCH /mytasks/{id}
    pub async fn update_task(&self, id: u64, form: &TaskForm) -> Result<Option<Task>> {
        let payload = form.to_payload().inspect_err(|err| {
            warn!(id, error = %err, "task form rejected before update");
        })?;
        let endpoint = format!("/mytasks/{}", id);
        let builder = self.request(Method::PATCH, &endpoint)?.json(&payload);
        let updated: Option<Task> = self.send_write(builder).await.inspect_err(|err| {
            warn!(id, error = %err, "error updating task");
        })?;
        info!(id, "task updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, TaskClient, TaskClientError};
    use crate::types::{FormField, Priority, Task, TaskForm, TaskStatus};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TaskClient {
        TaskClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    fn task_json(id: u64, title: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "status": "todo",
            "priority": "medium",
            "dueDate": "today",
            "tags": [],
            "createdAt": "2024-03-05T12:00:00.000Z"
        })
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mytasks"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([task_json(1, "First"), task_json(2, "Second")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let tasks = client_for(&server)
            .list_tasks()
            .await
            .expect("list_tasks failed");

        let titles: Vec<&str> = tasks.iter().map(|task| task.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_get_task() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mytasks/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(task_json(5, "Fifth")))
            .expect(1)
            .mount(&server)
            .await;

        let task = client_for(&server)
            .get_task(5)
            .await
            .expect("get_task failed")
            .expect("task present");

        assert_eq!(task.id, 5);
        assert_eq!(task.status, TaskStatus::Todo);
    }

    #[tokio::test]
    async fn test_get_task_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mytasks/999"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": "Task not found"
            })))
            .mount(&server)
            .await;

        let task = client_for(&server).get_task(999).await.expect("not fatal");
        assert_eq!(task, None);
    }

    #[tokio::test]
    async fn test_get_task_null_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mytasks/8"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let task = client_for(&server).get_task(8).await.expect("not fatal");
        assert_eq!(task, None);
    }

    #[tokio::test]
    async fn test_create_task_posts_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mytasks"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "title": "Buy milk",
                "description": "",
                "status": "todo",
                "priority": "low",
                "dueDate": "today",
                "category": "",
                "tags": ["errands", "home"],
                "assignedTo": "",
                "createdBy": "user123",
                "isRecurring": false,
                "recurrencePattern": null
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 41,
                "title": "Buy milk",
                "status": "todo",
                "priority": "low",
                "tags": ["errands", "home"],
                "createdBy": "user123",
                "createdAt": "2024-03-05T12:00:00.000Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let form = TaskForm::new("user123")
            .with_field(FormField::Title("Buy milk".to_string()))
            .with_field(FormField::Priority(Priority::Low))
            .with_field(FormField::Tags("errands, home,".to_string()));

        let created: Task = client_for(&server)
            .create_task(&form)
            .await
            .expect("create_task failed")
            .expect("created task in body");

        assert_eq!(created.id, 41);
        assert_eq!(created.created_at, "2024-03-05T12:00:00.000Z");
    }

    #[tokio::test]
    async fn test_create_task_invalid_form_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let form = TaskForm::new("user123")
            .with_field(FormField::Title("Buy milk".to_string()))
            .with_field(FormField::EstimatedMinutes("soon".to_string()));

        let err = client_for(&server)
            .create_task(&form)
            .await
            .expect_err("invalid minutes");
        assert!(matches!(err, TaskClientError::InvalidForm(_)));
    }

    #[tokio::test]
    async fn test_update_task_sends_numeric_minutes() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/mytasks/3"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let form = TaskForm::new("user123")
            .with_field(FormField::Title("Plan sprint".to_string()))
            .with_field(FormField::EstimatedMinutes("30".to_string()));

        let updated = client_for(&server)
            .update_task(3, &form)
            .await
            .expect("update_task failed");
        assert_eq!(updated, None);

        let requests = server.received_requests().await.expect("recording enabled");
        let body: serde_json::Value =
            serde_json::from_slice(&requests[0].body).expect("json body");
        assert_eq!(body["estimatedMinutes"], json!(30));
        assert!(body.get("actualMinutes").is_none());
        assert!(body.get("id").is_none());
        assert!(body.get("createdAt").is_none());
    }

    #[tokio::test]
    async fn test_list_tasks_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mytasks"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = client_for(&server).list_tasks().await.expect_err("503");
        match err {
            TaskClientError::Http { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("Expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_tasks_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mytasks"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).list_tasks().await.expect_err("not json");
        assert!(matches!(err, TaskClientError::Decode(_)));
    }
}
