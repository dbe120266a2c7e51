//! ureq transport for the backend API.
//!
//! ureq is blocking, so every call is moved onto tokio's blocking pool.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{ApiError, Backend};
use crate::config::ServerSettings;
use crate::domain::{
    ChatReply, ChatRequest, EntityId, Memory, Project, ResourceKind, Task, TaskAction,
};

pub(super) fn encode_url_path_segment(segment: &str) -> String {
    // RFC3986 unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
    let mut out = String::with_capacity(segment.len());
    for &b in segment.as_bytes() {
        let is_unreserved =
            matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~');
        if is_unreserved {
            out.push(b as char);
        } else {
            out.push('%');
            out.push_str(&format!("{:02X}", b));
        }
    }
    out
}

/// A prepared request, built on the async side and sent on the blocking pool
struct Call {
    method: &'static str,
    url: String,
    query: Vec<(&'static str, String)>,
    body: Option<serde_json::Value>,
}

impl Call {
    fn new(method: &'static str, url: String) -> Self {
        Self {
            method,
            url,
            query: Vec::new(),
            body: None,
        }
    }

    fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// HTTP client for the assistant backend
#[derive(Clone)]
pub struct HttpBackend {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpBackend {
    pub fn new(settings: &ServerSettings) -> Self {
        let mut builder = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(settings.connect_timeout_secs));
        if let Some(secs) = settings.read_timeout_secs {
            builder = builder.timeout_read(Duration::from_secs(secs));
        }

        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            agent: builder.build(),
        }
    }

    pub fn with_url(base_url: impl Into<String>) -> Self {
        Self::new(&ServerSettings {
            base_url: base_url.into(),
            ..ServerSettings::default()
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Send a call and return the raw body text
    async fn execute(&self, call: Call) -> Result<String, ApiError> {
        let agent = self.agent.clone();
        let method = call.method;
        let url = call.url.clone();

        let result = tokio::task::spawn_blocking(move || send_blocking(&agent, call))
            .await
            .map_err(|e| ApiError::Transport(format!("request task failed: {e}")))?;

        if let Err(e) = &result {
            tracing::debug!("{} {} failed: {}", method, url, e);
        }
        result
    }

    async fn fetch_json<T: DeserializeOwned>(&self, call: Call) -> Result<T, ApiError> {
        let body = self.execute(call).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn send_blocking(agent: &ureq::Agent, call: Call) -> Result<String, ApiError> {
    let mut request = agent.request(call.method, &call.url);
    for (key, value) in &call.query {
        request = request.query(key, value);
    }

    let response = match call.body {
        Some(body) => request.send_json(body),
        None => request.call(),
    };

    let response = response.map_err(|e| match e {
        ureq::Error::Status(code, resp) => {
            let body = resp.into_string().unwrap_or_default();
            ApiError::from_status(code, &body)
        }
        ureq::Error::Transport(transport) => ApiError::Transport(transport.to_string()),
    })?;

    response
        .into_string()
        .map_err(|e| ApiError::Transport(format!("Failed to read response body: {e}")))
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.fetch_json(Call::new("GET", self.url("projects"))).await
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.fetch_json(Call::new("GET", self.url("tasks"))).await
    }

    async fn list_memories(&self) -> Result<Vec<Memory>, ApiError> {
        // Records come straight off disk; decode each one on its own
        let records: Vec<serde_json::Value> =
            self.fetch_json(Call::new("GET", self.url("memories"))).await?;
        Ok(Memory::decode_list(records))
    }

    async fn batch_delete(&self, kind: ResourceKind, ids: &[EntityId]) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/batch-delete", kind.collection()));
        let body = serde_json::json!({ "ids": ids });
        self.execute(Call::new("POST", url).json(body)).await?;
        Ok(())
    }

    async fn delete_all(&self, kind: ResourceKind) -> Result<(), ApiError> {
        self.execute(Call::new("DELETE", self.url(kind.collection())))
            .await?;
        Ok(())
    }

    async fn create_project(&self, name: &str) -> Result<(), ApiError> {
        let call = Call::new("POST", self.url("projects")).query("name", name);
        self.execute(call).await?;
        Ok(())
    }

    async fn switch_project(&self, id: &EntityId) -> Result<(), ApiError> {
        let url = self.url(&format!(
            "projects/{}/switch",
            encode_url_path_segment(id.as_str())
        ));
        self.execute(Call::new("POST", url)).await?;
        Ok(())
    }

    async fn control_task(&self, id: &EntityId, action: TaskAction) -> Result<(), ApiError> {
        let url = self.url(&format!(
            "tasks/{}/control",
            encode_url_path_segment(id.as_str())
        ));
        self.execute(Call::new("POST", url).query("action", action.as_str()))
            .await?;
        Ok(())
    }

    async fn delete_memory(&self, id: &EntityId) -> Result<(), ApiError> {
        let url = self.url(&format!("memories/{}", encode_url_path_segment(id.as_str())));
        self.execute(Call::new("DELETE", url)).await?;
        Ok(())
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        let body =
            serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.fetch_json(Call::new("POST", self.url("chat")).json(body))
            .await
    }
}
