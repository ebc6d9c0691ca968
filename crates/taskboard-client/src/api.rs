//! API Gateway Client
//!
//! Typed bindings to the REST backend, one method per endpoint. The token is
//! always passed in by the caller; nothing here touches the session store.

use std::sync::Arc;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    LoginRequest, LoginResponse, MessageResponse, NewProject, NewTask, ProjectCreated,
    ProjectList, RegisterRequest, TaskChanges, TaskList,
};

/// Header carrying the bearer token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Log target for request/response lines.
pub const LOG_TARGET: &str = "taskboard_client::api";

/// Operations the views need from the backend.
///
/// `page`/`page_size` of `None` leave the server defaults in place.
#[async_trait(?Send)]
pub trait TaskboardApi: Send + Sync {
    // ========================
    // Auth
    // ========================

    async fn register(&self, request: &RegisterRequest) -> ApiResult<MessageResponse>;

    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;

    // ========================
    // Projects
    // ========================

    async fn list_projects(
        &self,
        token: &str,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> ApiResult<ProjectList>;

    async fn create_project(&self, token: &str, data: &NewProject) -> ApiResult<ProjectCreated>;

    async fn update_project(&self, token: &str, id: &str, data: &NewProject)
        -> ApiResult<MessageResponse>;

    async fn delete_project(&self, token: &str, id: &str) -> ApiResult<MessageResponse>;

    // ========================
    // Tasks
    // ========================

    async fn list_tasks(
        &self,
        token: &str,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> ApiResult<TaskList>;

    async fn create_task(&self, token: &str, data: &NewTask) -> ApiResult<MessageResponse>;

    async fn update_task(&self, token: &str, id: &str, changes: &TaskChanges)
        -> ApiResult<MessageResponse>;

    async fn delete_task(&self, token: &str, id: &str) -> ApiResult<MessageResponse>;
}

/// Build `base/segment/id` with the id percent-encoded.
pub fn resource_url(base_url: &str, collection: &str, id: Option<&str>) -> String {
    let base = base_url.trim_end_matches('/');
    match id {
        Some(id) => format!(
            "{}/{}/{}",
            base,
            collection,
            utf8_percent_encode(id, NON_ALPHANUMERIC)
        ),
        None => format!("{}/{}", base, collection),
    }
}

/// `?page=..&limit=..` pairs, skipping unset values
pub fn page_query(page: Option<u32>, page_size: Option<u32>) -> Vec<(&'static str, u32)> {
    let mut query = Vec::with_capacity(2);
    if let Some(page) = page {
        query.push(("page", page));
    }
    if let Some(limit) = page_size {
        query.push(("limit", limit));
    }
    query
}

struct ApiClientInner {
    http: Client,
    base_url: String,
}

/// reqwest-backed implementation of [`TaskboardApi`]
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        log::debug!(target: LOG_TARGET, "Creating API client for {}", config.base_url);
        Self {
            inner: Arc::new(ApiClientInner {
                http: Client::new(),
                base_url: config.base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn request(&self, method: Method, url: String, token: Option<&str>) -> RequestBuilder {
        let builder = self.inner.http.request(method, url);
        match token {
            Some(token) => builder.header(AUTH_HEADER, token),
            None => builder,
        }
    }

    /// Send, then decode a 2xx body or classify the failure.
    async fn send<T: DeserializeOwned>(&self, label: &str, builder: RequestBuilder) -> ApiResult<T> {
        log::debug!(target: LOG_TARGET, "{} -> sending", label);

        let response = builder.send().await.map_err(|e| {
            log::warn!(target: LOG_TARGET, "{} -> transport error: {}", label, e);
            ApiError::network(e.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            log::warn!(target: LOG_TARGET, "{} -> body read failed: {}", label, e);
            ApiError::from(e)
        })?;

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &body);
            log::warn!(target: LOG_TARGET, "{} -> {}", label, err);
            return Err(err);
        }

        log::debug!(target: LOG_TARGET, "{} -> {}", label, status.as_u16());
        serde_json::from_str(&body).map_err(|e| {
            log::warn!(target: LOG_TARGET, "{} -> undecodable body: {}", label, e);
            ApiError::from(e).with_status(status.as_u16())
        })
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        label: &str,
        method: Method,
        url: String,
        token: Option<&str>,
        body: &B,
    ) -> ApiResult<T> {
        self.send(label, self.request(method, url, token).json(body)).await
    }

    fn url(&self, collection: &str, id: Option<&str>) -> String {
        resource_url(&self.inner.base_url, collection, id)
    }
}

#[async_trait(?Send)]
impl TaskboardApi for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> ApiResult<MessageResponse> {
        self.send_json("register", Method::POST, self.url("users/register", None), None, request)
            .await
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.send_json("login", Method::POST, self.url("users/login", None), None, request)
            .await
    }

    async fn list_projects(
        &self,
        token: &str,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> ApiResult<ProjectList> {
        let builder = self
            .request(Method::GET, self.url("projects", None), Some(token))
            .query(&page_query(page, page_size));
        self.send("list_projects", builder).await
    }

    async fn create_project(&self, token: &str, data: &NewProject) -> ApiResult<ProjectCreated> {
        self.send_json("create_project", Method::POST, self.url("projects", None), Some(token), data)
            .await
    }

    async fn update_project(
        &self,
        token: &str,
        id: &str,
        data: &NewProject,
    ) -> ApiResult<MessageResponse> {
        self.send_json("update_project", Method::PUT, self.url("projects", Some(id)), Some(token), data)
            .await
    }

    async fn delete_project(&self, token: &str, id: &str) -> ApiResult<MessageResponse> {
        let builder = self.request(Method::DELETE, self.url("projects", Some(id)), Some(token));
        self.send("delete_project", builder).await
    }

    async fn list_tasks(
        &self,
        token: &str,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> ApiResult<TaskList> {
        let builder = self
            .request(Method::GET, self.url("tasks", None), Some(token))
            .query(&page_query(page, page_size));
        self.send("list_tasks", builder).await
    }

    async fn create_task(&self, token: &str, data: &NewTask) -> ApiResult<MessageResponse> {
        self.send_json("create_task", Method::POST, self.url("tasks", None), Some(token), data)
            .await
    }

    async fn update_task(
        &self,
        token: &str,
        id: &str,
        changes: &TaskChanges,
    ) -> ApiResult<MessageResponse> {
        self.send_json("update_task", Method::PUT, self.url("tasks", Some(id)), Some(token), changes)
            .await
    }

    async fn delete_task(&self, token: &str, id: &str) -> ApiResult<MessageResponse> {
        let builder = self.request(Method::DELETE, self.url("tasks", Some(id)), Some(token));
        self.send("delete_task", builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url() {
        assert_eq!(
            resource_url("http://localhost:5000/api/", "projects", None),
            "http://localhost:5000/api/projects"
        );
        assert_eq!(
            resource_url("http://localhost:5000/api", "tasks", Some("65f0a1")),
            "http://localhost:5000/api/tasks/65f0a1"
        );
    }

    #[test]
    fn test_resource_url_encodes_id() {
        assert_eq!(
            resource_url("https://h", "tasks", Some("a/b c")),
            "https://h/tasks/a%2Fb%20c"
        );
    }

    #[test]
    fn test_page_query_skips_unset() {
        assert!(page_query(None, None).is_empty());
        assert_eq!(page_query(Some(2), None), vec![("page", 2)]);
        assert_eq!(page_query(Some(3), Some(10)), vec![("page", 3), ("limit", 10)]);
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = ApiClient::new(&ClientConfig {
            base_url: "https://api.example.com/".into(),
            ..ClientConfig::default()
        });
        assert_eq!(client.base_url(), "https://api.example.com");
    }
}
