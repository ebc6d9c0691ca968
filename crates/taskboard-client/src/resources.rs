//! Paged Resource Adapters
//!
//! Bind the list endpoints of [`TaskboardApi`] to the controller.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::TaskboardApi;
use crate::controller::PagedResource;
use crate::error::ApiResult;
use crate::models::{Project, Task};

/// `GET /projects`
#[derive(Clone)]
pub struct Projects {
    api: Arc<dyn TaskboardApi>,
}

impl Projects {
    pub fn new(api: Arc<dyn TaskboardApi>) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl PagedResource for Projects {
    type Item = Project;

    fn name(&self) -> &'static str {
        "projects"
    }

    async fn fetch_page(&self, token: &str, page: u32, page_size: u32) -> ApiResult<(Vec<Project>, u64)> {
        let list = self.api.list_projects(token, Some(page), Some(page_size)).await?;
        Ok((list.projects, list.total))
    }
}

/// `GET /tasks`
#[derive(Clone)]
pub struct Tasks {
    api: Arc<dyn TaskboardApi>,
}

impl Tasks {
    pub fn new(api: Arc<dyn TaskboardApi>) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl PagedResource for Tasks {
    type Item = Task;

    fn name(&self) -> &'static str {
        "tasks"
    }

    async fn fetch_page(&self, token: &str, page: u32, page_size: u32) -> ApiResult<(Vec<Task>, u64)> {
        let list = self.api.list_tasks(token, Some(page), Some(page_size)).await?;
        Ok((list.tasks, list.total))
    }
}
