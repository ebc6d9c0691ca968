//! Test Doubles
//!
//! In-memory backend that pages, validates and rejects tokens the way the
//! real server does, plus a navigator that records where it was sent.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::api::TaskboardApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    LoginRequest, LoginResponse, MessageResponse, NewProject, NewTask, Owner, Project,
    ProjectCreated, ProjectList, ProjectOwner, ProjectRef, RegisterRequest, Task, TaskChanges,
    TaskList, TaskPriority, TaskStatus,
};
use crate::route::{Navigator, Route};

pub const VALID_TOKEN: &str = "token-123";
pub const VALID_PASSWORD: &str = "correct-horse";
const SERVER_DEFAULT_LIMIT: u32 = 10;

fn timestamp(offset_days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap() + Duration::days(offset_days)
}

pub fn sample_project(n: usize) -> Project {
    Project {
        id: format!("p{}", n),
        name: format!("Project {}", n),
        description: format!("Description {}", n),
        owner: Some(ProjectOwner::Populated(Owner {
            display_name: "ana".into(),
        })),
        created_at: timestamp(n as i64),
    }
}

pub fn sample_task(n: usize, project_id: &str) -> Task {
    Task {
        id: format!("t{}", n),
        title: format!("Task {}", n),
        description: format!("Details {}", n),
        status: TaskStatus::ToDo,
        priority: TaskPriority::Medium,
        due_date: timestamp(30 + n as i64),
        project_id: Some(ProjectRef::Populated {
            id: project_id.to_string(),
            name: format!("Project {}", project_id.trim_start_matches('p')),
        }),
        created_at: timestamp(n as i64),
    }
}

#[derive(Default)]
struct FakeState {
    projects: Vec<Project>,
    tasks: Vec<Task>,
    expired: bool,
    fail_next: Option<ApiError>,
    calls: Vec<&'static str>,
    next_id: usize,
}

#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

fn paginate<T: Clone>(items: &[T], page: Option<u32>, limit: Option<u32>) -> Vec<T> {
    let page = page.unwrap_or(1).max(1) as usize;
    let limit = limit.unwrap_or(SERVER_DEFAULT_LIMIT) as usize;
    items.iter().skip((page - 1) * limit).take(limit).cloned().collect()
}

fn not_found(what: &str) -> ApiError {
    ApiError::from_response(404, &format!(r#"{{"message":"{} not found"}}"#, what))
}

impl FakeBackend {
    pub fn seeded(projects: usize, tasks: usize) -> Self {
        let backend = Self::default();
        {
            let mut state = backend.lock();
            state.projects = (1..=projects).map(sample_project).collect();
            state.tasks = (1..=tasks).map(|n| sample_task(n, "p1")).collect();
            state.next_id = projects.max(tasks) + 1;
        }
        backend
    }

    /// Every later authenticated call gets the expiry marker.
    pub fn expire_tokens(&self) {
        self.lock().expired = true;
    }

    /// The next call of any kind fails with `err`.
    pub fn fail_next(&self, err: ApiError) {
        self.lock().fail_next = Some(err);
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    pub fn calls_named(&self, name: &str) -> usize {
        self.lock().calls.iter().filter(|c| **c == name).count()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    fn enter(&self, name: &'static str, token: Option<&str>) -> ApiResult<MutexGuard<'_, FakeState>> {
        let mut state = self.lock();
        state.calls.push(name);
        if let Some(err) = state.fail_next.take() {
            return Err(err);
        }
        if let Some(token) = token {
            if state.expired {
                return Err(ApiError::from_response(401, r#"{"error":"jwt expired"}"#));
            }
            if token != VALID_TOKEN {
                return Err(ApiError::from_response(401, r#"{"message":"Token is not valid"}"#));
            }
        }
        Ok(state)
    }
}

fn message(text: &str) -> MessageResponse {
    MessageResponse {
        message: text.to_string(),
    }
}

#[async_trait(?Send)]
impl TaskboardApi for FakeBackend {
    async fn register(&self, request: &RegisterRequest) -> ApiResult<MessageResponse> {
        self.enter("register", None)?;
        if !request.email.contains('@') {
            return Err(ApiError::from_response(
                400,
                r#"{"errors":[{"msg":"Please enter a valid email","param":"email"}]}"#,
            ));
        }
        if request.email == "taken@example.com" {
            return Err(ApiError::from_response(409, r#"{"message":"User already exists"}"#));
        }
        Ok(message("User registered successfully"))
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.enter("login", None)?;
        if request.password != VALID_PASSWORD {
            return Err(ApiError::from_response(400, r#"{"message":"Invalid credentials"}"#));
        }
        Ok(LoginResponse {
            token: VALID_TOKEN.to_string(),
            message: "Login successful".to_string(),
        })
    }

    async fn list_projects(
        &self,
        token: &str,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> ApiResult<ProjectList> {
        let state = self.enter("list_projects", Some(token))?;
        Ok(ProjectList {
            projects: paginate(&state.projects, page, page_size),
            total: state.projects.len() as u64,
        })
    }

    async fn create_project(&self, token: &str, data: &NewProject) -> ApiResult<ProjectCreated> {
        let mut state = self.enter("create_project", Some(token))?;
        let n = state.next_id;
        state.next_id += 1;
        let project = Project {
            name: data.name.clone(),
            description: data.description.clone(),
            ..sample_project(n)
        };
        state.projects.push(project.clone());
        Ok(ProjectCreated {
            message: "Project created".into(),
            project,
        })
    }

    async fn update_project(&self, token: &str, id: &str, data: &NewProject) -> ApiResult<MessageResponse> {
        let mut state = self.enter("update_project", Some(token))?;
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("Project"))?;
        project.name = data.name.clone();
        project.description = data.description.clone();
        Ok(message("Project updated"))
    }

    async fn delete_project(&self, token: &str, id: &str) -> ApiResult<MessageResponse> {
        let mut state = self.enter("delete_project", Some(token))?;
        let before = state.projects.len();
        state.projects.retain(|p| p.id != id);
        if state.projects.len() == before {
            return Err(not_found("Project"));
        }
        Ok(message("Project deleted"))
    }

    async fn list_tasks(
        &self,
        token: &str,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> ApiResult<TaskList> {
        let state = self.enter("list_tasks", Some(token))?;
        Ok(TaskList {
            tasks: paginate(&state.tasks, page, page_size),
            total: state.tasks.len() as u64,
        })
    }

    async fn create_task(&self, token: &str, data: &NewTask) -> ApiResult<MessageResponse> {
        let mut state = self.enter("create_task", Some(token))?;
        let n = state.next_id;
        state.next_id += 1;
        let task = Task {
            title: data.title.clone(),
            description: data.description.clone(),
            status: data.status,
            priority: data.priority,
            ..sample_task(n, &data.project_id)
        };
        state.tasks.push(task);
        Ok(message("Task created"))
    }

    async fn update_task(&self, token: &str, id: &str, changes: &TaskChanges) -> ApiResult<MessageResponse> {
        let mut state = self.enter("update_task", Some(token))?;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found("Task"))?;
        if let Some(description) = &changes.description {
            task.description = description.clone();
        }
        if let Some(priority) = changes.priority {
            task.priority = priority;
        }
        if let Some(status) = changes.status {
            task.status = status;
        }
        Ok(message("Task updated"))
    }

    async fn delete_task(&self, token: &str, id: &str) -> ApiResult<MessageResponse> {
        let mut state = self.enter("delete_task", Some(token))?;
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        if state.tasks.len() == before {
            return Err(not_found("Task"));
        }
        Ok(message("Task deleted"))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<Route> {
        self.visits.lock().unwrap().last().copied()
    }

    pub fn visits(&self) -> Vec<Route> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.visits.lock().unwrap().push(route);
    }
}
