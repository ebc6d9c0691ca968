//! Resource Models
//!
//! Data structures matching the backend's JSON documents.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Project owner as populated by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(rename = "user_name")]
    pub display_name: String,
}

/// Owner field: populated object or bare user id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectOwner {
    Populated(Owner),
    Id(String),
}

impl ProjectOwner {
    pub fn display_name(&self) -> Option<&str> {
        match self {
            ProjectOwner::Populated(owner) => Some(&owner.display_name),
            ProjectOwner::Id(_) => None,
        }
    }
}

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub owner: Option<ProjectOwner>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref().and_then(ProjectOwner::display_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "to-do")]
    ToDo,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done];

    /// Wire value, also used as `<option>` value
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::ToDo => "to-do",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To-do",
            TaskStatus::InProgress => "In-progress",
            TaskStatus::Done => "Done",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// Project reference on a task: bare id, or `{_id, name}` when populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectRef {
    Populated {
        #[serde(rename = "_id")]
        id: String,
        name: String,
    },
    Id(String),
}

impl ProjectRef {
    pub fn id(&self) -> &str {
        match self {
            ProjectRef::Populated { id, .. } => id,
            ProjectRef::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ProjectRef::Populated { name, .. } => Some(name),
            ProjectRef::Id(_) => None,
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: DateTime<Utc>,
    /// `null` or absent once the project has been deleted
    #[serde(default)]
    pub project_id: Option<ProjectRef>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn project_name(&self) -> Option<&str> {
        self.project_id.as_ref().and_then(ProjectRef::name)
    }
}

// ========================
// Request Payloads
// ========================

/// Body of `POST /projects` and `PUT /projects/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
}

/// Body of `POST /tasks`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    pub project_id: String,
    pub priority: TaskPriority,
}

/// Partial body of `PUT /tasks/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "recaptchaToken")]
    pub recaptcha_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "recaptchaToken", skip_serializing_if = "Option::is_none")]
    pub recaptcha_token: Option<String>,
}

// ========================
// Response Envelopes
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectCreated {
    #[serde(default)]
    pub message: String,
    pub project: Project,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectList {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskList {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_list_missing_total_is_zero() {
        let json = r#"{"projects":[{"_id":"p1","name":"Alpha","description":"First","owner":{"user_name":"ana"},"createdAt":"2024-03-01T10:00:00.000Z"}]}"#;
        let list: ProjectList = serde_json::from_str(json).unwrap();
        assert_eq!(list.total, 0);
        assert_eq!(list.projects.len(), 1);
        assert_eq!(list.projects[0].owner_name(), Some("ana"));
    }

    #[test]
    fn test_unpopulated_owner_has_no_name() {
        let json = r#"{"_id":"p1","name":"Alpha","description":"First","owner":"u42","createdAt":"2024-03-01T10:00:00Z"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.owner, Some(ProjectOwner::Id("u42".into())));
        assert_eq!(project.owner_name(), None);
    }

    #[test]
    fn test_task_with_populated_project() {
        let json = r#"{
            "_id":"t1","title":"Write docs","description":"API section",
            "status":"in-progress","priority":"high",
            "dueDate":"2024-04-10T00:00:00.000Z",
            "projectId":{"_id":"p1","name":"Alpha"},
            "createdAt":"2024-03-01T10:00:00.000Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.project_id.as_ref().map(ProjectRef::id), Some("p1"));
        assert_eq!(task.project_name(), Some("Alpha"));
    }

    #[test]
    fn test_task_with_deleted_project_still_decodes() {
        let json = r#"{
            "tasks":[
                {"_id":"t1","title":"Orphan","description":"No project",
                 "status":"to-do","priority":"low",
                 "dueDate":"2024-04-10T00:00:00.000Z","projectId":null,
                 "createdAt":"2024-03-01T10:00:00.000Z"},
                {"_id":"t2","title":"Bare","description":"Unpopulated",
                 "status":"done","priority":"medium",
                 "dueDate":"2024-04-11T00:00:00.000Z","projectId":"p7",
                 "createdAt":"2024-03-02T10:00:00.000Z"}
            ],
            "total":2
        }"#;
        let list: TaskList = serde_json::from_str(json).unwrap();
        assert_eq!(list.tasks.len(), 2);
        assert_eq!(list.tasks[0].project_id, None);
        assert_eq!(list.tasks[0].project_name(), None);
        assert_eq!(list.tasks[1].project_id, Some(ProjectRef::Id("p7".into())));
        assert_eq!(list.tasks[1].project_name(), None);
    }

    #[test]
    fn test_new_task_wire_names() {
        let task = NewTask {
            title: "Plan".into(),
            description: "Sprint".into(),
            status: TaskStatus::ToDo,
            due_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            project_id: "p1".into(),
            priority: TaskPriority::Low,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["dueDate"], "2024-05-01");
        assert_eq!(value["projectId"], "p1");
        assert_eq!(value["status"], "to-do");
        assert_eq!(value["priority"], "low");
    }

    #[test]
    fn test_task_changes_skip_unset_fields() {
        let changes = TaskChanges {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&changes).unwrap(), r#"{"status":"done"}"#);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(TaskStatus::parse("to-do"), Some(TaskStatus::ToDo));
        assert_eq!(TaskStatus::parse("todo"), None);
        assert_eq!(TaskPriority::parse("medium"), Some(TaskPriority::Medium));
    }
}
