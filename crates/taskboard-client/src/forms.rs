//! Form Drafts and Validation
//!
//! Raw form input as typed by the user, and the edit drafts seeded from a
//! loaded row. Everything is validated before a request is built.

use chrono::NaiveDate;

use crate::error::ApiError;
use crate::models::{NewProject, NewTask, Project, Task, TaskChanges, TaskPriority, TaskStatus};

fn required(value: &str, field: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

impl NewProject {
    /// Trimmed copy, or the first missing field
    pub fn validated(&self) -> Result<NewProject, ApiError> {
        Ok(NewProject {
            name: required(&self.name, "Name")?,
            description: required(&self.description, "Description")?,
        })
    }
}

/// Task creation form, all fields as entered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: String,
    pub due_date: String,
    pub project_id: String,
    pub priority: String,
}

impl TaskForm {
    pub fn to_new_task(&self) -> Result<NewTask, ApiError> {
        let title = required(&self.title, "Title")?;
        let description = required(&self.description, "Description")?;
        let status = TaskStatus::parse(self.status.trim())
            .ok_or_else(|| ApiError::validation("Status is required"))?;
        let due_date = NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d")
            .map_err(|_| ApiError::validation("Due date is required"))?;
        let project_id = required(&self.project_id, "Project")?;
        let priority = TaskPriority::parse(self.priority.trim())
            .ok_or_else(|| ApiError::validation("Priority is required"))?;

        Ok(NewTask {
            title,
            description,
            status,
            due_date,
            project_id,
            priority,
        })
    }
}

/// Editable copy of a project's mutable fields
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl ProjectDraft {
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            description: project.description.clone(),
        }
    }

    pub fn to_update(&self) -> Result<NewProject, ApiError> {
        NewProject {
            name: self.name.clone(),
            description: self.description.clone(),
        }
        .validated()
    }
}

/// Editable copy of a task's mutable fields.
///
/// Title, due date and project are fixed once the task exists.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub id: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            description: task.description.clone(),
            priority: task.priority,
            status: task.status,
        }
    }

    pub fn to_changes(&self) -> Result<TaskChanges, ApiError> {
        Ok(TaskChanges {
            description: Some(required(&self.description, "Description")?),
            priority: Some(self.priority),
            status: Some(self.status),
        })
    }
}
