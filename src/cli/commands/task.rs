use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const LIST_TASKS: &str = "query {
    tasks { id title description completed project { id name } assignee { id username } }
}";

const CREATE_TASK: &str = "mutation($title: String!, $projectId: ID!) {
    createTask(title: $title, projectId: $projectId) { id title completed }
}";

const TOGGLE_TASK: &str = "mutation($taskId: ID!) {
    toggleTaskCompletion(taskId: $taskId) { id title completed }
}";

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssigneeRef {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub assignee: Option<AssigneeRef>,
}

#[derive(Tabled)]
pub(crate) struct TaskDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Title")]
    pub(crate) title: String,
    #[tabled(rename = "Done")]
    pub(crate) done: String,
    #[tabled(rename = "Project")]
    pub(crate) project: String,
    #[tabled(rename = "Assignee")]
    pub(crate) assignee: String,
}

impl From<&Task> for TaskDisplay {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: truncate_with_ellipsis(&task.title, 50),
            done: (if task.completed { "✓" } else { " " }).to_string(),
            project: task
                .project
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "-".to_string()),
            assignee: task
                .assignee
                .as_ref()
                .map(|a| a.username.clone())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[derive(Deserialize)]
struct TasksData {
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTaskData {
    create_task: Task,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToggleTaskData {
    toggle_task_completion: Task,
}

/// List all tasks
pub async fn list_tasks(api_client: &ApiClient, format: &str) -> CliResult<String> {
    let data: TasksData = api_client.execute(LIST_TASKS, json!({})).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&data.tasks)?),
        _ => Ok(format_table(&data.tasks)),
    }
}

/// Create a new task in a project
pub async fn create_task(api_client: &ApiClient, title: &str, project_id: &str) -> CliResult<String> {
    let data: CreateTaskData = api_client
        .execute(CREATE_TASK, json!({"title": title, "projectId": project_id}))
        .await?;

    let task = data.create_task;
    Ok(format!("✓ Created task: {} ({})", task.title, task.id))
}

/// Flip a task between complete and incomplete
pub async fn toggle_task(api_client: &ApiClient, task_id: &str) -> CliResult<String> {
    let data: ToggleTaskData = api_client
        .execute(TOGGLE_TASK, json!({"taskId": task_id}))
        .await?;

    let task = data.toggle_task_completion;
    if task.completed {
        Ok(format!("✓ Task {} marked as complete", task.id))
    } else {
        Ok(format!("○ Task {} marked as incomplete", task.id))
    }
}

pub(crate) fn format_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let display: Vec<TaskDisplay> = tasks.iter().map(|t| t.into()).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}
