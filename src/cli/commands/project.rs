use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const LIST_PROJECTS: &str = "query {
    projects { id name description owner { id username } members { id username } }
}";

const CREATE_PROJECT: &str = "mutation($name: String!, $description: String, $ownerId: ID!) {
    createProject(name: $name, description: $description, ownerId: $ownerId) {
        id name description owner { id username } members { id username }
    }
}";

/// A user as nested inside a project.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub owner: Option<UserRef>,
    pub members: Vec<UserRef>,
}

#[derive(Tabled)]
pub(crate) struct ProjectDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Name")]
    pub(crate) name: String,
    #[tabled(rename = "Owner")]
    pub(crate) owner: String,
    #[tabled(rename = "Members")]
    pub(crate) members: String,
}

impl From<&Project> for ProjectDisplay {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: truncate_with_ellipsis(&project.name, 40),
            owner: project
                .owner
                .as_ref()
                .map(|o| o.username.clone())
                .unwrap_or_else(|| "-".to_string()),
            members: if project.members.is_empty() {
                "-".to_string()
            } else {
                project
                    .members
                    .iter()
                    .map(|m| m.username.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            },
        }
    }
}

#[derive(Deserialize)]
struct ProjectsData {
    projects: Vec<Project>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateProjectData {
    create_project: Project,
}

/// List all projects
pub async fn list_projects(api_client: &ApiClient, format: &str) -> CliResult<String> {
    let data: ProjectsData = api_client.execute(LIST_PROJECTS, json!({})).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&data.projects)?),
        _ => Ok(format_table(&data.projects)),
    }
}

/// Create a new project owned by `owner_id`
pub async fn create_project(
    api_client: &ApiClient,
    name: &str,
    description: Option<&str>,
    owner_id: &str,
) -> CliResult<String> {
    let data: CreateProjectData = api_client
        .execute(
            CREATE_PROJECT,
            json!({"name": name, "description": description, "ownerId": owner_id}),
        )
        .await?;

    let project = data.create_project;
    Ok(format!("✓ Created project: {} ({})", project.name, project.id))
}

pub(crate) fn format_table(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found.".to_string();
    }

    let display: Vec<ProjectDisplay> = projects.iter().map(|p| p.into()).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}
