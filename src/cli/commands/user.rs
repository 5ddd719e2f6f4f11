use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const LIST_USERS: &str = "query { users { id username email } }";

const CREATE_USER: &str = "mutation($username: String!, $email: String!, $password: String!) {
    createUser(username: $username, email: $email, password: $password) { id username email }
}";

#[derive(Debug, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Tabled)]
pub(crate) struct UserDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Username")]
    pub(crate) username: String,
    #[tabled(rename = "Email")]
    pub(crate) email: String,
}

impl From<&User> for UserDisplay {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: truncate_with_ellipsis(&user.username, 30),
            email: truncate_with_ellipsis(&user.email, 40),
        }
    }
}

#[derive(Deserialize)]
struct UsersData {
    users: Vec<User>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateUserData {
    create_user: User,
}

/// List all users
pub async fn list_users(api_client: &ApiClient, format: &str) -> CliResult<String> {
    let data: UsersData = api_client.execute(LIST_USERS, json!({})).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&data.users)?),
        _ => Ok(format_table(&data.users)),
    }
}

/// Create a new user
pub async fn create_user(
    api_client: &ApiClient,
    username: &str,
    email: &str,
    password: &str,
) -> CliResult<String> {
    let data: CreateUserData = api_client
        .execute(
            CREATE_USER,
            json!({"username": username, "email": email, "password": password}),
        )
        .await?;

    let user = data.create_user;
    Ok(format!("✓ Created user: {} ({})", user.username, user.id))
}

pub(crate) fn format_table(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }

    let display: Vec<UserDisplay> = users.iter().map(|u| u.into()).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}
