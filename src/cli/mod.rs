pub mod api_client;
mod commands;
pub mod error;
mod utils;


use clap::{Parser, Subcommand};

use error::CliResult;

#[derive(Parser)]
#[command(name = "collab")]
#[command(author, version, about = "collablite command-line client", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: COLLABLITE_API_URL env or http://localhost:4000)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Project management commands
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Task management commands
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// List all users
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Create a user
    Create {
        username: String,
        email: String,
        /// Stored as given
        password: String,
    },
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// List all projects
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Create a project; the owner becomes its first member
    Create {
        name: String,
        /// Owning user ID
        #[arg(long)]
        owner: String,
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
enum TaskCommands {
    /// List all tasks
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Create a task in a project
    Create {
        title: String,
        /// Project ID
        #[arg(long)]
        project: String,
    },
    /// Toggle a task between complete and incomplete
    Toggle {
        /// Task ID
        id: String,
    },
}

async fn dispatch(api_client: &api_client::ApiClient, command: Commands) -> CliResult<String> {
    match command {
        Commands::User { command } => match command {
            UserCommands::List { format } => commands::user::list_users(api_client, &format).await,
            UserCommands::Create {
                username,
                email,
                password,
            } => commands::user::create_user(api_client, &username, &email, &password).await,
        },
        Commands::Project { command } => match command {
            ProjectCommands::List { format } => {
                commands::project::list_projects(api_client, &format).await
            }
            ProjectCommands::Create {
                name,
                owner,
                description,
            } => {
                commands::project::create_project(api_client, &name, description.as_deref(), &owner)
                    .await
            }
        },
        Commands::Task { command } => match command {
            TaskCommands::List { format } => commands::task::list_tasks(api_client, &format).await,
            TaskCommands::Create { title, project } => {
                commands::task::create_task(api_client, &title, &project).await
            }
            TaskCommands::Toggle { id } => commands::task::toggle_task(api_client, &id).await,
        },
    }
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    let api_client = api_client::ApiClient::new(cli.api_url);

    let output = dispatch(&api_client, cli.command).await?;
    println!("{}", output);
    Ok(())
}
