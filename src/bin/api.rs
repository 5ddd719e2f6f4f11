//! collablite API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use collablite::api::{self, ApiError, Config};
use collablite::db::{Database, DbError, SqliteDatabase};
use collablite::graphql::schema_sdl;
use collablite::paths::get_db_path;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(collablite::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(collablite::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(collablite::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "collablite-api")]
#[command(author, version, about = "collablite GraphQL server", long_about = None)]
struct Cli {
    /// Host address to bind to (default: COLLABLITE_HOST or 0.0.0.0)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (default: COLLABLITE_PORT or 4000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Database file path (default: COLLABLITE_DB or ~/.local/share/collablite/collablite.db)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Print the GraphQL schema and exit
    #[arg(long)]
    print_schema: bool,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    if cli.print_schema {
        println!("{}", schema_sdl::<SqliteDatabase>());
        return Ok(());
    }

    let mut config = Config::new();
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    let db_path = cli.db.unwrap_or_else(get_db_path);
    println!("Opening database at {:?}", db_path);

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&db_path).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    println!("Database migrations complete");

    api::run(config, db).await?;

    Ok(())
}
