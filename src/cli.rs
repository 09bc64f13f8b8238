use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use restodb_application::prelude as flows;
use restodb_core::usecases;
use restodb_db_sqlite::Connections;

#[derive(Parser)]
#[command(version, about = "Restaurant directory with reviews, reports and moderated proposals")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Register a new user account
    CreateUser {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "")]
        name: String,
        /// Mark the account as staff
        #[arg(long)]
        staff: bool,
        /// Allow the user to moderate all restaurant requests
        #[arg(long)]
        global_admin: bool,
    },
}

pub async fn run() -> Result<()> {
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    restodb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            restodb_webserver::run(
                connections,
                cfg.webserver.enable_cors,
                env!("CARGO_PKG_VERSION"),
            )
            .await;
        }
        Command::CreateUser {
            email,
            password,
            name,
            staff,
            global_admin,
        } => {
            let id = flows::create_user(
                &connections,
                usecases::UserRegistration {
                    email: email.clone(),
                    password,
                    name,
                    is_staff: staff,
                    is_global_admin: global_admin,
                },
            )?;
            log::info!("Created user {email} with id {id}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_create_user() {
        let args = Args::parse_from([
            "restodb",
            "--db-url",
            ":memory:",
            "create-user",
            "--email",
            "admin@example.com",
            "--password",
            "secret",
            "--global-admin",
        ]);
        assert_eq!(args.db_url.as_deref(), Some(":memory:"));
        match args.command {
            Some(Command::CreateUser {
                email,
                staff,
                global_admin,
                name,
                ..
            }) => {
                assert_eq!(email, "admin@example.com");
                assert!(global_admin);
                assert!(!staff);
                assert!(name.is_empty());
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn serve_by_default() {
        let args = Args::parse_from(["restodb", "--enable-cors"]);
        assert!(args.enable_cors);
        assert!(args.command.is_none());
    }
}
