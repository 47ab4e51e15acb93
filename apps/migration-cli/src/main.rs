use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};
use tracing::error;
use volunteer_backend::config::DbKind;
use volunteer_backend::connect_db;

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

/// Runs schema migrations against the Postgres database described by
/// `DATABASE_URL` or the `DB_*` variables.
#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Volunteer backend database migration tool")]
struct Args {
    #[arg(value_enum)]
    command: Command,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,volunteer_backend=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let conn = match connect_db(DbKind::Postgres).await {
        Ok(conn) => conn,
        Err(e) => {
            error!(error = %e, "could not connect to database");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, args.command.into()).await {
        error!(error = %e, "migration failed");
        std::process::exit(1);
    }
}
