use clap::Args;
use shopfront_app::database::{self, Db};

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: MigrateArgs) -> Result<(), String> {
    let db = database::connect(&args.database_url)
        .await
        .map(Db::new)
        .map_err(|error| format!("could not reach the database: {error}"))?;

    let outcome = database::migrate(db.pool())
        .await
        .map_err(|error| format!("migration failed: {error}"));

    db.close().await;

    outcome.inspect(|()| eprintln!("schema is up to date"))
}
