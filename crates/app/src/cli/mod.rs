//! Operator commands for a storefront deployment.

use clap::{Parser, Subcommand};

mod issue_token;
mod migrate;

#[derive(Debug, Parser)]
#[command(name = "shopfront-app", about = "Shopfront operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending schema migrations
    Migrate(migrate::MigrateArgs),

    /// Print an identity token for an existing user
    IssueToken(issue_token::IssueTokenArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Command::Migrate(args) => migrate::run(args).await,
            Command::IssueToken(args) => issue_token::run(&args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_token_requires_a_uuid() {
        let parsed = Cli::try_parse_from([
            "shopfront-app",
            "issue-token",
            "--user-uuid",
            "not-a-uuid",
            "--token-secret",
            "secret",
        ]);

        assert!(parsed.is_err(), "expected an invalid uuid to be rejected");
    }

    #[test]
    fn migrate_reads_database_url_flag() {
        let parsed = Cli::try_parse_from([
            "shopfront-app",
            "migrate",
            "--database-url",
            "postgres://localhost/shopfront",
        ]);

        assert!(matches!(
            parsed.map(|cli| cli.command),
            Ok(Command::Migrate(_))
        ));
    }
}
