use clap::Args;
use shopfront_app::{
    auth::{AuthService, JwtAuthService, TokenSecret},
    domain::users::records::UserUuid,
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct IssueTokenArgs {
    /// UUID of the user the token identifies
    #[arg(long)]
    user_uuid: Uuid,

    /// Secret the API server verifies tokens with
    #[arg(long, env = "TOKEN_SECRET", hide_env_values = true)]
    token_secret: String,
}

pub(crate) fn run(args: &IssueTokenArgs) -> Result<(), String> {
    let secret = TokenSecret::new(args.token_secret.clone());

    if secret.is_empty() {
        return Err("--token-secret must not be empty".to_owned());
    }

    let token = JwtAuthService::new(secret)
        .issue_token(UserUuid::from_uuid(args.user_uuid))
        .map_err(|error| format!("failed to sign token: {error}"))?;

    // Only the token goes to stdout so it can be piped into an auth-token header.
    println!("{token}");

    Ok(())
}
