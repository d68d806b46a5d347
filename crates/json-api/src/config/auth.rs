//! Auth Config

use clap::Args;
use shopfront_app::auth::PasswordStorage;

/// Identity token and password storage settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Shared secret used to sign and verify identity tokens
    #[arg(long, env = "TOKEN_SECRET", hide_env_values = true)]
    pub token_secret: String,

    /// How new passwords are stored (argon2, plaintext)
    ///
    /// `plaintext` only exists for compatibility with rows written by older
    /// deployments.
    #[arg(long, env = "PASSWORD_STORAGE", value_enum, default_value_t = PasswordStorage::Argon2)]
    pub password_storage: PasswordStorage,
}
