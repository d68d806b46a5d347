//! Users service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    auth::{AuthService, Passwords},
    database::Db,
    domain::{
        carts::models::CartData,
        users::{
            data::{Credentials, IssuedToken, NewUser},
            errors::UsersServiceError,
            records::UserUuid,
            repository::{PgUsersRepository, UserRow},
            validation::validate_signup,
        },
    },
};

#[derive(Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
    passwords: Passwords,
    auth: Arc<dyn AuthService>,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db, passwords: Passwords, auth: Arc<dyn AuthService>) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
            passwords,
            auth,
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn signup(&self, user: NewUser) -> Result<IssuedToken, UsersServiceError> {
        let signup = validate_signup(
            user.username.as_deref(),
            user.email.as_deref(),
            user.password.as_deref(),
        )
        .map_err(UsersServiceError::Invalid)?;

        if self
            .repository
            .find_user_by_email(self.db.pool(), &signup.email)
            .await?
            .is_some()
        {
            return Err(UsersServiceError::AlreadyExists);
        }

        let password = self.passwords.hash(&signup.password)?;
        let cart_data = CartData::empty();

        // A concurrent signup for the same email trips the unique index and
        // surfaces as `AlreadyExists` through the sqlx error conversion.
        let created = self
            .repository
            .create_user(
                self.db.pool(),
                UserRow {
                    uuid: UserUuid::new(),
                    name: &signup.username,
                    email: &signup.email,
                    password: &password,
                    cart_data: &cart_data,
                },
            )
            .await?;

        info!(user = %created.uuid, "user signed up");

        let token = self.auth.issue_token(created.uuid)?;

        Ok(IssuedToken {
            user: created.uuid,
            token,
        })
    }

    async fn login(&self, credentials: Credentials) -> Result<IssuedToken, UsersServiceError> {
        let user = self
            .repository
            .find_user_by_email(self.db.pool(), &credentials.email)
            .await?
            .ok_or(UsersServiceError::WrongCredentials)?;

        if !self.passwords.verify(&credentials.password, &user.password) {
            return Err(UsersServiceError::WrongCredentials);
        }

        let token = self.auth.issue_token(user.uuid)?;

        Ok(IssuedToken {
            user: user.uuid,
            token,
        })
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Register a user with an empty cart and issue an identity token.
    async fn signup(&self, user: NewUser) -> Result<IssuedToken, UsersServiceError>;

    /// Check credentials and issue an identity token.
    async fn login(&self, credentials: Credentials) -> Result<IssuedToken, UsersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        auth::{AuthService, JwtAuthService, PasswordStorage, TokenSecret},
        domain::carts::{CartsService, models::CART_SLOTS},
        test::{TEST_TOKEN_SECRET, TestContext},
    };

    use super::*;

    fn new_user(email: &str, password: &str) -> NewUser {
        NewUser {
            username: Some("a".to_owned()),
            email: Some(email.to_owned()),
            password: Some(password.to_owned()),
        }
    }

    #[tokio::test]
    async fn signup_issues_a_token_for_the_stored_user() -> TestResult {
        let ctx = TestContext::new().await;

        let issued = ctx.users.signup(new_user("a@x.com", "secret")).await?;

        let verifier = JwtAuthService::new(TokenSecret::new(TEST_TOKEN_SECRET));

        assert_eq!(verifier.authenticate(&issued.token)?, issued.user);

        Ok(())
    }

    #[tokio::test]
    async fn signup_initialises_every_cart_slot_to_zero() -> TestResult {
        let ctx = TestContext::new().await;

        let issued = ctx.users.signup(new_user("a@x.com", "secret")).await?;
        let cart = ctx.carts.get_cart(issued.user).await?;

        assert_eq!(cart.len(), usize::from(CART_SLOTS));
        assert_eq!(cart.total_quantity(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn second_signup_with_the_same_email_conflicts() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.users.signup(new_user("a@x.com", "secret")).await?;

        let second = ctx.users.signup(new_user("a@x.com", "another")).await;

        assert!(matches!(second, Err(UsersServiceError::AlreadyExists)));

        Ok(())
    }

    #[tokio::test]
    async fn short_password_is_rejected_before_storage() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx.users.signup(new_user("a@x.com", "12345")).await;

        let Err(UsersServiceError::Invalid(violations)) = result else {
            return Err("expected a validation error".into());
        };

        assert_eq!(violations.first().map(|v| v.path), Some("password"));

        Ok(())
    }

    #[tokio::test]
    async fn login_accepts_the_signup_password_only() -> TestResult {
        let ctx = TestContext::new().await;

        let issued = ctx.users.signup(new_user("a@x.com", "secret")).await?;

        let ok = ctx
            .users
            .login(Credentials {
                email: "a@x.com".to_owned(),
                password: "secret".to_owned(),
            })
            .await?;

        let wrong = ctx
            .users
            .login(Credentials {
                email: "a@x.com".to_owned(),
                password: "secret!".to_owned(),
            })
            .await;

        assert_eq!(ok.user, issued.user);
        assert!(matches!(wrong, Err(UsersServiceError::WrongCredentials)));

        Ok(())
    }

    #[tokio::test]
    async fn plaintext_storage_persists_the_submitted_password() -> TestResult {
        let ctx = TestContext::with_password_storage(PasswordStorage::Plaintext).await;

        ctx.users.signup(new_user("a@x.com", "secret")).await?;

        let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE email = $1")
            .bind("a@x.com")
            .fetch_one(ctx.db.pool())
            .await?;

        assert_eq!(stored, "secret");

        Ok(())
    }
}
