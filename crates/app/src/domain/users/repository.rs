//! Users Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgExecutor, Postgres, Row, postgres::PgRow, query_as, types::Json};
use uuid::Uuid;

use crate::domain::{
    carts::models::CartData,
    users::records::{UserRecord, UserUuid},
};

const FIND_USER_BY_EMAIL_SQL: &str = include_str!("sql/find_user_by_email.sql");
const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");

/// Row values for a user about to be inserted.
#[derive(Debug, Clone)]
pub(crate) struct UserRow<'a> {
    pub(crate) uuid: UserUuid,
    pub(crate) name: &'a str,
    pub(crate) email: &'a str,
    pub(crate) password: &'a str,
    pub(crate) cart_data: &'a CartData,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgUsersRepository;

impl PgUsersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_user_by_email<'e, E>(
        &self,
        executor: E,
        email: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        query_as::<Postgres, UserRecord>(FIND_USER_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(executor)
            .await
    }

    pub(crate) async fn create_user<'e, E>(
        &self,
        executor: E,
        user: UserRow<'_>,
    ) -> Result<UserRecord, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        query_as::<Postgres, UserRecord>(CREATE_USER_SQL)
            .bind(user.uuid.into_uuid())
            .bind(user.name)
            .bind(user.email)
            .bind(user.password)
            .bind(Json(user.cart_data))
            .fetch_one(executor)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get::<Uuid, _>("uuid")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            cart_data: row.try_get::<Json<CartData>, _>("cart_data")?.0,
            date: row.try_get::<SqlxTimestamp, _>("date")?.to_jiff(),
        })
    }
}
