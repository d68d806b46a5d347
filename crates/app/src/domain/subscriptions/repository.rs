//! Subscriptions Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgExecutor, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::subscriptions::records::SubscriptionRecord;

const FIND_SUBSCRIPTION_SQL: &str = include_str!("sql/find_subscription.sql");
const CREATE_SUBSCRIPTION_SQL: &str = include_str!("sql/create_subscription.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSubscriptionsRepository;

impl PgSubscriptionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_subscription<'e, E>(
        &self,
        executor: E,
        email: &str,
    ) -> Result<Option<SubscriptionRecord>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        query_as::<Postgres, SubscriptionRecord>(FIND_SUBSCRIPTION_SQL)
            .bind(email)
            .fetch_optional(executor)
            .await
    }

    pub(crate) async fn create_subscription<'e, E>(
        &self,
        executor: E,
        email: &str,
    ) -> Result<SubscriptionRecord, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        query_as::<Postgres, SubscriptionRecord>(CREATE_SUBSCRIPTION_SQL)
            .bind(email)
            .fetch_one(executor)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for SubscriptionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            email: row.try_get("email")?,
            date: row.try_get::<SqlxTimestamp, _>("date")?.to_jiff(),
        })
    }
}
