//! Carts Repository

use sqlx::{PgExecutor, Postgres, Transaction, query, query_scalar, types::Json};

use crate::domain::{carts::models::CartData, users::records::UserUuid};

const GET_CART_SQL: &str = include_str!("sql/get_cart.sql");
const LOCK_CART_SQL: &str = include_str!("sql/lock_cart.sql");
const SAVE_CART_SQL: &str = include_str!("sql/save_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_cart<'e, E>(
        &self,
        executor: E,
        user: UserUuid,
    ) -> Result<CartData, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        query_scalar::<Postgres, Json<CartData>>(GET_CART_SQL)
            .bind(user.into_uuid())
            .fetch_one(executor)
            .await
            .map(|cart| cart.0)
    }

    /// Read the cart and hold the user row lock until `tx` ends.
    pub(crate) async fn lock_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<CartData, sqlx::Error> {
        query_scalar::<Postgres, Json<CartData>>(LOCK_CART_SQL)
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
            .map(|cart| cart.0)
    }

    pub(crate) async fn save_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        cart: &CartData,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SAVE_CART_SQL)
            .bind(user.into_uuid())
            .bind(Json(cart))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
