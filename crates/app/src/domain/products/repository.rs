//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, PgExecutor, Postgres, Row, Transaction, postgres::PgRow, query, query_as,
    query_scalar,
};

use crate::domain::products::{
    data::NewProduct,
    records::{ProductId, ProductRecord},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const LOCK_PRODUCT_IDS_SQL: &str = include_str!("sql/lock_product_ids.sql");
const NEXT_PRODUCT_ID_SQL: &str = include_str!("sql/next_product_id.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<ProductRecord>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(executor)
            .await
    }

    /// Serialise id assignment until `tx` ends.
    pub(crate) async fn lock_product_ids(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<(), sqlx::Error> {
        query(LOCK_PRODUCT_IDS_SQL).execute(&mut **tx).await?;

        Ok(())
    }

    /// Highest stored id plus one, or 1 for an empty catalog.
    pub(crate) async fn next_product_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<ProductId, sqlx::Error> {
        query_scalar::<Postgres, i64>(NEXT_PRODUCT_ID_SQL)
            .fetch_one(&mut **tx)
            .await
            .map(ProductId::new)
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: ProductId,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(id.get())
            .bind(&product.name)
            .bind(&product.image1)
            .bind(&product.image2)
            .bind(&product.image3)
            .bind(&product.category)
            .bind(product.new_price)
            .bind(product.old_price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product<'e, E>(
        &self,
        executor: E,
        id: ProductId,
    ) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(id.get())
            .execute(executor)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            image1: row.try_get("image1")?,
            image2: row.try_get("image2")?,
            image3: row.try_get("image3")?,
            category: row.try_get("category")?,
            new_price: row.try_get("new_price")?,
            old_price: row.try_get("old_price")?,
            date: row.try_get::<SqlxTimestamp, _>("date")?.to_jiff(),
            available: row.try_get("available")?,
        })
    }
}
