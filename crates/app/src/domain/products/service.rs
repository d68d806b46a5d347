//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::products::{
        data::NewProduct,
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.repository.list_products(self.db.pool()).await?)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.lock_product_ids(&mut tx).await?;

        let id = self.repository.next_product_id(&mut tx).await?;

        let created = self
            .repository
            .create_product(&mut tx, id, &product)
            .await?;

        tx.commit().await?;

        info!(product = %created.id, "product created");

        Ok(created)
    }

    async fn remove_product(&self, product: ProductId) -> Result<u64, ProductsServiceError> {
        let removed = self
            .repository
            .delete_product(self.db.pool(), product)
            .await?;

        info!(product = %product, removed, "product removed");

        Ok(removed)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, ordered by id.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Store a product under the next sequential id.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Remove the product with the given id, returning how many rows went.
    ///
    /// Removing an unknown id is not an error.
    async fn remove_product(&self, product: ProductId) -> Result<u64, ProductsServiceError>;
}
