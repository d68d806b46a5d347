//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{CartData, CartSlot},
            repository::PgCartsRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    repository: PgCartsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartsRepository::new(),
        }
    }

    async fn update_cart<F>(&self, user: UserUuid, update: F) -> Result<u32, CartsServiceError>
    where
        F: FnOnce(&mut CartData) -> u32 + Send,
    {
        let mut tx = self.db.begin().await?;

        let mut cart = self.repository.lock_cart(&mut tx, user).await?;

        let quantity = update(&mut cart);

        if self.repository.save_cart(&mut tx, user, &cart).await? == 0 {
            return Err(CartsServiceError::UserNotFound);
        }

        tx.commit().await?;

        Ok(quantity)
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, user: UserUuid) -> Result<CartData, CartsServiceError> {
        Ok(self.repository.get_cart(self.db.pool(), user).await?)
    }

    async fn add_to_cart(&self, user: UserUuid, slot: CartSlot) -> Result<u32, CartsServiceError> {
        self.update_cart(user, |cart| cart.increment(slot)).await
    }

    async fn remove_from_cart(
        &self,
        user: UserUuid,
        slot: CartSlot,
    ) -> Result<u32, CartsServiceError> {
        self.update_cart(user, |cart| cart.decrement(slot)).await
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the full slot map of a user's cart.
    async fn get_cart(&self, user: UserUuid) -> Result<CartData, CartsServiceError>;

    /// Add one unit to `slot`, returning the new quantity.
    async fn add_to_cart(&self, user: UserUuid, slot: CartSlot) -> Result<u32, CartsServiceError>;

    /// Remove one unit from `slot` (never below zero), returning the new quantity.
    async fn remove_from_cart(
        &self,
        user: UserUuid,
        slot: CartSlot,
    ) -> Result<u32, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::signup};

    use super::*;

    #[tokio::test]
    async fn add_and_remove_adjust_one_slot() -> TestResult {
        let ctx = TestContext::new().await;
        let user = signup(&ctx, "a@x.com").await?;
        let slot = CartSlot::try_from(5_i64)?;

        assert_eq!(ctx.carts.add_to_cart(user, slot).await?, 1);
        assert_eq!(ctx.carts.add_to_cart(user, slot).await?, 2);
        assert_eq!(ctx.carts.remove_from_cart(user, slot).await?, 1);

        let cart = ctx.carts.get_cart(user).await?;

        assert_eq!(cart.quantity(slot), 1);
        assert_eq!(cart.total_quantity(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn removing_from_an_empty_slot_stays_at_zero() -> TestResult {
        let ctx = TestContext::new().await;
        let user = signup(&ctx, "a@x.com").await?;

        assert_eq!(ctx.carts.remove_from_cart(user, CartSlot::LAST).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx.carts.add_to_cart(UserUuid::new(), CartSlot::FIRST).await;

        assert!(matches!(result, Err(CartsServiceError::UserNotFound)));

        Ok(())
    }
}
