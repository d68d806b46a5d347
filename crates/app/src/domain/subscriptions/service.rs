//! Subscriptions service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::subscriptions::{
        errors::SubscriptionsServiceError,
        records::{SubscriptionRecord, is_subscribable},
        repository::PgSubscriptionsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgSubscriptionsService {
    db: Db,
    repository: PgSubscriptionsRepository,
}

impl PgSubscriptionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgSubscriptionsRepository::new(),
        }
    }
}

#[async_trait]
impl SubscriptionsService for PgSubscriptionsService {
    async fn subscribe(
        &self,
        email: String,
    ) -> Result<SubscriptionRecord, SubscriptionsServiceError> {
        if !is_subscribable(&email) {
            return Err(SubscriptionsServiceError::InvalidEmail);
        }

        if self
            .repository
            .find_subscription(self.db.pool(), &email)
            .await?
            .is_some()
        {
            return Err(SubscriptionsServiceError::AlreadySubscribed);
        }

        let created = self
            .repository
            .create_subscription(self.db.pool(), &email)
            .await?;

        info!("new newsletter subscription");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait SubscriptionsService: Send + Sync {
    /// Register `email` for the newsletter, once.
    async fn subscribe(
        &self,
        email: String,
    ) -> Result<SubscriptionRecord, SubscriptionsServiceError>;
}
