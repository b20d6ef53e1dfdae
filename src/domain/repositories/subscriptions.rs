use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::subscriptions::{
    InsertSubscriptionEntity, SubscriptionEntity, UpdateSubscriptionChangeset,
};
use crate::domain::value_objects::subscriptions::SubscriptionListFilter;

/// All reads are scoped to the owning user and `is_active = true`; inactive
/// rows are invisible through this interface.
#[async_trait]
#[automock]
pub trait SubscriptionRepository {
    async fn create(&self, entity: InsertSubscriptionEntity) -> Result<SubscriptionEntity>;

    async fn find_active_by_id(
        &self,
        subscription_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<SubscriptionEntity>>;

    async fn list_active(
        &self,
        user_id: Uuid,
        filter: SubscriptionListFilter,
    ) -> Result<Vec<SubscriptionEntity>>;

    async fn count_active(&self, user_id: Uuid, filter: SubscriptionListFilter) -> Result<i64>;

    async fn list_all_active(&self, user_id: Uuid) -> Result<Vec<SubscriptionEntity>>;

    async fn update(
        &self,
        subscription_id: Uuid,
        changeset: UpdateSubscriptionChangeset,
    ) -> Result<SubscriptionEntity>;

    async fn soft_delete(&self, subscription_id: Uuid) -> Result<()>;
}
