use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::subscriptions::{
    InsertSubscriptionEntity, SubscriptionEntity, UpdateSubscriptionChangeset,
};
use crate::domain::repositories::subscriptions::SubscriptionRepository;
use crate::domain::value_objects::enums::sort_order::SortOrder;
use crate::domain::value_objects::subscriptions::{SubscriptionListFilter, SubscriptionSortBy};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::schema::subscriptions;

pub struct SubscriptionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SubscriptionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }

    fn filtered(
        user_id: Uuid,
        filter: &SubscriptionListFilter,
    ) -> subscriptions::BoxedQuery<'static, diesel::pg::Pg> {
        let mut query = subscriptions::table
            .filter(subscriptions::user_id.eq(user_id))
            .filter(subscriptions::is_active.eq(true))
            .into_boxed();

        if let Some(category) = filter.category {
            query = query.filter(subscriptions::category.eq(category.to_string()));
        }
        if let Some(search) = filter.search.as_deref() {
            query = query.filter(subscriptions::name.ilike(format!("%{}%", search)));
        }
        if let Some(recurring_payment) = filter.recurring_payment {
            query =
                query.filter(subscriptions::recurring_payment.eq(recurring_payment.to_string()));
        }

        query
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionPostgres {
    async fn create(&self, entity: InsertSubscriptionEntity) -> Result<SubscriptionEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(subscriptions::table)
            .values(&entity)
            .returning(SubscriptionEntity::as_returning())
            .get_result::<SubscriptionEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_active_by_id(
        &self,
        subscription_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = subscriptions::table
            .filter(subscriptions::id.eq(subscription_id))
            .filter(subscriptions::user_id.eq(user_id))
            .filter(subscriptions::is_active.eq(true))
            .select(SubscriptionEntity::as_select())
            .first::<SubscriptionEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list_active(
        &self,
        user_id: Uuid,
        filter: SubscriptionListFilter,
    ) -> Result<Vec<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = Self::filtered(user_id, &filter);
        query = match (filter.sort_by, filter.sort_order) {
            (SubscriptionSortBy::CreatedAt, SortOrder::Asc) => {
                query.order(subscriptions::created_at.asc())
            }
            (SubscriptionSortBy::CreatedAt, SortOrder::Desc) => {
                query.order(subscriptions::created_at.desc())
            }
            (SubscriptionSortBy::Name, SortOrder::Asc) => query.order(subscriptions::name.asc()),
            (SubscriptionSortBy::Name, SortOrder::Desc) => query.order(subscriptions::name.desc()),
            (SubscriptionSortBy::TotalSpend, SortOrder::Asc) => {
                query.order(subscriptions::total_spend.asc())
            }
            (SubscriptionSortBy::TotalSpend, SortOrder::Desc) => {
                query.order(subscriptions::total_spend.desc())
            }
            (SubscriptionSortBy::NextPaymentDate, SortOrder::Asc) => {
                query.order(subscriptions::next_payment_date.asc())
            }
            (SubscriptionSortBy::NextPaymentDate, SortOrder::Desc) => {
                query.order(subscriptions::next_payment_date.desc())
            }
        };

        let results = query
            .limit(filter.limit)
            .offset(filter.offset)
            .select(SubscriptionEntity::as_select())
            .load::<SubscriptionEntity>(&mut conn)?;

        Ok(results)
    }

    async fn count_active(&self, user_id: Uuid, filter: SubscriptionListFilter) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let total = Self::filtered(user_id, &filter)
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total)
    }

    async fn list_all_active(&self, user_id: Uuid) -> Result<Vec<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = subscriptions::table
            .filter(subscriptions::user_id.eq(user_id))
            .filter(subscriptions::is_active.eq(true))
            .select(SubscriptionEntity::as_select())
            .load::<SubscriptionEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        subscription_id: Uuid,
        changeset: UpdateSubscriptionChangeset,
    ) -> Result<SubscriptionEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(subscriptions::table)
            .filter(subscriptions::id.eq(subscription_id))
            .set(&changeset)
            .returning(SubscriptionEntity::as_returning())
            .get_result::<SubscriptionEntity>(&mut conn)?;

        Ok(result)
    }

    async fn soft_delete(&self, subscription_id: Uuid) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(subscriptions::table)
            .filter(subscriptions::id.eq(subscription_id))
            .set((
                subscriptions::is_active.eq(false),
                subscriptions::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(())
    }
}
