use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::savings::{InsertSavingsIncomeEntity, SavingsIncomeEntity};
use crate::domain::value_objects::enums::income_sources::IncomeSource;

#[async_trait]
#[automock]
pub trait SavingsIncomeRepository {
    async fn create(&self, entity: InsertSavingsIncomeEntity) -> Result<SavingsIncomeEntity>;

    async fn find_by_id(
        &self,
        income_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<SavingsIncomeEntity>>;

    async fn list(&self, user_id: Uuid) -> Result<Vec<SavingsIncomeEntity>>;

    async fn update(&self, income_id: Uuid, source: IncomeSource, amount: f64) -> Result<()>;

    async fn delete(&self, income_id: Uuid) -> Result<()>;

    async fn total_amount(&self, user_id: Uuid) -> Result<f64>;
}
