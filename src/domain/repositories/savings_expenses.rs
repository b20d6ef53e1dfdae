use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::savings::{InsertSavingsExpenseEntity, SavingsExpenseEntity};
use crate::domain::value_objects::enums::savings_categories::SavingsCategory;

#[async_trait]
#[automock]
pub trait SavingsExpenseRepository {
    async fn create(&self, entity: InsertSavingsExpenseEntity) -> Result<SavingsExpenseEntity>;

    async fn find_by_id(
        &self,
        expense_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<SavingsExpenseEntity>>;

    async fn list(&self, user_id: Uuid) -> Result<Vec<SavingsExpenseEntity>>;

    async fn update(
        &self,
        expense_id: Uuid,
        category: SavingsCategory,
        per_month: f64,
    ) -> Result<()>;

    async fn delete(&self, expense_id: Uuid) -> Result<()>;

    async fn total_per_month(&self, user_id: Uuid) -> Result<f64>;
}
