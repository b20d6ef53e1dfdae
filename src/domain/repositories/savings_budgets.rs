use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

#[async_trait]
#[automock]
pub trait SavingsBudgetRepository {
    async fn get(&self, user_id: Uuid) -> Result<Option<f64>>;

    async fn set(&self, user_id: Uuid, monthly_budget: f64) -> Result<()>;
}
