use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

/// Read side only; budget CRUD lives outside this service.
#[async_trait]
#[automock]
pub trait BudgetRepository {
    async fn total_active_amount(&self, user_id: Uuid) -> Result<f64>;
}
