use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

/// Read side only; expense CRUD lives outside this service.
#[async_trait]
#[automock]
pub trait ExpenseRepository {
    async fn total_amount(&self, user_id: Uuid) -> Result<f64>;
}
