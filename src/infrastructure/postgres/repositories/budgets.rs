use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, dsl::sum, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::repositories::budgets::BudgetRepository;
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::schema::budgets;

pub struct BudgetPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl BudgetPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl BudgetRepository for BudgetPostgres {
    async fn total_active_amount(&self, user_id: Uuid) -> Result<f64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let total = budgets::table
            .filter(budgets::user_id.eq(user_id))
            .filter(budgets::is_active.eq(true))
            .select(sum(budgets::amount))
            .get_result::<Option<f64>>(&mut conn)?;

        Ok(total.unwrap_or(0.0))
    }
}
