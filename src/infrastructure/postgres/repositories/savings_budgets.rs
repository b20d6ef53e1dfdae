use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::repositories::savings_budgets::SavingsBudgetRepository;
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::schema::savings_budgets;

pub struct SavingsBudgetPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SavingsBudgetPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SavingsBudgetRepository for SavingsBudgetPostgres {
    async fn get(&self, user_id: Uuid) -> Result<Option<f64>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = savings_budgets::table
            .filter(savings_budgets::user_id.eq(user_id))
            .select(savings_budgets::monthly_budget)
            .first::<f64>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn set(&self, user_id: Uuid, monthly_budget: f64) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let now = Utc::now();
        insert_into(savings_budgets::table)
            .values((
                savings_budgets::user_id.eq(user_id),
                savings_budgets::monthly_budget.eq(monthly_budget),
                savings_budgets::updated_at.eq(now),
            ))
            .on_conflict(savings_budgets::user_id)
            .do_update()
            .set((
                savings_budgets::monthly_budget.eq(monthly_budget),
                savings_budgets::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        Ok(())
    }
}
