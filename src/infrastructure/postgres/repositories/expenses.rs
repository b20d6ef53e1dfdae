use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, dsl::sum, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::repositories::expenses::ExpenseRepository;
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::schema::expenses;

pub struct ExpensePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ExpensePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ExpenseRepository for ExpensePostgres {
    async fn total_amount(&self, user_id: Uuid) -> Result<f64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let total = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .select(sum(expenses::amount))
            .get_result::<Option<f64>>(&mut conn)?;

        Ok(total.unwrap_or(0.0))
    }
}
