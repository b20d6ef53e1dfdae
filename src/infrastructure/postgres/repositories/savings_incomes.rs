use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, delete, dsl::sum, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::savings::{InsertSavingsIncomeEntity, SavingsIncomeEntity};
use crate::domain::repositories::savings_incomes::SavingsIncomeRepository;
use crate::domain::value_objects::enums::income_sources::IncomeSource;
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::schema::savings_incomes;

pub struct SavingsIncomePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SavingsIncomePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SavingsIncomeRepository for SavingsIncomePostgres {
    async fn create(&self, entity: InsertSavingsIncomeEntity) -> Result<SavingsIncomeEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(savings_incomes::table)
            .values(&entity)
            .returning(SavingsIncomeEntity::as_returning())
            .get_result::<SavingsIncomeEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(
        &self,
        income_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<SavingsIncomeEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = savings_incomes::table
            .filter(savings_incomes::id.eq(income_id))
            .filter(savings_incomes::user_id.eq(user_id))
            .select(SavingsIncomeEntity::as_select())
            .first::<SavingsIncomeEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<SavingsIncomeEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = savings_incomes::table
            .filter(savings_incomes::user_id.eq(user_id))
            .order(savings_incomes::created_at.asc())
            .select(SavingsIncomeEntity::as_select())
            .load::<SavingsIncomeEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(&self, income_id: Uuid, source: IncomeSource, amount: f64) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(savings_incomes::table)
            .filter(savings_incomes::id.eq(income_id))
            .set((
                savings_incomes::source.eq(source.to_string()),
                savings_incomes::amount.eq(amount),
                savings_incomes::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn delete(&self, income_id: Uuid) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        delete(savings_incomes::table)
            .filter(savings_incomes::id.eq(income_id))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn total_amount(&self, user_id: Uuid) -> Result<f64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let total = savings_incomes::table
            .filter(savings_incomes::user_id.eq(user_id))
            .select(sum(savings_incomes::amount))
            .get_result::<Option<f64>>(&mut conn)?;

        Ok(total.unwrap_or(0.0))
    }
}
