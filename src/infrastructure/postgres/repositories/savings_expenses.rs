use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, delete, dsl::sum, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::savings::{InsertSavingsExpenseEntity, SavingsExpenseEntity};
use crate::domain::repositories::savings_expenses::SavingsExpenseRepository;
use crate::domain::value_objects::enums::savings_categories::SavingsCategory;
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::schema::savings_expenses;

pub struct SavingsExpensePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SavingsExpensePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SavingsExpenseRepository for SavingsExpensePostgres {
    async fn create(&self, entity: InsertSavingsExpenseEntity) -> Result<SavingsExpenseEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(savings_expenses::table)
            .values(&entity)
            .returning(SavingsExpenseEntity::as_returning())
            .get_result::<SavingsExpenseEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(
        &self,
        expense_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<SavingsExpenseEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = savings_expenses::table
            .filter(savings_expenses::id.eq(expense_id))
            .filter(savings_expenses::user_id.eq(user_id))
            .select(SavingsExpenseEntity::as_select())
            .first::<SavingsExpenseEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<SavingsExpenseEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = savings_expenses::table
            .filter(savings_expenses::user_id.eq(user_id))
            .order(savings_expenses::created_at.asc())
            .select(SavingsExpenseEntity::as_select())
            .load::<SavingsExpenseEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        expense_id: Uuid,
        category: SavingsCategory,
        per_month: f64,
    ) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(savings_expenses::table)
            .filter(savings_expenses::id.eq(expense_id))
            .set((
                savings_expenses::category.eq(category.to_string()),
                savings_expenses::per_month.eq(per_month),
                savings_expenses::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn delete(&self, expense_id: Uuid) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        delete(savings_expenses::table)
            .filter(savings_expenses::id.eq(expense_id))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn total_per_month(&self, user_id: Uuid) -> Result<f64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let total = savings_expenses::table
            .filter(savings_expenses::user_id.eq(user_id))
            .select(sum(savings_expenses::per_month))
            .get_result::<Option<f64>>(&mut conn)?;

        Ok(total.unwrap_or(0.0))
    }
}
