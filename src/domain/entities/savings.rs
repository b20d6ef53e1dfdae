use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::{savings_budgets, savings_expenses, savings_incomes};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = savings_expenses)]
pub struct SavingsExpenseEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub per_month: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = savings_expenses)]
pub struct InsertSavingsExpenseEntity {
    pub user_id: Uuid,
    pub category: String,
    pub per_month: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = savings_incomes)]
pub struct SavingsIncomeEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub source: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = savings_incomes)]
pub struct InsertSavingsIncomeEntity {
    pub user_id: Uuid,
    pub source: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, Queryable, Selectable)]
#[diesel(table_name = savings_budgets)]
pub struct SavingsBudgetEntity {
    pub user_id: Uuid,
    pub monthly_budget: f64,
    pub updated_at: DateTime<Utc>,
}
