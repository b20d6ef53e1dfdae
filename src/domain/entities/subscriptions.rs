use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::subscriptions;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = subscriptions)]
pub struct SubscriptionEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub plan: String,
    pub total_spend: f64,
    pub duration: String,
    pub recurring_payment: String,
    pub color: String,
    pub next_payment_date: Option<DateTime<Utc>>,
    pub category: String,
    pub link_to_savings_plan: bool,
    pub monthly_amount: f64,
    pub savings_expense_id: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = subscriptions)]
pub struct InsertSubscriptionEntity {
    pub user_id: Uuid,
    pub name: String,
    pub plan: String,
    pub total_spend: f64,
    pub duration: String,
    pub recurring_payment: String,
    pub color: String,
    pub next_payment_date: Option<DateTime<Utc>>,
    pub category: String,
    pub link_to_savings_plan: bool,
    pub monthly_amount: f64,
    pub savings_expense_id: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; `None` fields are left untouched. The double-`Option`
/// columns distinguish "leave as is" from "set to NULL".
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = subscriptions)]
pub struct UpdateSubscriptionChangeset {
    pub name: Option<String>,
    pub plan: Option<String>,
    pub total_spend: Option<f64>,
    pub duration: Option<String>,
    pub recurring_payment: Option<String>,
    pub color: Option<String>,
    pub next_payment_date: Option<Option<DateTime<Utc>>>,
    pub category: Option<String>,
    pub link_to_savings_plan: Option<bool>,
    pub monthly_amount: Option<f64>,
    pub savings_expense_id: Option<Option<Uuid>>,
    pub updated_at: Option<DateTime<Utc>>,
}
