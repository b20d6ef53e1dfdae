use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::subscriptions::SubscriptionEntity;
use crate::domain::value_objects::enums::{
    recurring_payments::RecurringPayment, sort_order::SortOrder,
    subscription_categories::SubscriptionCategory,
};
use crate::domain::value_objects::validation::{
    FieldError, check_non_negative, check_required_text,
};

pub const DEFAULT_COLOR: &str = "blue";
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionModel {
    pub id: Uuid,
    pub name: String,
    pub plan: String,
    pub total_spend: f64,
    pub duration: String,
    pub recurring_payment: RecurringPayment,
    pub color: String,
    pub next_payment_date: Option<DateTime<Utc>>,
    pub category: SubscriptionCategory,
    pub link_to_savings_plan: bool,
    pub monthly_amount: f64,
    pub savings_expense_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SubscriptionEntity> for SubscriptionModel {
    fn from(value: SubscriptionEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            plan: value.plan,
            total_spend: value.total_spend,
            duration: value.duration,
            recurring_payment: RecurringPayment::from_str(&value.recurring_payment),
            color: value.color,
            next_payment_date: value.next_payment_date,
            category: SubscriptionCategory::from_str(&value.category),
            link_to_savings_plan: value.link_to_savings_plan,
            monthly_amount: value.monthly_amount,
            savings_expense_id: value.savings_expense_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionModel {
    pub name: String,
    pub plan: String,
    pub total_spend: f64,
    pub duration: String,
    pub recurring_payment: RecurringPayment,
    pub color: Option<String>,
    pub category: Option<SubscriptionCategory>,
    pub next_payment_date: Option<DateTime<Utc>>,
    pub link_to_savings_plan: Option<bool>,
    pub monthly_amount: Option<f64>,
}

impl CreateSubscriptionModel {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_required_text(&mut errors, "name", &self.name, 100);
        check_required_text(&mut errors, "plan", &self.plan, 50);
        check_required_text(&mut errors, "duration", &self.duration, 50);
        check_non_negative(&mut errors, "totalSpend", self.total_spend);
        if let Some(monthly_amount) = self.monthly_amount {
            check_non_negative(&mut errors, "monthlyAmount", monthly_amount);
        }
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionModel {
    pub name: Option<String>,
    pub plan: Option<String>,
    pub total_spend: Option<f64>,
    pub duration: Option<String>,
    pub recurring_payment: Option<RecurringPayment>,
    pub color: Option<String>,
    pub category: Option<SubscriptionCategory>,
    /// Absent leaves the stored date untouched; an explicit JSON `null`
    /// clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub next_payment_date: Option<Option<DateTime<Utc>>>,
    pub link_to_savings_plan: Option<bool>,
    pub monthly_amount: Option<f64>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

impl UpdateSubscriptionModel {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Some(name) = self.name.as_deref() {
            check_required_text(&mut errors, "name", name, 100);
        }
        if let Some(plan) = self.plan.as_deref() {
            check_required_text(&mut errors, "plan", plan, 50);
        }
        if let Some(duration) = self.duration.as_deref() {
            check_required_text(&mut errors, "duration", duration, 50);
        }
        if let Some(total_spend) = self.total_spend {
            check_non_negative(&mut errors, "totalSpend", total_spend);
        }
        if let Some(monthly_amount) = self.monthly_amount {
            check_non_negative(&mut errors, "monthlyAmount", monthly_amount);
        }
        errors
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SubscriptionSortBy {
    #[default]
    CreatedAt,
    Name,
    TotalSpend,
    NextPaymentDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub recurring_payment: Option<String>,
    pub sort_by: Option<SubscriptionSortBy>,
    pub sort_order: Option<SortOrder>,
}

/// Normalized listing filter handed to the repository. The "All" sentinel
/// accepted on the wire is already resolved to `None` here.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionListFilter {
    pub category: Option<SubscriptionCategory>,
    pub search: Option<String>,
    pub recurring_payment: Option<RecurringPayment>,
    pub sort_by: SubscriptionSortBy,
    pub sort_order: SortOrder,
    pub limit: i64,
    pub offset: i64,
}

impl SubscriptionListQuery {
    pub fn page(&self) -> u32 {
        self.page.filter(|page| *page >= 1).unwrap_or(1)
    }

    pub fn limit(&self) -> u32 {
        self.limit
            .filter(|limit| *limit >= 1)
            .unwrap_or(DEFAULT_PAGE_LIMIT)
    }

    pub fn to_filter(&self) -> SubscriptionListFilter {
        let category = self
            .category
            .as_deref()
            .filter(|value| *value != "All")
            .map(SubscriptionCategory::from_str);
        let recurring_payment = self
            .recurring_payment
            .as_deref()
            .filter(|value| *value != "All")
            .map(RecurringPayment::from_str);

        SubscriptionListFilter {
            category,
            search: self.search.clone().filter(|value| !value.is_empty()),
            recurring_payment,
            sort_by: self.sort_by.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
            limit: i64::from(self.limit()),
            offset: i64::from(self.page() - 1) * i64::from(self.limit()),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationModel {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: i64,
    pub items_per_page: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionListModel {
    pub subscriptions: Vec<SubscriptionModel>,
    pub pagination: PaginationModel,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionOverviewModel {
    pub total_spend: f64,
    pub subscription_count: usize,
    pub recurring_count: usize,
    pub monthly_recurring_cost: f64,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdownModel {
    pub total_spend: f64,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummaryModel {
    pub overview: SubscriptionOverviewModel,
    pub category_breakdown: HashMap<String, CategoryBreakdownModel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_page_numbers_do_not_overflow_the_offset() {
        let query = SubscriptionListQuery {
            page: Some(u32::MAX),
            limit: Some(10),
            ..Default::default()
        };

        let filter = query.to_filter();

        assert_eq!(filter.limit, 10);
        assert_eq!(filter.offset, (i64::from(u32::MAX) - 1) * 10);
    }

    #[test]
    fn zero_page_and_limit_fall_back_to_defaults() {
        let query = SubscriptionListQuery {
            page: Some(0),
            limit: Some(0),
            ..Default::default()
        };

        let filter = query.to_filter();

        assert_eq!(filter.offset, 0);
        assert_eq!(filter.limit, i64::from(DEFAULT_PAGE_LIMIT));
    }

    #[test]
    fn update_payload_distinguishes_null_date_from_absent() {
        let cleared: UpdateSubscriptionModel =
            serde_json::from_str(r#"{"nextPaymentDate": null}"#).unwrap();
        assert_eq!(cleared.next_payment_date, Some(None));

        let untouched: UpdateSubscriptionModel = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(untouched.next_payment_date, None);

        let set: UpdateSubscriptionModel =
            serde_json::from_str(r#"{"nextPaymentDate": "2026-09-01T00:00:00Z"}"#).unwrap();
        assert!(matches!(set.next_payment_date, Some(Some(_))));
    }
}
