use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::savings::{SavingsExpenseEntity, SavingsIncomeEntity};
use crate::domain::value_objects::enums::{
    income_sources::IncomeSource, savings_categories::SavingsCategory,
};
use crate::domain::value_objects::validation::{FieldError, check_non_negative};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsExpenseModel {
    pub id: Uuid,
    pub category: SavingsCategory,
    pub per_month: f64,
    pub per_year: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SavingsExpenseEntity> for SavingsExpenseModel {
    fn from(value: SavingsExpenseEntity) -> Self {
        Self {
            id: value.id,
            category: SavingsCategory::from_str(&value.category),
            per_month: value.per_month,
            per_year: value.per_month * 12.0,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertSavingsExpenseModel {
    pub category: SavingsCategory,
    pub per_month: f64,
}

impl InsertSavingsExpenseModel {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_non_negative(&mut errors, "perMonth", self.per_month);
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSavingsExpenseModel {
    pub category: Option<SavingsCategory>,
    pub per_month: Option<f64>,
}

impl UpdateSavingsExpenseModel {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Some(per_month) = self.per_month {
            check_non_negative(&mut errors, "perMonth", per_month);
        }
        errors
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsIncomeModel {
    pub id: Uuid,
    pub source: IncomeSource,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SavingsIncomeEntity> for SavingsIncomeModel {
    fn from(value: SavingsIncomeEntity) -> Self {
        Self {
            id: value.id,
            source: IncomeSource::from_str(&value.source),
            amount: value.amount,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertSavingsIncomeModel {
    pub source: IncomeSource,
    pub amount: f64,
}

impl InsertSavingsIncomeModel {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_non_negative(&mut errors, "amount", self.amount);
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSavingsIncomeModel {
    pub source: Option<IncomeSource>,
    pub amount: Option<f64>,
}

impl UpdateSavingsIncomeModel {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Some(amount) = self.amount {
            check_non_negative(&mut errors, "amount", amount);
        }
        errors
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSavingsBudgetModel {
    pub monthly_budget: f64,
}

impl SetSavingsBudgetModel {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_non_negative(&mut errors, "monthlyBudget", self.monthly_budget);
        errors
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSummaryModel {
    pub total: f64,
    pub breakdown: Vec<SavingsIncomeModel>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsExpenseSummaryModel {
    pub total: f64,
    pub breakdown: Vec<SavingsExpenseModel>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsBudgetModel {
    pub monthly_budget: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSummaryModel {
    pub income: IncomeSummaryModel,
    pub expenses: SavingsExpenseSummaryModel,
    pub budget: SavingsBudgetModel,
}
