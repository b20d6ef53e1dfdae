use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::entities::savings::{InsertSavingsExpenseEntity, InsertSavingsIncomeEntity};
use crate::domain::repositories::savings_budgets::SavingsBudgetRepository;
use crate::domain::repositories::savings_expenses::SavingsExpenseRepository;
use crate::domain::repositories::savings_incomes::SavingsIncomeRepository;
use crate::domain::value_objects::enums::income_sources::IncomeSource;
use crate::domain::value_objects::enums::savings_categories::SavingsCategory;
use crate::domain::value_objects::savings::{
    IncomeSummaryModel, InsertSavingsExpenseModel, InsertSavingsIncomeModel, SavingsBudgetModel,
    SavingsExpenseModel, SavingsExpenseSummaryModel, SavingsIncomeModel, SavingsSummaryModel,
    SetSavingsBudgetModel, UpdateSavingsExpenseModel, UpdateSavingsIncomeModel,
};
use crate::domain::value_objects::validation::FieldError;

#[derive(Debug, Error)]
pub enum SavingsError {
    #[error("Validation errors")]
    Validation(Vec<FieldError>),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SavingsError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            SavingsError::Validation(_) => StatusCode::BAD_REQUEST,
            SavingsError::NotFound(_) => StatusCode::NOT_FOUND,
            SavingsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, SavingsError>;

pub struct SavingsUseCase<E, I, B>
where
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    B: SavingsBudgetRepository + Send + Sync + 'static,
{
    expense_repo: Arc<E>,
    income_repo: Arc<I>,
    budget_repo: Arc<B>,
}

impl<E, I, B> SavingsUseCase<E, I, B>
where
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    B: SavingsBudgetRepository + Send + Sync + 'static,
{
    pub fn new(expense_repo: Arc<E>, income_repo: Arc<I>, budget_repo: Arc<B>) -> Self {
        Self {
            expense_repo,
            income_repo,
            budget_repo,
        }
    }

    pub async fn summary(&self, user_id: Uuid) -> UseCaseResult<SavingsSummaryModel> {
        let incomes = self.income_repo.list(user_id).await.map_err(|err| {
            error!(%user_id, db_error = ?err, "savings: failed to list incomes");
            SavingsError::Internal(err)
        })?;
        let expenses = self.expense_repo.list(user_id).await.map_err(|err| {
            error!(%user_id, db_error = ?err, "savings: failed to list expenses");
            SavingsError::Internal(err)
        })?;
        let monthly_budget = self.budget_repo.get(user_id).await.map_err(|err| {
            error!(%user_id, db_error = ?err, "savings: failed to load budget");
            SavingsError::Internal(err)
        })?;

        let income_total = incomes.iter().map(|income| income.amount).sum();
        let expense_total = expenses.iter().map(|expense| expense.per_month).sum();

        Ok(SavingsSummaryModel {
            income: IncomeSummaryModel {
                total: income_total,
                breakdown: incomes.into_iter().map(SavingsIncomeModel::from).collect(),
            },
            expenses: SavingsExpenseSummaryModel {
                total: expense_total,
                breakdown: expenses
                    .into_iter()
                    .map(SavingsExpenseModel::from)
                    .collect(),
            },
            budget: SavingsBudgetModel {
                monthly_budget: monthly_budget.unwrap_or(0.0),
            },
        })
    }

    pub async fn list_incomes(&self, user_id: Uuid) -> UseCaseResult<Vec<SavingsIncomeModel>> {
        let incomes = self.income_repo.list(user_id).await.map_err(|err| {
            error!(%user_id, db_error = ?err, "savings: failed to list incomes");
            SavingsError::Internal(err)
        })?;
        Ok(incomes.into_iter().map(SavingsIncomeModel::from).collect())
    }

    pub async fn create_income(
        &self,
        user_id: Uuid,
        model: InsertSavingsIncomeModel,
    ) -> UseCaseResult<SavingsIncomeModel> {
        let field_errors = model.validate();
        if !field_errors.is_empty() {
            warn!(%user_id, "savings: income create rejected by validation");
            return Err(SavingsError::Validation(field_errors));
        }

        let now = Utc::now();
        let created = self
            .income_repo
            .create(InsertSavingsIncomeEntity {
                user_id,
                source: model.source.to_string(),
                amount: model.amount,
                created_at: now,
                updated_at: now,
            })
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "savings: failed to create income");
                SavingsError::Internal(err)
            })?;

        info!(%user_id, income_id = %created.id, "savings: income created");
        Ok(SavingsIncomeModel::from(created))
    }

    pub async fn update_income(
        &self,
        user_id: Uuid,
        income_id: Uuid,
        model: UpdateSavingsIncomeModel,
    ) -> UseCaseResult<()> {
        let field_errors = model.validate();
        if !field_errors.is_empty() {
            warn!(%user_id, %income_id, "savings: income update rejected by validation");
            return Err(SavingsError::Validation(field_errors));
        }

        let existing = self
            .income_repo
            .find_by_id(income_id, user_id)
            .await
            .map_err(|err| {
                error!(%user_id, %income_id, db_error = ?err, "savings: failed to load income");
                SavingsError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%user_id, %income_id, "savings: income not found");
                SavingsError::NotFound("Income")
            })?;

        let source = model
            .source
            .unwrap_or_else(|| IncomeSource::from_str(&existing.source));
        let amount = model.amount.unwrap_or(existing.amount);

        self.income_repo
            .update(income_id, source, amount)
            .await
            .map_err(|err| {
                error!(%user_id, %income_id, db_error = ?err, "savings: failed to update income");
                SavingsError::Internal(err)
            })?;

        info!(%user_id, %income_id, "savings: income updated");
        Ok(())
    }

    pub async fn delete_income(&self, user_id: Uuid, income_id: Uuid) -> UseCaseResult<()> {
        self.income_repo
            .find_by_id(income_id, user_id)
            .await
            .map_err(|err| {
                error!(%user_id, %income_id, db_error = ?err, "savings: failed to load income");
                SavingsError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%user_id, %income_id, "savings: income not found");
                SavingsError::NotFound("Income")
            })?;

        self.income_repo.delete(income_id).await.map_err(|err| {
            error!(%user_id, %income_id, db_error = ?err, "savings: failed to delete income");
            SavingsError::Internal(err)
        })?;

        info!(%user_id, %income_id, "savings: income deleted");
        Ok(())
    }

    pub async fn list_expenses(&self, user_id: Uuid) -> UseCaseResult<Vec<SavingsExpenseModel>> {
        let expenses = self.expense_repo.list(user_id).await.map_err(|err| {
            error!(%user_id, db_error = ?err, "savings: failed to list expenses");
            SavingsError::Internal(err)
        })?;
        Ok(expenses
            .into_iter()
            .map(SavingsExpenseModel::from)
            .collect())
    }

    pub async fn create_expense(
        &self,
        user_id: Uuid,
        model: InsertSavingsExpenseModel,
    ) -> UseCaseResult<SavingsExpenseModel> {
        let field_errors = model.validate();
        if !field_errors.is_empty() {
            warn!(%user_id, "savings: expense create rejected by validation");
            return Err(SavingsError::Validation(field_errors));
        }

        let now = Utc::now();
        let created = self
            .expense_repo
            .create(InsertSavingsExpenseEntity {
                user_id,
                category: model.category.to_string(),
                per_month: model.per_month,
                created_at: now,
                updated_at: now,
            })
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "savings: failed to create expense");
                SavingsError::Internal(err)
            })?;

        info!(%user_id, expense_id = %created.id, "savings: expense created");
        Ok(SavingsExpenseModel::from(created))
    }

    pub async fn update_expense(
        &self,
        user_id: Uuid,
        expense_id: Uuid,
        model: UpdateSavingsExpenseModel,
    ) -> UseCaseResult<()> {
        let field_errors = model.validate();
        if !field_errors.is_empty() {
            warn!(%user_id, %expense_id, "savings: expense update rejected by validation");
            return Err(SavingsError::Validation(field_errors));
        }

        let existing = self
            .expense_repo
            .find_by_id(expense_id, user_id)
            .await
            .map_err(|err| {
                error!(%user_id, %expense_id, db_error = ?err, "savings: failed to load expense");
                SavingsError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%user_id, %expense_id, "savings: expense not found");
                SavingsError::NotFound("Expense")
            })?;

        let category = model
            .category
            .unwrap_or_else(|| SavingsCategory::from_str(&existing.category));
        let per_month = model.per_month.unwrap_or(existing.per_month);

        self.expense_repo
            .update(expense_id, category, per_month)
            .await
            .map_err(|err| {
                error!(%user_id, %expense_id, db_error = ?err, "savings: failed to update expense");
                SavingsError::Internal(err)
            })?;

        info!(%user_id, %expense_id, "savings: expense updated");
        Ok(())
    }

    pub async fn delete_expense(&self, user_id: Uuid, expense_id: Uuid) -> UseCaseResult<()> {
        self.expense_repo
            .find_by_id(expense_id, user_id)
            .await
            .map_err(|err| {
                error!(%user_id, %expense_id, db_error = ?err, "savings: failed to load expense");
                SavingsError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%user_id, %expense_id, "savings: expense not found");
                SavingsError::NotFound("Expense")
            })?;

        self.expense_repo.delete(expense_id).await.map_err(|err| {
            error!(%user_id, %expense_id, db_error = ?err, "savings: failed to delete expense");
            SavingsError::Internal(err)
        })?;

        info!(%user_id, %expense_id, "savings: expense deleted");
        Ok(())
    }

    pub async fn get_budget(&self, user_id: Uuid) -> UseCaseResult<SavingsBudgetModel> {
        let monthly_budget = self.budget_repo.get(user_id).await.map_err(|err| {
            error!(%user_id, db_error = ?err, "savings: failed to load budget");
            SavingsError::Internal(err)
        })?;

        Ok(SavingsBudgetModel {
            monthly_budget: monthly_budget.unwrap_or(0.0),
        })
    }

    pub async fn set_budget(
        &self,
        user_id: Uuid,
        model: SetSavingsBudgetModel,
    ) -> UseCaseResult<SavingsBudgetModel> {
        let field_errors = model.validate();
        if !field_errors.is_empty() {
            warn!(%user_id, "savings: budget rejected by validation");
            return Err(SavingsError::Validation(field_errors));
        }

        self.budget_repo
            .set(user_id, model.monthly_budget)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "savings: failed to store budget");
                SavingsError::Internal(err)
            })?;

        info!(%user_id, monthly_budget = model.monthly_budget, "savings: budget updated");
        Ok(SavingsBudgetModel {
            monthly_budget: model.monthly_budget,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::savings::{SavingsExpenseEntity, SavingsIncomeEntity};
    use crate::domain::repositories::savings_budgets::MockSavingsBudgetRepository;
    use crate::domain::repositories::savings_expenses::MockSavingsExpenseRepository;
    use crate::domain::repositories::savings_incomes::MockSavingsIncomeRepository;
    use mockall::predicate::eq;

    fn income(user_id: Uuid, source: IncomeSource, amount: f64) -> SavingsIncomeEntity {
        let now = Utc::now();
        SavingsIncomeEntity {
            id: Uuid::new_v4(),
            user_id,
            source: source.to_string(),
            amount,
            created_at: now,
            updated_at: now,
        }
    }

    fn expense(user_id: Uuid, category: SavingsCategory, per_month: f64) -> SavingsExpenseEntity {
        let now = Utc::now();
        SavingsExpenseEntity {
            id: Uuid::new_v4(),
            user_id,
            category: category.to_string(),
            per_month,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn summary_totals_income_expenses_and_budget() {
        let user_id = Uuid::new_v4();

        let mut expense_repo = MockSavingsExpenseRepository::new();
        let mut income_repo = MockSavingsIncomeRepository::new();
        let mut budget_repo = MockSavingsBudgetRepository::new();

        income_repo.expect_list().with(eq(user_id)).returning(move |_| {
            let incomes = vec![
                income(user_id, IncomeSource::Salary, 50000.0),
                income(user_id, IncomeSource::Freelance, 8000.0),
            ];
            Box::pin(async move { Ok(incomes) })
        });
        expense_repo.expect_list().with(eq(user_id)).returning(move |_| {
            let expenses = vec![
                expense(user_id, SavingsCategory::Rent, 15000.0),
                expense(user_id, SavingsCategory::Entertainment, 499.0),
            ];
            Box::pin(async move { Ok(expenses) })
        });
        budget_repo
            .expect_get()
            .with(eq(user_id))
            .returning(|_| Box::pin(async { Ok(Some(30000.0)) }));

        let usecase = SavingsUseCase::new(
            Arc::new(expense_repo),
            Arc::new(income_repo),
            Arc::new(budget_repo),
        );

        let summary = usecase.summary(user_id).await.unwrap();

        assert_eq!(summary.income.total, 58000.0);
        assert_eq!(summary.expenses.total, 15499.0);
        assert_eq!(summary.budget.monthly_budget, 30000.0);
        assert_eq!(summary.income.breakdown.len(), 2);
        assert_eq!(summary.expenses.breakdown[1].per_year, 499.0 * 12.0);
    }

    #[tokio::test]
    async fn updating_someone_elses_income_is_not_found() {
        let expense_repo = MockSavingsExpenseRepository::new();
        let mut income_repo = MockSavingsIncomeRepository::new();
        let budget_repo = MockSavingsBudgetRepository::new();

        income_repo
            .expect_find_by_id()
            .returning(|_, _| Box::pin(async { Ok(None) }));
        income_repo.expect_update().times(0);

        let usecase = SavingsUseCase::new(
            Arc::new(expense_repo),
            Arc::new(income_repo),
            Arc::new(budget_repo),
        );

        let result = usecase
            .update_income(
                Uuid::new_v4(),
                Uuid::new_v4(),
                UpdateSavingsIncomeModel {
                    amount: Some(100.0),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(SavingsError::NotFound("Income"))));
    }

    #[tokio::test]
    async fn negative_budget_is_rejected() {
        let expense_repo = MockSavingsExpenseRepository::new();
        let income_repo = MockSavingsIncomeRepository::new();
        let mut budget_repo = MockSavingsBudgetRepository::new();
        budget_repo.expect_set().times(0);

        let usecase = SavingsUseCase::new(
            Arc::new(expense_repo),
            Arc::new(income_repo),
            Arc::new(budget_repo),
        );

        let result = usecase
            .set_budget(
                Uuid::new_v4(),
                SetSavingsBudgetModel {
                    monthly_budget: -5.0,
                },
            )
            .await;

        assert!(matches!(result, Err(SavingsError::Validation(_))));
    }
}
