use std::sync::Arc;

use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use crate::domain::repositories::budgets::BudgetRepository;
use crate::domain::repositories::expenses::ExpenseRepository;
use crate::domain::repositories::savings_budgets::SavingsBudgetRepository;
use crate::domain::repositories::savings_expenses::SavingsExpenseRepository;
use crate::domain::repositories::savings_incomes::SavingsIncomeRepository;
use crate::domain::value_objects::dashboard::DashboardOverviewModel;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl DashboardError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub struct DashboardUseCase<B, X, E, I, S>
where
    B: BudgetRepository + Send + Sync + 'static,
    X: ExpenseRepository + Send + Sync + 'static,
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    S: SavingsBudgetRepository + Send + Sync + 'static,
{
    budget_repo: Arc<B>,
    expense_repo: Arc<X>,
    savings_expense_repo: Arc<E>,
    savings_income_repo: Arc<I>,
    savings_budget_repo: Arc<S>,
}

impl<B, X, E, I, S> DashboardUseCase<B, X, E, I, S>
where
    B: BudgetRepository + Send + Sync + 'static,
    X: ExpenseRepository + Send + Sync + 'static,
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    S: SavingsBudgetRepository + Send + Sync + 'static,
{
    pub fn new(
        budget_repo: Arc<B>,
        expense_repo: Arc<X>,
        savings_expense_repo: Arc<E>,
        savings_income_repo: Arc<I>,
        savings_budget_repo: Arc<S>,
    ) -> Self {
        Self {
            budget_repo,
            expense_repo,
            savings_expense_repo,
            savings_income_repo,
            savings_budget_repo,
        }
    }

    pub async fn overview(
        &self,
        user_id: Uuid,
    ) -> std::result::Result<DashboardOverviewModel, DashboardError> {
        let budget_total = self
            .budget_repo
            .total_active_amount(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "dashboard: failed to total budgets");
                DashboardError::Internal(err)
            })?;
        let expense_total = self.expense_repo.total_amount(user_id).await.map_err(|err| {
            error!(%user_id, db_error = ?err, "dashboard: failed to total expenses");
            DashboardError::Internal(err)
        })?;
        let savings_expense_total = self
            .savings_expense_repo
            .total_per_month(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "dashboard: failed to total savings expenses");
                DashboardError::Internal(err)
            })?;
        let income_total = self
            .savings_income_repo
            .total_amount(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "dashboard: failed to total incomes");
                DashboardError::Internal(err)
            })?;
        let savings_budget = self
            .savings_budget_repo
            .get(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "dashboard: failed to load savings budget");
                DashboardError::Internal(err)
            })?
            .unwrap_or(0.0);

        Ok(build_overview(
            budget_total,
            expense_total,
            income_total,
            savings_expense_total,
            savings_budget,
        ))
    }
}

fn build_overview(
    budget_total: f64,
    expense_total: f64,
    income_total: f64,
    savings_expense_total: f64,
    savings_budget: f64,
) -> DashboardOverviewModel {
    DashboardOverviewModel {
        total_budget: budget_total + savings_budget,
        total_expenses: expense_total,
        total_income: income_total,
        savings_expenses: savings_expense_total,
        monthly_savings: income_total - (expense_total + savings_expense_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::budgets::MockBudgetRepository;
    use crate::domain::repositories::expenses::MockExpenseRepository;
    use crate::domain::repositories::savings_budgets::MockSavingsBudgetRepository;
    use crate::domain::repositories::savings_expenses::MockSavingsExpenseRepository;
    use crate::domain::repositories::savings_incomes::MockSavingsIncomeRepository;
    use mockall::predicate::eq;

    #[test]
    fn overview_combines_budgets_and_nets_savings() {
        let overview = build_overview(10000.0, 4000.0, 50000.0, 1500.0, 30000.0);

        assert_eq!(overview.total_budget, 40000.0);
        assert_eq!(overview.total_expenses, 4000.0);
        assert_eq!(overview.total_income, 50000.0);
        assert_eq!(overview.savings_expenses, 1500.0);
        assert_eq!(overview.monthly_savings, 44500.0);
    }

    #[test]
    fn overview_can_go_negative_when_overspending() {
        let overview = build_overview(0.0, 6000.0, 5000.0, 2000.0, 0.0);
        assert_eq!(overview.monthly_savings, -3000.0);
    }

    #[tokio::test]
    async fn overview_reads_every_store_for_the_same_user() {
        let user_id = Uuid::new_v4();

        let mut budget_repo = MockBudgetRepository::new();
        let mut expense_repo = MockExpenseRepository::new();
        let mut savings_expense_repo = MockSavingsExpenseRepository::new();
        let mut savings_income_repo = MockSavingsIncomeRepository::new();
        let mut savings_budget_repo = MockSavingsBudgetRepository::new();

        budget_repo
            .expect_total_active_amount()
            .with(eq(user_id))
            .returning(|_| Box::pin(async { Ok(12000.0) }));
        expense_repo
            .expect_total_amount()
            .with(eq(user_id))
            .returning(|_| Box::pin(async { Ok(3500.0) }));
        savings_expense_repo
            .expect_total_per_month()
            .with(eq(user_id))
            .returning(|_| Box::pin(async { Ok(499.0) }));
        savings_income_repo
            .expect_total_amount()
            .with(eq(user_id))
            .returning(|_| Box::pin(async { Ok(58000.0) }));
        savings_budget_repo
            .expect_get()
            .with(eq(user_id))
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = DashboardUseCase::new(
            Arc::new(budget_repo),
            Arc::new(expense_repo),
            Arc::new(savings_expense_repo),
            Arc::new(savings_income_repo),
            Arc::new(savings_budget_repo),
        );

        let overview = usecase.overview(user_id).await.unwrap();

        assert_eq!(overview.total_budget, 12000.0);
        assert_eq!(overview.monthly_savings, 58000.0 - (3500.0 + 499.0));
    }
}
