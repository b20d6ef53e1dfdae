use std::sync::Arc;

use axum::{Router, extract::State, response::IntoResponse, routing::get};

use crate::application::usecases::dashboard::DashboardUseCase;
use crate::domain::repositories::budgets::BudgetRepository;
use crate::domain::repositories::expenses::ExpenseRepository;
use crate::domain::repositories::savings_budgets::SavingsBudgetRepository;
use crate::domain::repositories::savings_expenses::SavingsExpenseRepository;
use crate::domain::repositories::savings_incomes::SavingsIncomeRepository;
use crate::infrastructure::axum_http::auth::AuthUser;
use crate::infrastructure::axum_http::error_responses::ok_response;
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::repositories::budgets::BudgetPostgres;
use crate::infrastructure::postgres::repositories::expenses::ExpensePostgres;
use crate::infrastructure::postgres::repositories::savings_budgets::SavingsBudgetPostgres;
use crate::infrastructure::postgres::repositories::savings_expenses::SavingsExpensePostgres;
use crate::infrastructure::postgres::repositories::savings_incomes::SavingsIncomePostgres;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let budget_repository = BudgetPostgres::new(Arc::clone(&db_pool));
    let expense_repository = ExpensePostgres::new(Arc::clone(&db_pool));
    let savings_expense_repository = SavingsExpensePostgres::new(Arc::clone(&db_pool));
    let savings_income_repository = SavingsIncomePostgres::new(Arc::clone(&db_pool));
    let savings_budget_repository = SavingsBudgetPostgres::new(Arc::clone(&db_pool));
    let dashboard_usecase = DashboardUseCase::new(
        Arc::new(budget_repository),
        Arc::new(expense_repository),
        Arc::new(savings_expense_repository),
        Arc::new(savings_income_repository),
        Arc::new(savings_budget_repository),
    );

    Router::new()
        .route("/overview", get(overview))
        .with_state(Arc::new(dashboard_usecase))
}

pub async fn overview<B, X, E, I, S>(
    State(dashboard_usecase): State<Arc<DashboardUseCase<B, X, E, I, S>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    B: BudgetRepository + Send + Sync + 'static,
    X: ExpenseRepository + Send + Sync + 'static,
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    S: SavingsBudgetRepository + Send + Sync + 'static,
{
    match dashboard_usecase.overview(auth.user_id).await {
        Ok(overview) => ok_response(overview),
        Err(err) => err.into_response(),
    }
}
