use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post, put},
};
use uuid::Uuid;

use crate::application::usecases::savings::SavingsUseCase;
use crate::domain::repositories::savings_budgets::SavingsBudgetRepository;
use crate::domain::repositories::savings_expenses::SavingsExpenseRepository;
use crate::domain::repositories::savings_incomes::SavingsIncomeRepository;
use crate::domain::value_objects::savings::{
    InsertSavingsExpenseModel, InsertSavingsIncomeModel, SetSavingsBudgetModel,
    UpdateSavingsExpenseModel, UpdateSavingsIncomeModel,
};
use crate::infrastructure::axum_http::auth::AuthUser;
use crate::infrastructure::axum_http::error_responses::{
    created_response, message_response, ok_response,
};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::repositories::savings_budgets::SavingsBudgetPostgres;
use crate::infrastructure::postgres::repositories::savings_expenses::SavingsExpensePostgres;
use crate::infrastructure::postgres::repositories::savings_incomes::SavingsIncomePostgres;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let savings_expense_repository = SavingsExpensePostgres::new(Arc::clone(&db_pool));
    let savings_income_repository = SavingsIncomePostgres::new(Arc::clone(&db_pool));
    let savings_budget_repository = SavingsBudgetPostgres::new(Arc::clone(&db_pool));
    let savings_usecase = SavingsUseCase::new(
        Arc::new(savings_expense_repository),
        Arc::new(savings_income_repository),
        Arc::new(savings_budget_repository),
    );

    Router::new()
        .route("/summary", get(summary))
        .route("/income", get(list_incomes))
        .route("/income", post(create_income))
        .route(
            "/income/:income_id",
            put(update_income).delete(delete_income),
        )
        .route("/expenses", get(list_expenses))
        .route("/expenses", post(create_expense))
        .route(
            "/expenses/:expense_id",
            put(update_expense).delete(delete_expense),
        )
        .route("/budget", get(get_budget).post(set_budget))
        .with_state(Arc::new(savings_usecase))
}

pub async fn summary<E, I, B>(
    State(savings_usecase): State<Arc<SavingsUseCase<E, I, B>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    B: SavingsBudgetRepository + Send + Sync + 'static,
{
    match savings_usecase.summary(auth.user_id).await {
        Ok(summary) => ok_response(summary),
        Err(err) => err.into_response(),
    }
}

pub async fn list_incomes<E, I, B>(
    State(savings_usecase): State<Arc<SavingsUseCase<E, I, B>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    B: SavingsBudgetRepository + Send + Sync + 'static,
{
    match savings_usecase.list_incomes(auth.user_id).await {
        Ok(incomes) => ok_response(incomes),
        Err(err) => err.into_response(),
    }
}

pub async fn create_income<E, I, B>(
    State(savings_usecase): State<Arc<SavingsUseCase<E, I, B>>>,
    auth: AuthUser,
    Json(model): Json<InsertSavingsIncomeModel>,
) -> impl IntoResponse
where
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    B: SavingsBudgetRepository + Send + Sync + 'static,
{
    match savings_usecase.create_income(auth.user_id, model).await {
        Ok(income) => created_response(income),
        Err(err) => err.into_response(),
    }
}

pub async fn update_income<E, I, B>(
    State(savings_usecase): State<Arc<SavingsUseCase<E, I, B>>>,
    auth: AuthUser,
    Path(income_id): Path<Uuid>,
    Json(model): Json<UpdateSavingsIncomeModel>,
) -> impl IntoResponse
where
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    B: SavingsBudgetRepository + Send + Sync + 'static,
{
    match savings_usecase
        .update_income(auth.user_id, income_id, model)
        .await
    {
        Ok(()) => message_response("Income updated successfully"),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_income<E, I, B>(
    State(savings_usecase): State<Arc<SavingsUseCase<E, I, B>>>,
    auth: AuthUser,
    Path(income_id): Path<Uuid>,
) -> impl IntoResponse
where
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    B: SavingsBudgetRepository + Send + Sync + 'static,
{
    match savings_usecase.delete_income(auth.user_id, income_id).await {
        Ok(()) => message_response("Income deleted successfully"),
        Err(err) => err.into_response(),
    }
}

pub async fn list_expenses<E, I, B>(
    State(savings_usecase): State<Arc<SavingsUseCase<E, I, B>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    B: SavingsBudgetRepository + Send + Sync + 'static,
{
    match savings_usecase.list_expenses(auth.user_id).await {
        Ok(expenses) => ok_response(expenses),
        Err(err) => err.into_response(),
    }
}

pub async fn create_expense<E, I, B>(
    State(savings_usecase): State<Arc<SavingsUseCase<E, I, B>>>,
    auth: AuthUser,
    Json(model): Json<InsertSavingsExpenseModel>,
) -> impl IntoResponse
where
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    B: SavingsBudgetRepository + Send + Sync + 'static,
{
    match savings_usecase.create_expense(auth.user_id, model).await {
        Ok(expense) => created_response(expense),
        Err(err) => err.into_response(),
    }
}

pub async fn update_expense<E, I, B>(
    State(savings_usecase): State<Arc<SavingsUseCase<E, I, B>>>,
    auth: AuthUser,
    Path(expense_id): Path<Uuid>,
    Json(model): Json<UpdateSavingsExpenseModel>,
) -> impl IntoResponse
where
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    B: SavingsBudgetRepository + Send + Sync + 'static,
{
    match savings_usecase
        .update_expense(auth.user_id, expense_id, model)
        .await
    {
        Ok(()) => message_response("Expense updated successfully"),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_expense<E, I, B>(
    State(savings_usecase): State<Arc<SavingsUseCase<E, I, B>>>,
    auth: AuthUser,
    Path(expense_id): Path<Uuid>,
) -> impl IntoResponse
where
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    B: SavingsBudgetRepository + Send + Sync + 'static,
{
    match savings_usecase.delete_expense(auth.user_id, expense_id).await {
        Ok(()) => message_response("Expense deleted successfully"),
        Err(err) => err.into_response(),
    }
}

pub async fn get_budget<E, I, B>(
    State(savings_usecase): State<Arc<SavingsUseCase<E, I, B>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    B: SavingsBudgetRepository + Send + Sync + 'static,
{
    match savings_usecase.get_budget(auth.user_id).await {
        Ok(budget) => ok_response(budget),
        Err(err) => err.into_response(),
    }
}

pub async fn set_budget<E, I, B>(
    State(savings_usecase): State<Arc<SavingsUseCase<E, I, B>>>,
    auth: AuthUser,
    Json(model): Json<SetSavingsBudgetModel>,
) -> impl IntoResponse
where
    E: SavingsExpenseRepository + Send + Sync + 'static,
    I: SavingsIncomeRepository + Send + Sync + 'static,
    B: SavingsBudgetRepository + Send + Sync + 'static,
{
    match savings_usecase.set_budget(auth.user_id, model).await {
        Ok(budget) => ok_response(budget),
        Err(err) => err.into_response(),
    }
}
