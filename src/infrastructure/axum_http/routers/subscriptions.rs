use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
};
use uuid::Uuid;

use crate::application::usecases::subscriptions::SubscriptionUseCase;
use crate::domain::repositories::savings_expenses::SavingsExpenseRepository;
use crate::domain::repositories::subscriptions::SubscriptionRepository;
use crate::domain::value_objects::subscriptions::{
    CreateSubscriptionModel, SubscriptionListQuery, UpdateSubscriptionModel,
};
use crate::infrastructure::axum_http::auth::AuthUser;
use crate::infrastructure::axum_http::error_responses::{
    created_response, message_response, ok_response,
};
use crate::infrastructure::postgres::postgres_connection::PgPoolSquad;
use crate::infrastructure::postgres::repositories::savings_expenses::SavingsExpensePostgres;
use crate::infrastructure::postgres::repositories::subscriptions::SubscriptionPostgres;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let subscription_repository = SubscriptionPostgres::new(Arc::clone(&db_pool));
    let savings_expense_repository = SavingsExpensePostgres::new(Arc::clone(&db_pool));
    let subscription_usecase = SubscriptionUseCase::new(
        Arc::new(subscription_repository),
        Arc::new(savings_expense_repository),
    );

    Router::new()
        .route("/", post(create))
        .route("/", get(list))
        .route("/summary/overview", get(summary))
        .route(
            "/:subscription_id",
            get(get_by_id).put(update).delete(remove),
        )
        .with_state(Arc::new(subscription_usecase))
}

pub async fn create<S, E>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<S, E>>>,
    auth: AuthUser,
    Json(model): Json<CreateSubscriptionModel>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    E: SavingsExpenseRepository + Send + Sync + 'static,
{
    match subscription_usecase.create(auth.user_id, model).await {
        Ok(subscription) => created_response(subscription),
        Err(err) => err.into_response(),
    }
}

pub async fn list<S, E>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<S, E>>>,
    auth: AuthUser,
    Query(query): Query<SubscriptionListQuery>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    E: SavingsExpenseRepository + Send + Sync + 'static,
{
    match subscription_usecase.list(auth.user_id, query).await {
        Ok(listing) => ok_response(listing),
        Err(err) => err.into_response(),
    }
}

pub async fn summary<S, E>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<S, E>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    E: SavingsExpenseRepository + Send + Sync + 'static,
{
    match subscription_usecase.summary(auth.user_id).await {
        Ok(summary) => ok_response(summary),
        Err(err) => err.into_response(),
    }
}

pub async fn get_by_id<S, E>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<S, E>>>,
    auth: AuthUser,
    Path(subscription_id): Path<Uuid>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    E: SavingsExpenseRepository + Send + Sync + 'static,
{
    match subscription_usecase.get(auth.user_id, subscription_id).await {
        Ok(subscription) => ok_response(subscription),
        Err(err) => err.into_response(),
    }
}

pub async fn update<S, E>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<S, E>>>,
    auth: AuthUser,
    Path(subscription_id): Path<Uuid>,
    Json(model): Json<UpdateSubscriptionModel>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    E: SavingsExpenseRepository + Send + Sync + 'static,
{
    match subscription_usecase
        .update(auth.user_id, subscription_id, model)
        .await
    {
        Ok(subscription) => ok_response(subscription),
        Err(err) => err.into_response(),
    }
}

pub async fn remove<S, E>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<S, E>>>,
    auth: AuthUser,
    Path(subscription_id): Path<Uuid>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    E: SavingsExpenseRepository + Send + Sync + 'static,
{
    match subscription_usecase
        .delete(auth.user_id, subscription_id)
        .await
    {
        Ok(()) => message_response("Subscription deleted successfully"),
        Err(err) => err.into_response(),
    }
}
