use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::application::usecases::savings_linkage::{
    LinkAction, plan_create_link, plan_update_link_action,
};
use crate::domain::entities::savings::InsertSavingsExpenseEntity;
use crate::domain::entities::subscriptions::{
    InsertSubscriptionEntity, SubscriptionEntity, UpdateSubscriptionChangeset,
};
use crate::domain::repositories::savings_expenses::SavingsExpenseRepository;
use crate::domain::repositories::subscriptions::SubscriptionRepository;
use crate::domain::value_objects::enums::recurring_payments::RecurringPayment;
use crate::domain::value_objects::subscriptions::{
    CategoryBreakdownModel, CreateSubscriptionModel, DEFAULT_COLOR, PaginationModel,
    SubscriptionListModel, SubscriptionListQuery, SubscriptionModel, SubscriptionOverviewModel,
    SubscriptionSummaryModel, UpdateSubscriptionModel,
};
use crate::domain::value_objects::validation::FieldError;

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("Validation errors")]
    Validation(Vec<FieldError>),
    #[error("Subscription not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SubscriptionError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            SubscriptionError::Validation(_) => StatusCode::BAD_REQUEST,
            SubscriptionError::NotFound => StatusCode::NOT_FOUND,
            SubscriptionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, SubscriptionError>;

pub struct SubscriptionUseCase<S, E>
where
    S: SubscriptionRepository + Send + Sync + 'static,
    E: SavingsExpenseRepository + Send + Sync + 'static,
{
    subscription_repo: Arc<S>,
    savings_expense_repo: Arc<E>,
}

impl<S, E> SubscriptionUseCase<S, E>
where
    S: SubscriptionRepository + Send + Sync + 'static,
    E: SavingsExpenseRepository + Send + Sync + 'static,
{
    pub fn new(subscription_repo: Arc<S>, savings_expense_repo: Arc<E>) -> Self {
        Self {
            subscription_repo,
            savings_expense_repo,
        }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        model: CreateSubscriptionModel,
    ) -> UseCaseResult<SubscriptionModel> {
        let field_errors = model.validate();
        if !field_errors.is_empty() {
            warn!(
                %user_id,
                error_count = field_errors.len(),
                "subscriptions: create rejected by validation"
            );
            return Err(SubscriptionError::Validation(field_errors));
        }

        // Linked expense is written first so the new subscription can carry
        // its id from the start.
        let now = Utc::now();
        let savings_expense_id = match plan_create_link(&model) {
            Some((category, per_month)) => {
                let expense = self
                    .savings_expense_repo
                    .create(InsertSavingsExpenseEntity {
                        user_id,
                        category: category.to_string(),
                        per_month,
                        created_at: now,
                        updated_at: now,
                    })
                    .await
                    .map_err(|err| {
                        error!(
                            %user_id,
                            db_error = ?err,
                            "subscriptions: failed to create linked savings expense"
                        );
                        SubscriptionError::Internal(err)
                    })?;
                info!(
                    %user_id,
                    expense_id = %expense.id,
                    per_month,
                    "subscriptions: linked savings expense created"
                );
                Some(expense.id)
            }
            None => None,
        };

        let created = self
            .subscription_repo
            .create(InsertSubscriptionEntity {
                user_id,
                name: model.name,
                plan: model.plan,
                total_spend: model.total_spend,
                duration: model.duration,
                recurring_payment: model.recurring_payment.to_string(),
                color: model.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
                next_payment_date: model.next_payment_date,
                category: model.category.unwrap_or_default().to_string(),
                link_to_savings_plan: model.link_to_savings_plan.unwrap_or(false),
                monthly_amount: model.monthly_amount.unwrap_or(0.0),
                savings_expense_id,
                is_active: true,
                created_at: now,
                updated_at: now,
            })
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    db_error = ?err,
                    "subscriptions: failed to insert subscription"
                );
                SubscriptionError::Internal(err)
            })?;

        info!(
            %user_id,
            subscription_id = %created.id,
            linked = created.savings_expense_id.is_some(),
            "subscriptions: subscription created"
        );
        Ok(SubscriptionModel::from(created))
    }

    pub async fn list(
        &self,
        user_id: Uuid,
        query: SubscriptionListQuery,
    ) -> UseCaseResult<SubscriptionListModel> {
        let filter = query.to_filter();

        let subscriptions = self
            .subscription_repo
            .list_active(user_id, filter.clone())
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "subscriptions: failed to list subscriptions");
                SubscriptionError::Internal(err)
            })?;

        let total_items = self
            .subscription_repo
            .count_active(user_id, filter)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "subscriptions: failed to count subscriptions");
                SubscriptionError::Internal(err)
            })?;

        let limit = query.limit();
        let total_pages = (total_items as f64 / f64::from(limit)).ceil() as u32;

        Ok(SubscriptionListModel {
            subscriptions: subscriptions
                .into_iter()
                .map(SubscriptionModel::from)
                .collect(),
            pagination: PaginationModel {
                current_page: query.page(),
                total_pages,
                total_items,
                items_per_page: limit,
            },
        })
    }

    pub async fn get(
        &self,
        user_id: Uuid,
        subscription_id: Uuid,
    ) -> UseCaseResult<SubscriptionModel> {
        let subscription = self
            .find_active_or_not_found(user_id, subscription_id)
            .await?;
        Ok(SubscriptionModel::from(subscription))
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        subscription_id: Uuid,
        model: UpdateSubscriptionModel,
    ) -> UseCaseResult<SubscriptionModel> {
        let field_errors = model.validate();
        if !field_errors.is_empty() {
            warn!(
                %user_id,
                %subscription_id,
                error_count = field_errors.len(),
                "subscriptions: update rejected by validation"
            );
            return Err(SubscriptionError::Validation(field_errors));
        }

        let existing = self
            .find_active_or_not_found(user_id, subscription_id)
            .await?;

        // Reconcile the linked savings expense before the subscription row is
        // persisted so the stored pointer reflects the action just taken.
        let savings_expense_id = self
            .apply_link_action(user_id, plan_update_link_action(&existing, &model))
            .await?;

        let updated = self
            .subscription_repo
            .update(
                subscription_id,
                UpdateSubscriptionChangeset {
                    name: model.name,
                    plan: model.plan,
                    total_spend: model.total_spend,
                    duration: model.duration,
                    recurring_payment: model.recurring_payment.map(|value| value.to_string()),
                    color: model.color,
                    next_payment_date: model.next_payment_date,
                    category: model.category.map(|value| value.to_string()),
                    link_to_savings_plan: model.link_to_savings_plan,
                    monthly_amount: model.monthly_amount,
                    savings_expense_id,
                    updated_at: Some(Utc::now()),
                },
            )
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    %subscription_id,
                    db_error = ?err,
                    "subscriptions: failed to update subscription"
                );
                SubscriptionError::Internal(err)
            })?;

        info!(%user_id, %subscription_id, "subscriptions: subscription updated");
        Ok(SubscriptionModel::from(updated))
    }

    pub async fn delete(&self, user_id: Uuid, subscription_id: Uuid) -> UseCaseResult<()> {
        let existing = self
            .find_active_or_not_found(user_id, subscription_id)
            .await?;

        // Expense cleanup runs first; when it fails the subscription must
        // stay active so no dangling expense is left behind.
        if let Some(expense_id) = existing.savings_expense_id {
            self.savings_expense_repo
                .delete(expense_id)
                .await
                .map_err(|err| {
                    error!(
                        %user_id,
                        %subscription_id,
                        %expense_id,
                        db_error = ?err,
                        "subscriptions: failed to delete linked savings expense"
                    );
                    SubscriptionError::Internal(err)
                })?;
            info!(
                %user_id,
                %subscription_id,
                %expense_id,
                "subscriptions: linked savings expense removed"
            );
        }

        self.subscription_repo
            .soft_delete(subscription_id)
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    %subscription_id,
                    db_error = ?err,
                    "subscriptions: failed to soft delete subscription"
                );
                SubscriptionError::Internal(err)
            })?;

        info!(%user_id, %subscription_id, "subscriptions: subscription deleted");
        Ok(())
    }

    pub async fn summary(&self, user_id: Uuid) -> UseCaseResult<SubscriptionSummaryModel> {
        let subscriptions = self
            .subscription_repo
            .list_all_active(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "subscriptions: failed to load summary");
                SubscriptionError::Internal(err)
            })?;

        Ok(build_summary(&subscriptions))
    }

    async fn find_active_or_not_found(
        &self,
        user_id: Uuid,
        subscription_id: Uuid,
    ) -> UseCaseResult<SubscriptionEntity> {
        self.subscription_repo
            .find_active_by_id(subscription_id, user_id)
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    %subscription_id,
                    db_error = ?err,
                    "subscriptions: failed to load subscription"
                );
                SubscriptionError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%user_id, %subscription_id, "subscriptions: subscription not found");
                SubscriptionError::NotFound
            })
    }

    /// Applies the planned linkage write. Returns the pointer change for the
    /// subscription changeset: `Some(Some(id))` attaches, `Some(None)`
    /// detaches, `None` leaves the column untouched.
    async fn apply_link_action(
        &self,
        user_id: Uuid,
        action: LinkAction,
    ) -> UseCaseResult<Option<Option<Uuid>>> {
        match action {
            LinkAction::CreateExpense {
                category,
                per_month,
            } => {
                let now = Utc::now();
                let expense = self
                    .savings_expense_repo
                    .create(InsertSavingsExpenseEntity {
                        user_id,
                        category: category.to_string(),
                        per_month,
                        created_at: now,
                        updated_at: now,
                    })
                    .await
                    .map_err(|err| {
                        error!(
                            %user_id,
                            db_error = ?err,
                            "subscriptions: failed to create linked savings expense"
                        );
                        SubscriptionError::Internal(err)
                    })?;
                info!(
                    %user_id,
                    expense_id = %expense.id,
                    per_month,
                    "subscriptions: linked savings expense created"
                );
                Ok(Some(Some(expense.id)))
            }
            LinkAction::UpdateExpense {
                expense_id,
                category,
                per_month,
            } => {
                self.savings_expense_repo
                    .update(expense_id, category, per_month)
                    .await
                    .map_err(|err| {
                        error!(
                            %user_id,
                            %expense_id,
                            db_error = ?err,
                            "subscriptions: failed to update linked savings expense"
                        );
                        SubscriptionError::Internal(err)
                    })?;
                info!(
                    %user_id,
                    %expense_id,
                    per_month,
                    "subscriptions: linked savings expense updated"
                );
                Ok(None)
            }
            LinkAction::DeleteExpense { expense_id } => {
                self.savings_expense_repo
                    .delete(expense_id)
                    .await
                    .map_err(|err| {
                        error!(
                            %user_id,
                            %expense_id,
                            db_error = ?err,
                            "subscriptions: failed to delete linked savings expense"
                        );
                        SubscriptionError::Internal(err)
                    })?;
                info!(%user_id, %expense_id, "subscriptions: linked savings expense removed");
                Ok(Some(None))
            }
            LinkAction::Keep => Ok(None),
        }
    }
}

/// Monthly cost encoded in a free-text plan description, e.g.
/// "Premium ₹499/month" yields 499. The first digit run directly before a
/// "/month" marker wins.
pub fn monthly_plan_cost(plan: &str) -> Option<f64> {
    for (idx, _) in plan.match_indices("/month") {
        let digits: Vec<char> = plan[..idx]
            .chars()
            .rev()
            .take_while(|ch| ch.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            continue;
        }
        let value: String = digits.into_iter().rev().collect();
        if let Ok(parsed) = value.parse::<u64>() {
            return Some(parsed as f64);
        }
    }
    None
}

pub fn build_summary(subscriptions: &[SubscriptionEntity]) -> SubscriptionSummaryModel {
    let total_spend = subscriptions.iter().map(|sub| sub.total_spend).sum();
    let recurring: Vec<&SubscriptionEntity> = subscriptions
        .iter()
        .filter(|sub| RecurringPayment::from_str(&sub.recurring_payment) == RecurringPayment::Yes)
        .collect();

    let monthly_recurring_cost = recurring
        .iter()
        .filter_map(|sub| monthly_plan_cost(&sub.plan))
        .sum();

    let mut category_breakdown: HashMap<String, CategoryBreakdownModel> = HashMap::new();
    for subscription in subscriptions {
        let entry = category_breakdown
            .entry(subscription.category.clone())
            .or_default();
        entry.total_spend += subscription.total_spend;
        entry.count += 1;
    }

    SubscriptionSummaryModel {
        overview: SubscriptionOverviewModel {
            total_spend,
            subscription_count: subscriptions.len(),
            recurring_count: recurring.len(),
            monthly_recurring_cost,
        },
        category_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::savings::SavingsExpenseEntity;
    use crate::domain::repositories::savings_expenses::MockSavingsExpenseRepository;
    use crate::domain::repositories::subscriptions::MockSubscriptionRepository;
    use crate::domain::value_objects::enums::savings_categories::SavingsCategory;
    use crate::domain::value_objects::enums::subscription_categories::SubscriptionCategory;
    use mockall::predicate::eq;

    fn entity_from_insert(id: Uuid, insert: InsertSubscriptionEntity) -> SubscriptionEntity {
        SubscriptionEntity {
            id,
            user_id: insert.user_id,
            name: insert.name,
            plan: insert.plan,
            total_spend: insert.total_spend,
            duration: insert.duration,
            recurring_payment: insert.recurring_payment,
            color: insert.color,
            next_payment_date: insert.next_payment_date,
            category: insert.category,
            link_to_savings_plan: insert.link_to_savings_plan,
            monthly_amount: insert.monthly_amount,
            savings_expense_id: insert.savings_expense_id,
            is_active: insert.is_active,
            created_at: insert.created_at,
            updated_at: insert.updated_at,
        }
    }

    fn expense_entity(id: Uuid, user_id: Uuid, category: &str, per_month: f64) -> SavingsExpenseEntity {
        let now = Utc::now();
        SavingsExpenseEntity {
            id,
            user_id,
            category: category.to_string(),
            per_month,
            created_at: now,
            updated_at: now,
        }
    }

    fn active_subscription(
        user_id: Uuid,
        category: SubscriptionCategory,
        linked: bool,
        monthly_amount: f64,
        savings_expense_id: Option<Uuid>,
    ) -> SubscriptionEntity {
        let now = Utc::now();
        SubscriptionEntity {
            id: Uuid::new_v4(),
            user_id,
            name: "Netflix".to_string(),
            plan: "Premium ₹499/month".to_string(),
            total_spend: 499.0,
            duration: "1 month".to_string(),
            recurring_payment: RecurringPayment::Yes.to_string(),
            color: "blue".to_string(),
            next_payment_date: None,
            category: category.to_string(),
            link_to_savings_plan: linked,
            monthly_amount,
            savings_expense_id,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn netflix_create_model() -> CreateSubscriptionModel {
        CreateSubscriptionModel {
            name: "Netflix".to_string(),
            plan: "Premium ₹499/month".to_string(),
            total_spend: 499.0,
            duration: "1 month".to_string(),
            recurring_payment: RecurringPayment::Yes,
            color: None,
            category: Some(SubscriptionCategory::Streaming),
            next_payment_date: None,
            link_to_savings_plan: Some(true),
            monthly_amount: Some(499.0),
        }
    }

    #[tokio::test]
    async fn create_linked_subscription_attaches_entertainment_expense() {
        let user_id = Uuid::new_v4();
        let expense_id = Uuid::new_v4();

        let mut subscription_repo = MockSubscriptionRepository::new();
        let mut savings_expense_repo = MockSavingsExpenseRepository::new();

        savings_expense_repo
            .expect_create()
            .withf(move |entity| {
                entity.user_id == user_id
                    && entity.category == SavingsCategory::Entertainment.to_string()
                    && entity.per_month == 499.0
            })
            .returning(move |entity| {
                let expense =
                    expense_entity(expense_id, entity.user_id, &entity.category, entity.per_month);
                Box::pin(async move { Ok(expense) })
            });

        subscription_repo
            .expect_create()
            .withf(move |entity| {
                entity.savings_expense_id == Some(expense_id)
                    && entity.category == SubscriptionCategory::Streaming.to_string()
                    && entity.is_active
            })
            .returning(|entity| {
                let created = entity_from_insert(Uuid::new_v4(), entity);
                Box::pin(async move { Ok(created) })
            });

        let usecase =
            SubscriptionUseCase::new(Arc::new(subscription_repo), Arc::new(savings_expense_repo));

        let created = usecase.create(user_id, netflix_create_model()).await.unwrap();

        assert_eq!(created.savings_expense_id, Some(expense_id));
        assert_eq!(created.monthly_amount, 499.0);
        assert!(created.link_to_savings_plan);
    }

    #[tokio::test]
    async fn create_without_link_never_touches_the_expense_store() {
        let user_id = Uuid::new_v4();

        let mut subscription_repo = MockSubscriptionRepository::new();
        let mut savings_expense_repo = MockSavingsExpenseRepository::new();

        savings_expense_repo.expect_create().times(0);
        subscription_repo
            .expect_create()
            .withf(|entity| entity.savings_expense_id.is_none())
            .returning(|entity| {
                let created = entity_from_insert(Uuid::new_v4(), entity);
                Box::pin(async move { Ok(created) })
            });

        let usecase =
            SubscriptionUseCase::new(Arc::new(subscription_repo), Arc::new(savings_expense_repo));

        let model = CreateSubscriptionModel {
            link_to_savings_plan: Some(false),
            ..netflix_create_model()
        };
        let created = usecase.create(user_id, model).await.unwrap();

        assert_eq!(created.savings_expense_id, None);
    }

    #[tokio::test]
    async fn create_with_invalid_fields_is_rejected_before_any_write() {
        let subscription_repo = MockSubscriptionRepository::new();
        let savings_expense_repo = MockSavingsExpenseRepository::new();

        let usecase =
            SubscriptionUseCase::new(Arc::new(subscription_repo), Arc::new(savings_expense_repo));

        let model = CreateSubscriptionModel {
            name: "".to_string(),
            total_spend: -10.0,
            ..netflix_create_model()
        };

        match usecase.create(Uuid::new_v4(), model).await {
            Err(SubscriptionError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].field, "name");
                assert_eq!(errors[1].field, "totalSpend");
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn unlinking_update_deletes_expense_and_clears_pointer() {
        let user_id = Uuid::new_v4();
        let expense_id = Uuid::new_v4();
        let existing =
            active_subscription(user_id, SubscriptionCategory::Streaming, true, 499.0, Some(expense_id));
        let subscription_id = existing.id;

        let mut subscription_repo = MockSubscriptionRepository::new();
        let mut savings_expense_repo = MockSavingsExpenseRepository::new();

        let found = existing.clone();
        subscription_repo
            .expect_find_active_by_id()
            .with(eq(subscription_id), eq(user_id))
            .returning(move |_, _| {
                let found = found.clone();
                Box::pin(async move { Ok(Some(found)) })
            });

        savings_expense_repo
            .expect_delete()
            .with(eq(expense_id))
            .returning(|_| Box::pin(async { Ok(()) }));

        subscription_repo
            .expect_update()
            .withf(move |id, changeset| {
                *id == subscription_id
                    && changeset.savings_expense_id == Some(None)
                    && changeset.link_to_savings_plan == Some(false)
            })
            .returning(move |_, _| {
                let mut updated = existing.clone();
                updated.link_to_savings_plan = false;
                updated.savings_expense_id = None;
                Box::pin(async move { Ok(updated) })
            });

        let usecase =
            SubscriptionUseCase::new(Arc::new(subscription_repo), Arc::new(savings_expense_repo));

        let update = UpdateSubscriptionModel {
            link_to_savings_plan: Some(false),
            ..Default::default()
        };
        let updated = usecase.update(user_id, subscription_id, update).await.unwrap();

        assert_eq!(updated.savings_expense_id, None);
        assert!(!updated.link_to_savings_plan);
    }

    #[tokio::test]
    async fn update_with_explicit_null_clears_next_payment_date() {
        let user_id = Uuid::new_v4();
        let mut existing =
            active_subscription(user_id, SubscriptionCategory::Streaming, false, 0.0, None);
        existing.next_payment_date = Some(Utc::now());
        let subscription_id = existing.id;

        let mut subscription_repo = MockSubscriptionRepository::new();
        let savings_expense_repo = MockSavingsExpenseRepository::new();

        let found = existing.clone();
        subscription_repo
            .expect_find_active_by_id()
            .with(eq(subscription_id), eq(user_id))
            .returning(move |_, _| {
                let found = found.clone();
                Box::pin(async move { Ok(Some(found)) })
            });

        subscription_repo
            .expect_update()
            .withf(move |id, changeset| {
                *id == subscription_id && changeset.next_payment_date == Some(None)
            })
            .returning(move |_, _| {
                let mut updated = existing.clone();
                updated.next_payment_date = None;
                Box::pin(async move { Ok(updated) })
            });

        let usecase =
            SubscriptionUseCase::new(Arc::new(subscription_repo), Arc::new(savings_expense_repo));

        let update = UpdateSubscriptionModel {
            next_payment_date: Some(None),
            ..Default::default()
        };
        let updated = usecase.update(user_id, subscription_id, update).await.unwrap();

        assert_eq!(updated.next_payment_date, None);
    }

    #[tokio::test]
    async fn update_of_missing_subscription_returns_not_found() {
        let mut subscription_repo = MockSubscriptionRepository::new();
        let savings_expense_repo = MockSavingsExpenseRepository::new();

        subscription_repo
            .expect_find_active_by_id()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let usecase =
            SubscriptionUseCase::new(Arc::new(subscription_repo), Arc::new(savings_expense_repo));

        let result = usecase
            .update(
                Uuid::new_v4(),
                Uuid::new_v4(),
                UpdateSubscriptionModel {
                    name: Some("Spotify".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(SubscriptionError::NotFound)));
    }

    #[tokio::test]
    async fn delete_removes_linked_expense_before_soft_delete() {
        let user_id = Uuid::new_v4();
        let expense_id = Uuid::new_v4();
        let existing =
            active_subscription(user_id, SubscriptionCategory::Streaming, true, 499.0, Some(expense_id));
        let subscription_id = existing.id;

        let mut subscription_repo = MockSubscriptionRepository::new();
        let mut savings_expense_repo = MockSavingsExpenseRepository::new();

        subscription_repo
            .expect_find_active_by_id()
            .with(eq(subscription_id), eq(user_id))
            .returning(move |_, _| {
                let found = existing.clone();
                Box::pin(async move { Ok(Some(found)) })
            });

        savings_expense_repo
            .expect_delete()
            .with(eq(expense_id))
            .returning(|_| Box::pin(async { Ok(()) }));

        subscription_repo
            .expect_soft_delete()
            .with(eq(subscription_id))
            .returning(|_| Box::pin(async { Ok(()) }));

        let usecase =
            SubscriptionUseCase::new(Arc::new(subscription_repo), Arc::new(savings_expense_repo));

        usecase.delete(user_id, subscription_id).await.unwrap();
    }

    #[tokio::test]
    async fn failed_expense_cleanup_leaves_subscription_active() {
        let user_id = Uuid::new_v4();
        let expense_id = Uuid::new_v4();
        let existing =
            active_subscription(user_id, SubscriptionCategory::Streaming, true, 499.0, Some(expense_id));
        let subscription_id = existing.id;

        let mut subscription_repo = MockSubscriptionRepository::new();
        let mut savings_expense_repo = MockSavingsExpenseRepository::new();

        subscription_repo
            .expect_find_active_by_id()
            .returning(move |_, _| {
                let found = existing.clone();
                Box::pin(async move { Ok(Some(found)) })
            });

        savings_expense_repo
            .expect_delete()
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("connection reset")) }));

        subscription_repo.expect_soft_delete().times(0);

        let usecase =
            SubscriptionUseCase::new(Arc::new(subscription_repo), Arc::new(savings_expense_repo));

        let result = usecase.delete(user_id, subscription_id).await;
        assert!(matches!(result, Err(SubscriptionError::Internal(_))));
    }

    #[tokio::test]
    async fn summary_counts_recurring_and_parses_monthly_cost() {
        let user_id = Uuid::new_v4();

        let mut netflix =
            active_subscription(user_id, SubscriptionCategory::Streaming, false, 0.0, None);
        netflix.total_spend = 499.0;

        let mut gym = active_subscription(user_id, SubscriptionCategory::Gym, false, 0.0, None);
        gym.name = "Cult Fit".to_string();
        gym.plan = "Annual".to_string();
        gym.total_spend = 199.0;
        gym.recurring_payment = RecurringPayment::No.to_string();

        let mut subscription_repo = MockSubscriptionRepository::new();
        let savings_expense_repo = MockSavingsExpenseRepository::new();

        subscription_repo
            .expect_list_all_active()
            .with(eq(user_id))
            .returning(move |_| {
                let subscriptions = vec![netflix.clone(), gym.clone()];
                Box::pin(async move { Ok(subscriptions) })
            });

        let usecase =
            SubscriptionUseCase::new(Arc::new(subscription_repo), Arc::new(savings_expense_repo));

        let summary = usecase.summary(user_id).await.unwrap();

        assert_eq!(summary.overview.total_spend, 698.0);
        assert_eq!(summary.overview.subscription_count, 2);
        assert_eq!(summary.overview.recurring_count, 1);
        assert_eq!(summary.overview.monthly_recurring_cost, 499.0);

        let streaming = &summary.category_breakdown["Streaming"];
        assert_eq!(streaming.total_spend, 499.0);
        assert_eq!(streaming.count, 1);
        assert_eq!(summary.category_breakdown["Gym"].count, 1);
    }

    #[test]
    fn monthly_plan_cost_parses_digit_runs_before_the_marker() {
        assert_eq!(monthly_plan_cost("Premium ₹499/month"), Some(499.0));
        assert_eq!(monthly_plan_cost("300/month family pack"), Some(300.0));
        assert_eq!(monthly_plan_cost("Annual plan"), None);
        assert_eq!(monthly_plan_cost("billed /monthly at 100"), None);
        assert_eq!(monthly_plan_cost("99/week or 349/month"), Some(349.0));
    }
}
