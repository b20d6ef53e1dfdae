use uuid::Uuid;

use crate::domain::entities::subscriptions::SubscriptionEntity;
use crate::domain::value_objects::enums::savings_categories::SavingsCategory;
use crate::domain::value_objects::enums::subscription_categories::SubscriptionCategory;
use crate::domain::value_objects::subscriptions::{
    CreateSubscriptionModel, UpdateSubscriptionModel,
};

/// The single write (or no write) the reconciler issues against the savings
/// expense store before a subscription mutation is persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkAction {
    CreateExpense {
        category: SavingsCategory,
        per_month: f64,
    },
    UpdateExpense {
        expense_id: Uuid,
        category: SavingsCategory,
        per_month: f64,
    },
    DeleteExpense {
        expense_id: Uuid,
    },
    Keep,
}

/// Linked expense to create alongside a brand-new subscription, if any.
pub fn plan_create_link(model: &CreateSubscriptionModel) -> Option<(SavingsCategory, f64)> {
    let monthly_amount = model.monthly_amount.unwrap_or(0.0);
    if model.link_to_savings_plan.unwrap_or(false) && monthly_amount > 0.0 {
        let category = model.category.unwrap_or_default();
        Some((category.savings_category(), monthly_amount))
    } else {
        None
    }
}

/// Decides how an update changes the subscription's linked savings expense.
///
/// Linking intent is only re-evaluated when the payload touches
/// `linkToSavingsPlan` or `monthlyAmount`; resending an unchanged payload
/// without those fields is a no-op. The derived expense category uses the
/// effective category: the one in the same payload when present, otherwise
/// the stored one.
pub fn plan_update_link_action(
    existing: &SubscriptionEntity,
    update: &UpdateSubscriptionModel,
) -> LinkAction {
    if update.link_to_savings_plan.is_none() && update.monthly_amount.is_none() {
        return LinkAction::Keep;
    }

    let should_link = update
        .link_to_savings_plan
        .unwrap_or(existing.link_to_savings_plan);
    let amount = update.monthly_amount.unwrap_or(existing.monthly_amount);
    let category = update
        .category
        .unwrap_or_else(|| SubscriptionCategory::from_str(&existing.category));

    match (should_link && amount > 0.0, existing.savings_expense_id) {
        (true, None) => LinkAction::CreateExpense {
            category: category.savings_category(),
            per_month: amount,
        },
        (true, Some(expense_id)) => LinkAction::UpdateExpense {
            expense_id,
            category: category.savings_category(),
            per_month: amount,
        },
        (false, Some(expense_id)) => LinkAction::DeleteExpense { expense_id },
        (false, None) => LinkAction::Keep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::domain::value_objects::enums::recurring_payments::RecurringPayment;

    fn sample_subscription(
        category: SubscriptionCategory,
        linked: bool,
        monthly_amount: f64,
        savings_expense_id: Option<Uuid>,
    ) -> SubscriptionEntity {
        let now = Utc::now();
        SubscriptionEntity {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
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

    fn create_model(
        category: Option<SubscriptionCategory>,
        link: Option<bool>,
        monthly_amount: Option<f64>,
    ) -> CreateSubscriptionModel {
        CreateSubscriptionModel {
            name: "Netflix".to_string(),
            plan: "Premium ₹499/month".to_string(),
            total_spend: 499.0,
            duration: "1 month".to_string(),
            recurring_payment: RecurringPayment::Yes,
            color: None,
            category,
            next_payment_date: None,
            link_to_savings_plan: link,
            monthly_amount,
        }
    }

    #[test]
    fn create_links_streaming_to_entertainment() {
        let model = create_model(Some(SubscriptionCategory::Streaming), Some(true), Some(499.0));
        assert_eq!(
            plan_create_link(&model),
            Some((SavingsCategory::Entertainment, 499.0))
        );
    }

    #[test]
    fn create_without_flag_or_amount_stays_unlinked() {
        let unflagged = create_model(Some(SubscriptionCategory::Gym), None, Some(499.0));
        assert_eq!(plan_create_link(&unflagged), None);

        let zero_amount = create_model(Some(SubscriptionCategory::Gym), Some(true), Some(0.0));
        assert_eq!(plan_create_link(&zero_amount), None);

        let no_amount = create_model(Some(SubscriptionCategory::Gym), Some(true), None);
        assert_eq!(plan_create_link(&no_amount), None);
    }

    #[test]
    fn create_defaults_category_to_other() {
        let model = create_model(None, Some(true), Some(100.0));
        assert_eq!(plan_create_link(&model), Some((SavingsCategory::Other, 100.0)));
    }

    #[test]
    fn update_creates_expense_when_newly_linked() {
        let existing = sample_subscription(SubscriptionCategory::Gym, false, 0.0, None);
        let update = UpdateSubscriptionModel {
            link_to_savings_plan: Some(true),
            monthly_amount: Some(250.0),
            ..Default::default()
        };

        assert_eq!(
            plan_update_link_action(&existing, &update),
            LinkAction::CreateExpense {
                category: SavingsCategory::Healthcare,
                per_month: 250.0,
            }
        );
    }

    #[test]
    fn update_amends_existing_expense_in_place() {
        let expense_id = Uuid::new_v4();
        let existing =
            sample_subscription(SubscriptionCategory::Streaming, true, 499.0, Some(expense_id));
        let update = UpdateSubscriptionModel {
            monthly_amount: Some(599.0),
            ..Default::default()
        };

        assert_eq!(
            plan_update_link_action(&existing, &update),
            LinkAction::UpdateExpense {
                expense_id,
                category: SavingsCategory::Entertainment,
                per_month: 599.0,
            }
        );
    }

    #[test]
    fn update_uses_category_from_same_payload_when_present() {
        let expense_id = Uuid::new_v4();
        let existing =
            sample_subscription(SubscriptionCategory::Streaming, true, 499.0, Some(expense_id));
        let update = UpdateSubscriptionModel {
            category: Some(SubscriptionCategory::Gym),
            monthly_amount: Some(499.0),
            ..Default::default()
        };

        assert_eq!(
            plan_update_link_action(&existing, &update),
            LinkAction::UpdateExpense {
                expense_id,
                category: SavingsCategory::Healthcare,
                per_month: 499.0,
            }
        );
    }

    #[test]
    fn update_unlinks_by_deleting_expense() {
        let expense_id = Uuid::new_v4();
        let existing =
            sample_subscription(SubscriptionCategory::Music, true, 199.0, Some(expense_id));
        let update = UpdateSubscriptionModel {
            link_to_savings_plan: Some(false),
            ..Default::default()
        };

        assert_eq!(
            plan_update_link_action(&existing, &update),
            LinkAction::DeleteExpense { expense_id }
        );
    }

    #[test]
    fn update_with_zero_amount_unlinks_existing_expense() {
        let expense_id = Uuid::new_v4();
        let existing =
            sample_subscription(SubscriptionCategory::Music, true, 199.0, Some(expense_id));
        let update = UpdateSubscriptionModel {
            monthly_amount: Some(0.0),
            ..Default::default()
        };

        assert_eq!(
            plan_update_link_action(&existing, &update),
            LinkAction::DeleteExpense { expense_id }
        );
    }

    #[test]
    fn update_unlinked_without_expense_is_noop() {
        let existing = sample_subscription(SubscriptionCategory::News, false, 0.0, None);
        let update = UpdateSubscriptionModel {
            link_to_savings_plan: Some(false),
            ..Default::default()
        };

        assert_eq!(plan_update_link_action(&existing, &update), LinkAction::Keep);
    }

    #[test]
    fn update_without_linkage_fields_never_touches_the_expense() {
        let expense_id = Uuid::new_v4();
        let existing =
            sample_subscription(SubscriptionCategory::Streaming, true, 499.0, Some(expense_id));
        let update = UpdateSubscriptionModel {
            name: Some("Netflix Family".to_string()),
            total_spend: Some(999.0),
            ..Default::default()
        };

        assert_eq!(plan_update_link_action(&existing, &update), LinkAction::Keep);
    }

    #[test]
    fn resending_current_state_keeps_the_same_expense() {
        let expense_id = Uuid::new_v4();
        let existing =
            sample_subscription(SubscriptionCategory::Streaming, true, 499.0, Some(expense_id));
        let update = UpdateSubscriptionModel {
            link_to_savings_plan: Some(true),
            monthly_amount: Some(499.0),
            ..Default::default()
        };

        // Same id, same amount: no new expense is ever created.
        assert_eq!(
            plan_update_link_action(&existing, &update),
            LinkAction::UpdateExpense {
                expense_id,
                category: SavingsCategory::Entertainment,
                per_month: 499.0,
            }
        );
    }
}
