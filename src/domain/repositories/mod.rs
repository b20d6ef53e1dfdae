pub mod budgets;
pub mod expenses;
pub mod savings_budgets;
pub mod savings_expenses;
pub mod savings_incomes;
pub mod subscriptions;
