pub mod dashboard;
pub mod savings;
pub mod subscriptions;
