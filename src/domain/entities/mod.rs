pub mod savings;
pub mod subscriptions;
