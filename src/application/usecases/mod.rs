pub mod dashboard;
pub mod savings;
pub mod savings_linkage;
pub mod subscriptions;
