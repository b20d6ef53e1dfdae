pub mod dashboard;
pub mod enums;
pub mod savings;
pub mod subscriptions;
pub mod validation;
