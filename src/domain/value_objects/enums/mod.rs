pub mod income_sources;
pub mod recurring_payments;
pub mod savings_categories;
pub mod sort_order;
pub mod subscription_categories;
