use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::savings_categories::SavingsCategory;

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubscriptionCategory {
    Streaming,
    Software,
    Gym,
    Music,
    News,
    #[default]
    Other,
}

impl Display for SubscriptionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let category = match self {
            SubscriptionCategory::Streaming => "Streaming",
            SubscriptionCategory::Software => "Software",
            SubscriptionCategory::Gym => "Gym",
            SubscriptionCategory::Music => "Music",
            SubscriptionCategory::News => "News",
            SubscriptionCategory::Other => "Other",
        };
        write!(f, "{}", category)
    }
}

impl SubscriptionCategory {
    pub fn from_str(value: &str) -> Self {
        match value {
            "Streaming" => SubscriptionCategory::Streaming,
            "Software" => SubscriptionCategory::Software,
            "Gym" => SubscriptionCategory::Gym,
            "Music" => SubscriptionCategory::Music,
            "News" => SubscriptionCategory::News,
            _ => SubscriptionCategory::Other,
        }
    }

    /// Fixed mapping used when a savings expense is derived from a subscription.
    pub fn savings_category(&self) -> SavingsCategory {
        match self {
            SubscriptionCategory::Streaming => SavingsCategory::Entertainment,
            SubscriptionCategory::Software => SavingsCategory::Other,
            SubscriptionCategory::Gym => SavingsCategory::Healthcare,
            SubscriptionCategory::Music => SavingsCategory::Entertainment,
            SubscriptionCategory::News => SavingsCategory::Other,
            SubscriptionCategory::Other => SavingsCategory::Other,
        }
    }
}
