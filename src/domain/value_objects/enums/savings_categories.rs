use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SavingsCategory {
    Rent,
    Electricity,
    Appliances,
    Food,
    Transport,
    Healthcare,
    Entertainment,
    #[default]
    Other,
}

impl Display for SavingsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let category = match self {
            SavingsCategory::Rent => "Rent",
            SavingsCategory::Electricity => "Electricity",
            SavingsCategory::Appliances => "Appliances",
            SavingsCategory::Food => "Food",
            SavingsCategory::Transport => "Transport",
            SavingsCategory::Healthcare => "Healthcare",
            SavingsCategory::Entertainment => "Entertainment",
            SavingsCategory::Other => "Other",
        };
        write!(f, "{}", category)
    }
}

impl SavingsCategory {
    pub fn from_str(value: &str) -> Self {
        match value {
            "Rent" => SavingsCategory::Rent,
            "Electricity" => SavingsCategory::Electricity,
            "Appliances" => SavingsCategory::Appliances,
            "Food" => SavingsCategory::Food,
            "Transport" => SavingsCategory::Transport,
            "Healthcare" => SavingsCategory::Healthcare,
            "Entertainment" => SavingsCategory::Entertainment,
            _ => SavingsCategory::Other,
        }
    }
}
