use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IncomeSource {
    Salary,
    #[serde(rename = "Part Time")]
    PartTime,
    Commissions,
    Freelance,
    Investment,
    #[default]
    Other,
}

impl Display for IncomeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = match self {
            IncomeSource::Salary => "Salary",
            IncomeSource::PartTime => "Part Time",
            IncomeSource::Commissions => "Commissions",
            IncomeSource::Freelance => "Freelance",
            IncomeSource::Investment => "Investment",
            IncomeSource::Other => "Other",
        };
        write!(f, "{}", source)
    }
}

impl IncomeSource {
    pub fn from_str(value: &str) -> Self {
        match value {
            "Salary" => IncomeSource::Salary,
            "Part Time" => IncomeSource::PartTime,
            "Commissions" => IncomeSource::Commissions,
            "Freelance" => IncomeSource::Freelance,
            "Investment" => IncomeSource::Investment,
            _ => IncomeSource::Other,
        }
    }
}
