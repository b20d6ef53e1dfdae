use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecurringPayment {
    #[default]
    Yes,
    No,
}

impl Display for RecurringPayment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            RecurringPayment::Yes => "Yes",
            RecurringPayment::No => "No",
        };
        write!(f, "{}", value)
    }
}

impl RecurringPayment {
    pub fn from_str(value: &str) -> Self {
        match value {
            "No" => RecurringPayment::No,
            _ => RecurringPayment::Yes,
        }
    }
}
