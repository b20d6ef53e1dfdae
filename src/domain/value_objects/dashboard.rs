use serde::Serialize;

/// Figures for the dashboard landing page. `monthly_savings` is income minus
/// both regular expenses and savings-plan (subscription-linked) outflows.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverviewModel {
    pub total_budget: f64,
    pub total_expenses: f64,
    pub total_income: f64,
    pub savings_expenses: f64,
    pub monthly_savings: f64,
}
