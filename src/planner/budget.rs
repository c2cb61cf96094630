//! Cost aggregation and budget overrun detection

use crate::models::{BudgetWarning, CostBreakdown, DayPlan, Hotel, Transport};

pub const OVER_BUDGET_KIND: &str = "over_budget";
const OVER_BUDGET_SUGGESTION: &str =
    "Consider adjusting your travel dates, choosing budget-friendly hotels, or increasing your budget.";

#[derive(Debug, Clone, Copy)]
pub struct BudgetInputs<'a> {
    pub hotel: Option<&'a Hotel>,
    pub transport: Option<&'a Transport>,
    pub itinerary: &'a [DayPlan],
    pub budget: i64,
    pub num_days: u32,
    pub num_people: u32,
    /// False when the budget is a system default; no overrun is reported then
    pub user_set_budget: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetReconciliation {
    pub breakdown: CostBreakdown,
    pub warning: Option<BudgetWarning>,
}

impl BudgetReconciliation {
    pub fn exceeded(&self) -> bool {
        self.warning.is_some()
    }
}

/// Total up hotel, transport and itinerary costs against the budget.
pub fn reconcile(inputs: &BudgetInputs<'_>) -> BudgetReconciliation {
    let people = f64::from(inputs.num_people);
    let budget = inputs.budget as f64;

    let hotel_cost = inputs
        .hotel
        .map(|h| h.price_per_night * f64::from(inputs.num_days))
        .unwrap_or(0.0);

    let transport_cost = inputs
        .transport
        .map(|t| t.price_per_person * people)
        .unwrap_or(0.0);

    let activities_per_person: f64 = inputs
        .itinerary
        .iter()
        .flat_map(|day| day.activities.iter())
        .map(|a| a.estimated_cost)
        .sum();
    let activities_actual = activities_per_person * people;

    let activities_budget = if inputs.user_set_budget {
        (budget - hotel_cost - transport_cost).max(0.0)
    } else {
        activities_actual
    };

    let estimated_total = hotel_cost + transport_cost + activities_actual;

    let warning = if inputs.user_set_budget && estimated_total > budget {
        let over_amount = estimated_total - budget;
        Some(BudgetWarning {
            kind: OVER_BUDGET_KIND.to_string(),
            message: format!(
                "This trip exceeds your budget of ${} by ${}",
                group_thousands(&inputs.budget.to_string()),
                format_money(over_amount)
            ),
            suggestion: OVER_BUDGET_SUGGESTION.to_string(),
            over_amount,
            required_budget: estimated_total,
        })
    } else {
        None
    };

    BudgetReconciliation {
        breakdown: CostBreakdown {
            hotel: hotel_cost,
            transport: transport_cost,
            activities_budget,
            activities_actual,
            activities_per_person,
            estimated_total,
            remaining_budget: budget - estimated_total,
        },
        warning,
    }
}

/// `1234.5` → `1,234.50`
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(whole), cents)
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{}{}", sign, out)
}
