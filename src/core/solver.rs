use super::types::{BreakevenResult, ProjectionResult};
use super::validate::MAX_YEARS;

// Compounds annually: each year applies growth to the running balance first,
// then deposits twelve months of contributions. Index 0 of the trajectory is
// the starting balance itself.
pub fn project_future_value(
    initial_amount: f64,
    monthly_contribution: f64,
    growth_rate_percent: f64,
    num_of_years: u32,
) -> ProjectionResult {
    let rate = growth_rate_percent / 100.0;
    if initial_amount == 0.0 || rate == 0.0 || num_of_years < 1 {
        return ProjectionResult::empty();
    }

    // Callers may hand in a not-yet-validated year count; the loop never runs
    // past the validated range.
    let num_of_years = num_of_years.min(MAX_YEARS);

    let mut annual_values = Vec::with_capacity(num_of_years as usize + 1);
    annual_values.push(initial_amount);

    let mut yearly_value = initial_amount;
    for _ in 0..num_of_years {
        yearly_value = yearly_value * (1.0 + rate) + 12.0 * monthly_contribution;
        annual_values.push(yearly_value);
    }

    ProjectionResult::from_values(annual_values)
}

// CAGR as a percentage: ((end / start)^(1/n) - 1) * 100. Degenerate inputs
// (zero start, zero years) produce non-finite output; callers decide how to
// present those.
pub fn historical_cagr_percent(initial_amount: f64, end_amount: f64, num_of_years: f64) -> f64 {
    ((end_amount / initial_amount).powf(1.0 / num_of_years) - 1.0) * 100.0
}

// Closed-form breakeven: n = ln(cost / current) / ln(1 + rate). The exact
// fractional solution is reported as-is; the trajectory rounds up to the next
// whole year so its last point is at or past the breakeven line. A tiny rate
// against a large gap can put breakeven thousands of years out, so the
// trajectory is capped at MAX_YEARS points past the start; the reported
// years value is still exact.
pub fn solve_breakeven(
    current_value: f64,
    cost_basis: f64,
    growth_rate_percent: Option<f64>,
) -> BreakevenResult {
    let rate = growth_rate_percent.unwrap_or(0.0) / 100.0;

    let breakeven_change = cost_basis - current_value;
    let breakeven_change_percent = if current_value > 0.0 {
        (cost_basis / current_value - 1.0) * 100.0
    } else {
        0.0
    };

    let years = (cost_basis / current_value).ln() / (1.0 + rate).ln();
    let years_until_breakeven =
        (growth_rate_percent.is_some() && years.is_finite() && years >= 0.0).then_some(years);

    let mut whole_years = years.ceil();
    if !whole_years.is_finite() || whole_years < 0.0 {
        whole_years = 0.0;
    }
    let whole_years = (whole_years as u32).min(MAX_YEARS);

    let mut trajectory = Vec::with_capacity(whole_years as usize + 1);
    for year in 0..=whole_years {
        trajectory.push(current_value * (1.0 + rate).powi(year as i32));
    }

    BreakevenResult {
        breakeven_point: cost_basis,
        breakeven_change,
        breakeven_change_percent,
        years_until_breakeven,
        trajectory,
    }
}
