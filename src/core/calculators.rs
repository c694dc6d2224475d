//! Stateful calculators that recompute their results whenever an input is
//! set. Inputs are optional; absent fields are treated as zero for the
//! computation and never produce a prompt. Validity only gates whether the
//! result should be presented, the numbers themselves are always kept
//! current and finite.

use super::engine::compare_capital_gains;
use super::solver::{historical_cagr_percent, project_future_value, solve_breakeven};
use super::types::{BreakevenResult, ProjectionResult, TaxComparison};
use super::validate;

#[derive(Debug, Clone)]
pub struct CapitalGainsCalculator {
    cost_basis: Option<u64>,
    sale_value: Option<u64>,
    other_income: Option<u64>,
    comparison: TaxComparison,
}

impl Default for CapitalGainsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl CapitalGainsCalculator {
    pub fn new() -> Self {
        Self {
            cost_basis: None,
            sale_value: None,
            other_income: None,
            comparison: compare_capital_gains(0.0, 0.0, 0.0),
        }
    }

    pub fn set_cost_basis(&mut self, value: Option<u64>) {
        self.cost_basis = value;
        self.recompute();
    }

    pub fn set_sale_value(&mut self, value: Option<u64>) {
        self.sale_value = value;
        self.recompute();
    }

    pub fn set_other_income(&mut self, value: Option<u64>) {
        self.other_income = value;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.comparison = compare_capital_gains(
            self.cost_basis.unwrap_or(0) as f64,
            self.sale_value.unwrap_or(0) as f64,
            self.other_income.unwrap_or(0) as f64,
        );
    }

    pub fn comparison(&self) -> &TaxComparison {
        &self.comparison
    }

    fn cost_basis_in_range(&self) -> bool {
        validate::amount_in_range(self.cost_basis.unwrap_or(0))
    }

    fn sale_value_in_range(&self) -> bool {
        validate::amount_in_range(self.sale_value.unwrap_or(0))
    }

    fn other_income_in_range(&self) -> bool {
        validate::income_in_range(self.other_income.unwrap_or(0))
    }

    fn cost_less_than_sale(&self) -> bool {
        self.cost_basis.unwrap_or(0) < self.sale_value.unwrap_or(0)
    }

    pub fn all_valid(&self) -> bool {
        self.cost_basis_in_range()
            && self.cost_less_than_sale()
            && self.sale_value_in_range()
            && self.other_income_in_range()
    }

    pub fn cost_basis_prompt(&self) -> &'static str {
        if self.cost_basis.is_none() || (self.cost_basis_in_range() && self.cost_less_than_sale()) {
            ""
        } else if self.cost_basis_in_range() {
            validate::COST_NOT_BELOW_SALE_PROMPT
        } else {
            validate::AMOUNT_PROMPT
        }
    }

    pub fn sale_value_prompt(&self) -> &'static str {
        if self.sale_value.is_none() || self.sale_value_in_range() {
            ""
        } else {
            validate::AMOUNT_PROMPT
        }
    }

    pub fn other_income_prompt(&self) -> &'static str {
        if self.other_income.is_none() || self.other_income_in_range() {
            ""
        } else {
            validate::NON_NEGATIVE_AMOUNT_PROMPT
        }
    }
}

#[derive(Debug, Clone)]
pub struct FutureValueCalculator {
    initial_amount: Option<u64>,
    monthly_contribution: Option<u64>,
    num_of_years: Option<u32>,
    growth_rate: Option<f64>,
    projection: ProjectionResult,
}

impl Default for FutureValueCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl FutureValueCalculator {
    pub fn new() -> Self {
        Self {
            initial_amount: None,
            monthly_contribution: None,
            num_of_years: None,
            growth_rate: None,
            projection: ProjectionResult::empty(),
        }
    }

    pub fn set_initial_amount(&mut self, value: Option<u64>) {
        self.initial_amount = value;
        self.recompute();
    }

    pub fn set_monthly_contribution(&mut self, value: Option<u64>) {
        self.monthly_contribution = value;
        self.recompute();
    }

    pub fn set_num_of_years(&mut self, value: Option<u32>) {
        self.num_of_years = value;
        self.recompute();
    }

    pub fn set_growth_rate(&mut self, value: Option<f64>) {
        self.growth_rate = value;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.projection = project_future_value(
            self.initial_amount.unwrap_or(0) as f64,
            self.monthly_contribution.unwrap_or(0) as f64,
            self.growth_rate.unwrap_or(0.0),
            self.num_of_years.unwrap_or(0),
        );
    }

    pub fn projection(&self) -> &ProjectionResult {
        &self.projection
    }

    fn initial_amount_in_range(&self) -> bool {
        validate::amount_in_range(self.initial_amount.unwrap_or(0))
    }

    fn monthly_contribution_in_range(&self) -> bool {
        validate::amount_in_range(self.monthly_contribution.unwrap_or(0))
    }

    fn num_of_years_in_range(&self) -> bool {
        validate::years_in_range(self.num_of_years.unwrap_or(0))
    }

    fn growth_rate_in_range(&self) -> bool {
        validate::rate_in_range(self.growth_rate.unwrap_or(0.0))
    }

    // The monthly contribution is the only optional input here: leaving it
    // out is fine, providing it subjects it to the amount range.
    pub fn all_valid(&self) -> bool {
        self.initial_amount_in_range()
            && (self.monthly_contribution.is_none() || self.monthly_contribution_in_range())
            && self.num_of_years_in_range()
            && self.growth_rate_in_range()
    }

    pub fn initial_amount_prompt(&self) -> &'static str {
        if self.initial_amount.is_none() || self.initial_amount_in_range() {
            ""
        } else {
            validate::AMOUNT_PROMPT
        }
    }

    pub fn monthly_contribution_prompt(&self) -> &'static str {
        if self.monthly_contribution.is_none() || self.monthly_contribution_in_range() {
            ""
        } else {
            validate::OPTIONAL_AMOUNT_PROMPT
        }
    }

    pub fn num_of_years_prompt(&self) -> &'static str {
        if self.num_of_years.is_none() || self.num_of_years_in_range() {
            ""
        } else {
            validate::YEARS_PROMPT
        }
    }

    pub fn growth_rate_prompt(&self) -> &'static str {
        if self.growth_rate.is_none() || self.growth_rate_in_range() {
            ""
        } else {
            validate::RATE_PROMPT
        }
    }
}

#[derive(Debug, Clone)]
pub struct BreakevenCalculator {
    current_value: Option<u64>,
    cost_basis: Option<u64>,
    growth_rate: Option<f64>,
    result: BreakevenResult,
}

impl Default for BreakevenCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl BreakevenCalculator {
    pub fn new() -> Self {
        Self {
            current_value: None,
            cost_basis: None,
            growth_rate: None,
            result: solve_breakeven(0.0, 0.0, None),
        }
    }

    pub fn set_current_value(&mut self, value: Option<u64>) {
        self.current_value = value;
        self.recompute();
    }

    pub fn set_cost_basis(&mut self, value: Option<u64>) {
        self.cost_basis = value;
        self.recompute();
    }

    pub fn set_growth_rate(&mut self, value: Option<f64>) {
        self.growth_rate = value;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.result = solve_breakeven(
            self.current_value.unwrap_or(0) as f64,
            self.cost_basis.unwrap_or(0) as f64,
            self.growth_rate,
        );
    }

    pub fn result(&self) -> &BreakevenResult {
        &self.result
    }

    fn current_value_in_range(&self) -> bool {
        validate::amount_in_range(self.current_value.unwrap_or(0))
    }

    fn cost_basis_in_range(&self) -> bool {
        validate::amount_in_range(self.cost_basis.unwrap_or(0))
    }

    fn current_less_than_cost(&self) -> bool {
        self.current_value.unwrap_or(0) < self.cost_basis.unwrap_or(0)
    }

    fn growth_rate_in_range(&self) -> bool {
        validate::rate_in_range(self.growth_rate.unwrap_or(0.0))
    }

    pub fn all_valid(&self) -> bool {
        self.current_value_in_range()
            && self.current_less_than_cost()
            && self.cost_basis_in_range()
            && (self.growth_rate.is_none() || self.growth_rate_in_range())
    }

    pub fn current_value_prompt(&self) -> &'static str {
        if self.current_value.is_none()
            || (self.current_value_in_range() && self.current_less_than_cost())
        {
            ""
        } else if self.current_value_in_range() {
            validate::VALUE_NOT_BELOW_COST_PROMPT
        } else {
            validate::AMOUNT_PROMPT
        }
    }

    pub fn cost_basis_prompt(&self) -> &'static str {
        if self.cost_basis.is_none() || self.cost_basis_in_range() {
            ""
        } else {
            validate::AMOUNT_PROMPT
        }
    }

    pub fn growth_rate_prompt(&self) -> &'static str {
        if self.growth_rate.is_none() || self.growth_rate_in_range() {
            ""
        } else {
            validate::OPTIONAL_RATE_PROMPT
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoricalCagrCalculator {
    initial_amount: Option<u64>,
    num_of_years: Option<u32>,
    end_amount: Option<u64>,
    cagr_percent: Option<f64>,
}

impl Default for HistoricalCagrCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoricalCagrCalculator {
    pub fn new() -> Self {
        let mut calculator = Self {
            initial_amount: None,
            num_of_years: None,
            end_amount: None,
            cagr_percent: None,
        };
        calculator.recompute();
        calculator
    }

    pub fn set_initial_amount(&mut self, value: Option<u64>) {
        self.initial_amount = value;
        self.recompute();
    }

    pub fn set_num_of_years(&mut self, value: Option<u32>) {
        self.num_of_years = value;
        self.recompute();
    }

    pub fn set_end_amount(&mut self, value: Option<u64>) {
        self.end_amount = value;
        self.recompute();
    }

    fn recompute(&mut self) {
        let cagr = historical_cagr_percent(
            self.initial_amount.unwrap_or(0) as f64,
            self.end_amount.unwrap_or(0) as f64,
            self.num_of_years.unwrap_or(0) as f64,
        );
        self.cagr_percent = cagr.is_finite().then_some(cagr);
    }

    pub fn cagr_percent(&self) -> Option<f64> {
        self.cagr_percent
    }

    fn initial_amount_in_range(&self) -> bool {
        validate::amount_in_range(self.initial_amount.unwrap_or(0))
    }

    fn num_of_years_in_range(&self) -> bool {
        validate::years_in_range(self.num_of_years.unwrap_or(0))
    }

    fn end_amount_in_range(&self) -> bool {
        validate::amount_in_range(self.end_amount.unwrap_or(0))
    }

    fn end_greater_than_initial(&self) -> bool {
        self.end_amount.unwrap_or(0) > self.initial_amount.unwrap_or(0)
    }

    pub fn all_valid(&self) -> bool {
        self.initial_amount_in_range()
            && self.num_of_years_in_range()
            && self.end_amount_in_range()
            && self.end_greater_than_initial()
    }

    pub fn initial_amount_prompt(&self) -> &'static str {
        if self.initial_amount.is_none() || self.initial_amount_in_range() {
            ""
        } else {
            validate::AMOUNT_PROMPT
        }
    }

    pub fn num_of_years_prompt(&self) -> &'static str {
        if self.num_of_years.is_none() || self.num_of_years_in_range() {
            ""
        } else {
            validate::YEARS_PROMPT
        }
    }

    pub fn end_amount_prompt(&self) -> &'static str {
        if self.end_amount.is_none() || (self.end_amount_in_range() && self.end_greater_than_initial())
        {
            ""
        } else if self.end_amount_in_range() {
            validate::END_NOT_ABOVE_INITIAL_PROMPT
        } else {
            validate::AMOUNT_PROMPT
        }
    }
}
