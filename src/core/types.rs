use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxSystem {
    ShortTerm,
    LongTerm,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxKind {
    Federal,
    Niit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub rate: f64,
    pub width: f64,
}

// Bands are ordered by ascending cumulative threshold starting at 0; income
// beyond the sum of all explicit widths is taxed at top_rate. Construction is
// the only way to set the table; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct BracketTable {
    bands: Vec<Band>,
    top_rate: f64,
}

impl BracketTable {
    pub fn new(bands: Vec<Band>, top_rate: f64) -> Self {
        Self { bands, top_rate }
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn top_rate(&self) -> f64 {
        self.top_rate
    }

    pub fn explicit_width(&self) -> f64 {
        self.bands.iter().map(|band| band.width).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    pub federal_tax: f64,
    pub niit: f64,
    pub total_tax: f64,
    pub effective_rate_percent: f64,
    pub after_tax_amount: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxChartBar {
    pub tax_system: TaxSystem,
    pub tax_kind: TaxKind,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxComparison {
    pub capital_gain: f64,
    pub short_term: TaxResult,
    pub long_term: TaxResult,
    // Federal-only savings: NIIT is identical on both sides and cancels.
    pub federal_tax_savings: f64,
    pub chart_data: Vec<TaxChartBar>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub annual_values: Vec<f64>,
    pub final_value: Option<f64>,
}

impl ProjectionResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_values(annual_values: Vec<f64>) -> Self {
        let final_value = annual_values.last().copied();
        Self {
            annual_values,
            final_value,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakevenResult {
    pub breakeven_point: f64,
    pub breakeven_change: f64,
    pub breakeven_change_percent: f64,
    // Exact logarithmic solution, deliberately un-rounded; the trajectory is
    // extended to the next whole year so it crosses the breakeven line, but
    // never carries more than a century of points past the start.
    pub years_until_breakeven: Option<f64>,
    pub trajectory: Vec<f64>,
}
