mod calculators;
mod engine;
mod solver;
mod types;
pub mod validate;

pub use calculators::{
    BreakevenCalculator, CapitalGainsCalculator, FutureValueCalculator, HistoricalCagrCalculator,
};
pub use engine::{
    NIIT_INCOME_THRESHOLD, NIIT_RATE, compare_capital_gains, long_term_table_2024, niit,
    short_term_table_2024, tax_on_gain,
};
pub use solver::{historical_cagr_percent, project_future_value, solve_breakeven};
pub use types::{
    Band, BracketTable, BreakevenResult, ProjectionResult, TaxChartBar, TaxComparison, TaxKind,
    TaxResult, TaxSystem,
};
