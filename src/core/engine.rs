use super::types::{Band, BracketTable, TaxChartBar, TaxComparison, TaxKind, TaxResult, TaxSystem};

pub const NIIT_RATE: f64 = 0.038;
// $200,000 statutory single-filer threshold plus the $14,600 standard
// deduction folded into the bracket tables below.
pub const NIIT_INCOME_THRESHOLD: f64 = 214_600.0;

// 2024 single-filer ordinary-income brackets with the standard deduction
// included as a leading 0% band. Applies to short-term capital gains.
const SHORT_TERM_TOP_RATE_2024: f64 = 0.37;
const SHORT_TERM_BANDS_2024: [Band; 7] = [
    Band {
        rate: 0.00,
        width: 14_600.0,
    },
    Band {
        rate: 0.10,
        width: 11_600.0,
    },
    Band {
        rate: 0.12,
        width: 35_550.0,
    },
    Band {
        rate: 0.22,
        width: 53_375.0,
    },
    Band {
        rate: 0.24,
        width: 91_425.0,
    },
    Band {
        rate: 0.32,
        width: 51_775.0,
    },
    Band {
        rate: 0.35,
        width: 365_625.0,
    },
];

// 2024 single-filer long-term capital gains brackets, standard deduction
// included the same way.
const LONG_TERM_TOP_RATE_2024: f64 = 0.20;
const LONG_TERM_BANDS_2024: [Band; 3] = [
    Band {
        rate: 0.00,
        width: 14_600.0,
    },
    Band {
        rate: 0.00,
        width: 47_025.0,
    },
    Band {
        rate: 0.15,
        width: 471_875.0,
    },
];

pub fn short_term_table_2024() -> BracketTable {
    BracketTable::new(SHORT_TERM_BANDS_2024.to_vec(), SHORT_TERM_TOP_RATE_2024)
}

pub fn long_term_table_2024() -> BracketTable {
    BracketTable::new(LONG_TERM_BANDS_2024.to_vec(), LONG_TERM_TOP_RATE_2024)
}

// Stacks other_income underneath the gain: the gain starts at whatever band
// position the other income leaves off, possibly partway through a band, and
// anything past the explicit bands is taxed at the table's top rate.
pub fn tax_on_gain(table: &BracketTable, gain: f64, other_income: f64) -> f64 {
    if gain <= 0.0 {
        return 0.0;
    }

    let bands = table.bands();
    let mut index = bands.len();
    let mut remaining_width = 0.0;
    let mut income = other_income.max(0.0);
    for (i, band) in bands.iter().enumerate() {
        if income >= band.width {
            income -= band.width;
        } else {
            index = i;
            remaining_width = band.width - income;
            break;
        }
    }

    let mut remaining_gain = gain;
    let mut tax = 0.0;
    if index < bands.len() {
        let taxed = remaining_gain.min(remaining_width);
        tax += taxed * bands[index].rate;
        remaining_gain -= taxed;
        index += 1;

        while remaining_gain > 0.0 && index < bands.len() {
            let taxed = remaining_gain.min(bands[index].width);
            tax += taxed * bands[index].rate;
            remaining_gain -= taxed;
            index += 1;
        }
    }

    tax + remaining_gain.max(0.0) * table.top_rate()
}

// NIIT does not distinguish holding period, so one value serves both the
// short-term and long-term totals.
pub fn niit(gain: f64, other_income: f64) -> f64 {
    ((gain + other_income) - NIIT_INCOME_THRESHOLD).max(0.0) * NIIT_RATE
}

pub fn compare_capital_gains(cost_basis: f64, sale_value: f64, other_income: f64) -> TaxComparison {
    let gain = sale_value - cost_basis;
    let niit_amount = niit(gain, other_income);

    let short_term = build_tax_result(
        tax_on_gain(&short_term_table_2024(), gain, other_income),
        niit_amount,
        gain,
        sale_value,
    );
    let long_term = build_tax_result(
        tax_on_gain(&long_term_table_2024(), gain, other_income),
        niit_amount,
        gain,
        sale_value,
    );

    let chart_data = vec![
        TaxChartBar {
            tax_system: TaxSystem::ShortTerm,
            tax_kind: TaxKind::Federal,
            amount: short_term.federal_tax,
        },
        TaxChartBar {
            tax_system: TaxSystem::ShortTerm,
            tax_kind: TaxKind::Niit,
            amount: niit_amount,
        },
        TaxChartBar {
            tax_system: TaxSystem::LongTerm,
            tax_kind: TaxKind::Federal,
            amount: long_term.federal_tax,
        },
        TaxChartBar {
            tax_system: TaxSystem::LongTerm,
            tax_kind: TaxKind::Niit,
            amount: niit_amount,
        },
    ];

    TaxComparison {
        capital_gain: gain,
        federal_tax_savings: short_term.federal_tax - long_term.federal_tax,
        short_term,
        long_term,
        chart_data,
    }
}

fn build_tax_result(federal_tax: f64, niit: f64, gain: f64, sale_value: f64) -> TaxResult {
    let total_tax = federal_tax + niit;
    let effective_rate_percent = if gain > 0.0 {
        total_tax / gain * 100.0
    } else {
        0.0
    };

    TaxResult {
        federal_tax,
        niit,
        total_tax,
        effective_rate_percent,
        after_tax_amount: sale_value - total_tax,
    }
}
