// Input validation for calculator fields, with the prompt strings shown next
// to a field that fails its check. Absent fields always get an empty prompt.

pub const MAX_AMOUNT: u64 = 1_000_000_000;
pub const MAX_YEARS: u32 = 100;
pub const MAX_RATE_PERCENT: f64 = 500.0;
pub const MAX_RATE_DECIMALS: u32 = 4;

pub const AMOUNT_PROMPT: &str = "Amount should be > $0 but <= $1 billion";
pub const NON_NEGATIVE_AMOUNT_PROMPT: &str = "Amount should be >= $0 but <= $1 billion";
pub const OPTIONAL_AMOUNT_PROMPT: &str = "If provided, amount should be > $0 but <= $1 billion";
pub const YEARS_PROMPT: &str = "Years should be > 0 but <= 100";
pub const RATE_PROMPT: &str = "Rate should be > 0 but <= 500";
pub const OPTIONAL_RATE_PROMPT: &str = "If provided, rate should be > 0 but <= 500";
pub const COST_NOT_BELOW_SALE_PROMPT: &str = "Cost basis should be < sale value";
pub const VALUE_NOT_BELOW_COST_PROMPT: &str = "Current value should be < cost basis";
pub const END_NOT_ABOVE_INITIAL_PROMPT: &str = "Final value should be > initial value";

pub fn amount_in_range(amount: u64) -> bool {
    (1..=MAX_AMOUNT).contains(&amount)
}

pub fn income_in_range(amount: u64) -> bool {
    amount <= MAX_AMOUNT
}

pub fn years_in_range(years: u32) -> bool {
    (1..=MAX_YEARS).contains(&years)
}

pub fn rate_in_range(rate: f64) -> bool {
    rate.is_finite()
        && rate > 0.0
        && rate <= MAX_RATE_PERCENT
        && has_at_most_four_decimals(rate)
}

// Rates are entered with up to four decimal places. Scaling by 10^4 and
// comparing against the nearest integer tolerates float noise without
// admitting a genuine fifth decimal.
fn has_at_most_four_decimals(rate: f64) -> bool {
    let scaled = rate * 10f64.powi(MAX_RATE_DECIMALS as i32);
    (scaled - scaled.round()).abs() < 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_accepts_one_through_one_billion() {
        assert!(!amount_in_range(0));
        assert!(amount_in_range(1));
        assert!(amount_in_range(MAX_AMOUNT));
        assert!(!amount_in_range(MAX_AMOUNT + 1));
    }

    #[test]
    fn income_additionally_accepts_zero() {
        assert!(income_in_range(0));
        assert!(income_in_range(MAX_AMOUNT));
        assert!(!income_in_range(MAX_AMOUNT + 1));
    }

    #[test]
    fn years_accept_one_through_one_hundred() {
        assert!(!years_in_range(0));
        assert!(years_in_range(1));
        assert!(years_in_range(100));
        assert!(!years_in_range(101));
    }

    #[test]
    fn rate_rejects_out_of_range_values() {
        assert!(!rate_in_range(0.0));
        assert!(!rate_in_range(-1.0));
        assert!(rate_in_range(0.0001));
        assert!(rate_in_range(500.0));
        assert!(!rate_in_range(500.0001));
        assert!(!rate_in_range(f64::NAN));
        assert!(!rate_in_range(f64::INFINITY));
    }

    #[test]
    fn rate_allows_at_most_four_decimal_places() {
        assert!(rate_in_range(10.0));
        assert!(rate_in_range(10.1));
        assert!(rate_in_range(10.1234));
        assert!(!rate_in_range(10.12345));
        assert!(!rate_in_range(0.00001));
    }
}
