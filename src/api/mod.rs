use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    BreakevenCalculator, BreakevenResult, CapitalGainsCalculator, FutureValueCalculator,
    HistoricalCagrCalculator, ProjectionResult, TaxComparison,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiCalculatorKind {
    #[serde(alias = "capitalGains", alias = "capital_gains")]
    CapitalGains,
    #[serde(alias = "futureValue", alias = "future_value")]
    FutureValue,
    #[serde(alias = "historicalCagr", alias = "historical_cagr", alias = "cagr")]
    HistoricalCagr,
    Breakeven,
}

// One flat payload for all calculators; each kind reads the fields it knows
// and ignores the rest.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CalculatePayload {
    calculator: Option<ApiCalculatorKind>,

    cost_basis: Option<u64>,
    sale_value: Option<u64>,
    other_income: Option<u64>,

    current_value: Option<u64>,
    initial_amount: Option<u64>,
    end_amount: Option<u64>,
    monthly_contribution: Option<u64>,
    num_of_years: Option<u32>,
    growth_rate: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CapitalGainsResponse {
    all_valid: bool,
    cost_basis_prompt: &'static str,
    sale_value_prompt: &'static str,
    other_income_prompt: &'static str,
    result: Option<TaxComparison>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FutureValueResponse {
    all_valid: bool,
    initial_amount_prompt: &'static str,
    monthly_contribution_prompt: &'static str,
    num_of_years_prompt: &'static str,
    growth_rate_prompt: &'static str,
    result: Option<ProjectionResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoricalCagrResponse {
    all_valid: bool,
    initial_amount_prompt: &'static str,
    num_of_years_prompt: &'static str,
    end_amount_prompt: &'static str,
    result: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BreakevenResponse {
    all_valid: bool,
    current_value_prompt: &'static str,
    cost_basis_prompt: &'static str,
    growth_rate_prompt: &'static str,
    result: Option<BreakevenResult>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn capital_gains_response(payload: &CalculatePayload) -> CapitalGainsResponse {
    let mut calculator = CapitalGainsCalculator::new();
    calculator.set_cost_basis(payload.cost_basis);
    calculator.set_sale_value(payload.sale_value);
    calculator.set_other_income(payload.other_income);

    let all_valid = calculator.all_valid();
    CapitalGainsResponse {
        all_valid,
        cost_basis_prompt: calculator.cost_basis_prompt(),
        sale_value_prompt: calculator.sale_value_prompt(),
        other_income_prompt: calculator.other_income_prompt(),
        result: all_valid.then(|| calculator.comparison().clone()),
    }
}

fn future_value_response(payload: &CalculatePayload) -> FutureValueResponse {
    let mut calculator = FutureValueCalculator::new();
    calculator.set_initial_amount(payload.initial_amount);
    calculator.set_monthly_contribution(payload.monthly_contribution);
    calculator.set_num_of_years(payload.num_of_years);
    calculator.set_growth_rate(payload.growth_rate);

    let all_valid = calculator.all_valid();
    FutureValueResponse {
        all_valid,
        initial_amount_prompt: calculator.initial_amount_prompt(),
        monthly_contribution_prompt: calculator.monthly_contribution_prompt(),
        num_of_years_prompt: calculator.num_of_years_prompt(),
        growth_rate_prompt: calculator.growth_rate_prompt(),
        result: all_valid.then(|| calculator.projection().clone()),
    }
}

fn historical_cagr_response(payload: &CalculatePayload) -> HistoricalCagrResponse {
    let mut calculator = HistoricalCagrCalculator::new();
    calculator.set_initial_amount(payload.initial_amount);
    calculator.set_num_of_years(payload.num_of_years);
    calculator.set_end_amount(payload.end_amount);

    let all_valid = calculator.all_valid();
    HistoricalCagrResponse {
        all_valid,
        initial_amount_prompt: calculator.initial_amount_prompt(),
        num_of_years_prompt: calculator.num_of_years_prompt(),
        end_amount_prompt: calculator.end_amount_prompt(),
        result: if all_valid { calculator.cagr_percent() } else { None },
    }
}

fn breakeven_response(payload: &CalculatePayload) -> BreakevenResponse {
    let mut calculator = BreakevenCalculator::new();
    calculator.set_current_value(payload.current_value);
    calculator.set_cost_basis(payload.cost_basis);
    calculator.set_growth_rate(payload.growth_rate);

    let all_valid = calculator.all_valid();
    BreakevenResponse {
        all_valid,
        current_value_prompt: calculator.current_value_prompt(),
        cost_basis_prompt: calculator.cost_basis_prompt(),
        growth_rate_prompt: calculator.growth_rate_prompt(),
        result: all_valid.then(|| calculator.result().clone()),
    }
}

fn calculate_body(payload: &CalculatePayload) -> Result<serde_json::Value, String> {
    let Some(kind) = payload.calculator else {
        return Err(
            "calculator is required: capital-gains, future-value, historical-cagr, or breakeven"
                .to_string(),
        );
    };

    let body = match kind {
        ApiCalculatorKind::CapitalGains => serde_json::to_value(capital_gains_response(payload)),
        ApiCalculatorKind::FutureValue => serde_json::to_value(future_value_response(payload)),
        ApiCalculatorKind::HistoricalCagr => {
            serde_json::to_value(historical_cagr_response(payload))
        }
        ApiCalculatorKind::Breakeven => serde_json::to_value(breakeven_response(payload)),
    };

    body.map_err(|e| format!("failed to serialize response: {e}"))
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route(
            "/api/calculate",
            get(calculate_get_handler).post(calculate_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("calculator API listening on http://{addr}");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn calculate_get_handler(Query(payload): Query<CalculatePayload>) -> Response {
    calculate_handler_impl(payload).await
}

async fn calculate_post_handler(Json(payload): Json<CalculatePayload>) -> Response {
    calculate_handler_impl(payload).await
}

async fn calculate_handler_impl(payload: CalculatePayload) -> Response {
    match calculate_body(&payload) {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn payload_from_json(json: &str) -> Result<CalculatePayload, String> {
    serde_json::from_str::<CalculatePayload>(json).map_err(|e| format!("Invalid API JSON payload: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn payload_parses_camel_case_keys_and_kind_aliases() {
        let payload = payload_from_json(
            r#"{
              "calculator": "capitalGains",
              "costBasis": 50000,
              "saleValue": 150000,
              "otherIncome": 0
            }"#,
        )
        .expect("json should parse");

        assert_eq!(payload.calculator, Some(ApiCalculatorKind::CapitalGains));
        assert_eq!(payload.cost_basis, Some(50_000));
        assert_eq!(payload.sale_value, Some(150_000));
        assert_eq!(payload.other_income, Some(0));
    }

    #[test]
    fn payload_parses_kebab_case_kinds() {
        for (json, kind) in [
            (r#"{"calculator": "capital-gains"}"#, ApiCalculatorKind::CapitalGains),
            (r#"{"calculator": "future-value"}"#, ApiCalculatorKind::FutureValue),
            (r#"{"calculator": "historical-cagr"}"#, ApiCalculatorKind::HistoricalCagr),
            (r#"{"calculator": "cagr"}"#, ApiCalculatorKind::HistoricalCagr),
            (r#"{"calculator": "breakeven"}"#, ApiCalculatorKind::Breakeven),
        ] {
            let payload = payload_from_json(json).expect("json should parse");
            assert_eq!(payload.calculator, Some(kind));
        }
    }

    #[test]
    fn missing_calculator_kind_is_rejected() {
        let payload = payload_from_json(r#"{"costBasis": 50000}"#).expect("json should parse");
        let err = calculate_body(&payload).expect_err("must reject missing kind");
        assert!(err.contains("calculator is required"));
    }

    #[test]
    fn capital_gains_request_returns_comparison() {
        let payload = payload_from_json(
            r#"{
              "calculator": "capital-gains",
              "costBasis": 50000,
              "saleValue": 150000,
              "otherIncome": 0
            }"#,
        )
        .expect("json should parse");

        let response = capital_gains_response(&payload);
        assert!(response.all_valid);
        let result = response.result.expect("valid inputs produce a result");
        assert_approx(result.capital_gain, 100_000.0);
        assert_approx(result.short_term.federal_tax, 13_841.0);
        assert_approx(result.long_term.federal_tax, 5_756.25);
        assert_eq!(result.chart_data.len(), 4);
    }

    #[test]
    fn invalid_capital_gains_request_withholds_the_result() {
        let payload = payload_from_json(
            r#"{
              "calculator": "capital-gains",
              "costBasis": 200000,
              "saleValue": 150000
            }"#,
        )
        .expect("json should parse");

        let response = capital_gains_response(&payload);
        assert!(!response.all_valid);
        assert!(response.result.is_none());
        assert_eq!(response.cost_basis_prompt, "Cost basis should be < sale value");
        assert_eq!(response.sale_value_prompt, "");
    }

    #[test]
    fn future_value_request_projects_growth() {
        let payload = payload_from_json(
            r#"{
              "calculator": "future-value",
              "initialAmount": 10000,
              "numOfYears": 1,
              "growthRate": 10.0
            }"#,
        )
        .expect("json should parse");

        let response = future_value_response(&payload);
        assert!(response.all_valid);
        let result = response.result.expect("valid inputs produce a result");
        assert_eq!(result.annual_values.len(), 2);
        assert_approx(result.final_value.expect("final value"), 11_000.0);
    }

    #[test]
    fn breakeven_request_without_rate_is_valid() {
        let payload = payload_from_json(
            r#"{
              "calculator": "breakeven",
              "currentValue": 8000,
              "costBasis": 10000
            }"#,
        )
        .expect("json should parse");

        let response = breakeven_response(&payload);
        assert!(response.all_valid);
        let result = response.result.expect("valid inputs produce a result");
        assert_approx(result.breakeven_change_percent, 25.0);
        assert!(result.years_until_breakeven.is_none());
    }

    #[test]
    fn historical_cagr_request_returns_the_rate() {
        let payload = payload_from_json(
            r#"{
              "calculator": "historical-cagr",
              "initialAmount": 10000,
              "numOfYears": 8,
              "endAmount": 21436
            }"#,
        )
        .expect("json should parse");

        let response = historical_cagr_response(&payload);
        assert!(response.all_valid);
        let cagr = response.result.expect("valid inputs produce a result");
        assert!((cagr - 10.0).abs() < 1e-3, "got {cagr}");
    }

    #[test]
    fn response_serialization_uses_camel_case_fields() {
        let payload = payload_from_json(
            r#"{
              "calculator": "capital-gains",
              "costBasis": 50000,
              "saleValue": 150000,
              "otherIncome": 200000
            }"#,
        )
        .expect("json should parse");

        let body = calculate_body(&payload).expect("body should build");
        let json = serde_json::to_string(&body).expect("body should serialize");
        assert!(json.contains("\"allValid\""));
        assert!(json.contains("\"costBasisPrompt\""));
        assert!(json.contains("\"shortTerm\""));
        assert!(json.contains("\"longTerm\""));
        assert!(json.contains("\"federalTaxSavings\""));
        assert!(json.contains("\"chartData\""));
        assert!(json.contains("\"effectiveRatePercent\""));
        assert!(json.contains("\"taxSystem\":\"short-term\""));
        assert!(json.contains("\"taxKind\":\"niit\""));
    }

    #[test]
    fn breakeven_response_serializes_trajectory() {
        let payload = payload_from_json(
            r#"{
              "calculator": "breakeven",
              "currentValue": 8000,
              "costBasis": 10000,
              "growthRate": 10.0
            }"#,
        )
        .expect("json should parse");

        let body = calculate_body(&payload).expect("body should build");
        let json = serde_json::to_string(&body).expect("body should serialize");
        assert!(json.contains("\"breakevenPoint\""));
        assert!(json.contains("\"yearsUntilBreakeven\""));
        assert!(json.contains("\"trajectory\""));
    }
}
