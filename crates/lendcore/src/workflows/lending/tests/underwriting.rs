use super::common::*;
use crate::workflows::lending::underwriting::{
    DscrRequest, DscrStatus, FixFlipRequest, FlipVerdict, UnderwritingError,
};

#[test]
fn benchmark_rental_passes_coverage() {
    let analysis = engine()
        .coverage(&benchmark_dscr_request())
        .expect("coverage computes");

    assert_eq!(analysis.p_and_i, 1_910);
    assert_eq!(analysis.monthly_debt, 2_380);
    assert_eq!(analysis.dscr, 1.34);
    assert_eq!(analysis.status, DscrStatus::Pass);
}

#[test]
fn thin_rent_fails_coverage() {
    let mut request = benchmark_dscr_request();
    request.rent = 1_500.0;

    let analysis = engine().coverage(&request).expect("coverage computes");

    assert!(analysis.dscr < 1.10, "dscr was {}", analysis.dscr);
    assert_eq!(analysis.status, DscrStatus::Fail);
}

#[test]
fn coverage_at_threshold_passes() {
    // monthly debt is exactly 2,000 at zero rate, so rent of 2,200 lands
    // the ratio exactly on the 1.10 policy line.
    let request = DscrRequest {
        loan_amount: 240_000.0,
        interest_rate: 0.0,
        term_years: 10,
        rent: 2_200.0,
        taxes: 0.0,
        insurance: 0.0,
    };

    let analysis = engine().coverage(&request).expect("coverage computes");

    assert_eq!(analysis.monthly_debt, 2_000);
    assert_eq!(analysis.dscr, 1.10);
    assert_eq!(analysis.status, DscrStatus::Pass);
}

#[test]
fn taxes_and_insurance_default_to_zero() {
    let request = DscrRequest {
        loan_amount: 280_000.0,
        interest_rate: 7.25,
        term_years: 30,
        rent: 3_200.0,
        taxes: 0.0,
        insurance: 0.0,
    };

    let analysis = engine().coverage(&request).expect("coverage computes");

    assert_eq!(analysis.p_and_i, analysis.monthly_debt);
}

#[test]
fn zero_debt_service_is_rejected() {
    let request = DscrRequest {
        loan_amount: 0.0,
        interest_rate: 0.0,
        term_years: 30,
        rent: 1_800.0,
        taxes: 0.0,
        insurance: 0.0,
    };

    match engine().coverage(&request) {
        Err(UnderwritingError::ZeroDebtService) => {}
        other => panic!("expected zero debt service rejection, got {other:?}"),
    }
}

#[test]
fn zero_term_is_surfaced_from_coverage() {
    let mut request = benchmark_dscr_request();
    request.term_years = 0;

    match engine().coverage(&request) {
        Err(UnderwritingError::InvalidTerm) => {}
        other => panic!("expected invalid term, got {other:?}"),
    }
}

#[test]
fn benchmark_flip_is_marginal() {
    let analysis = engine()
        .flip_returns(&benchmark_flip_request())
        .expect("returns compute");

    assert_eq!(analysis.total_basis, 300_000);
    assert_eq!(analysis.total_holding, 6_000);
    assert_eq!(analysis.profit, 34_000);
    assert_eq!(analysis.roi, 11.3);
    assert_eq!(analysis.verdict, FlipVerdict::Marginal);
}

#[test]
fn high_arv_flip_is_strong() {
    let mut request = benchmark_flip_request();
    request.arv = 400_000.0;

    let analysis = engine().flip_returns(&request).expect("returns compute");

    assert!(analysis.roi > 20.0, "roi was {}", analysis.roi);
    assert_eq!(analysis.verdict, FlipVerdict::Strong);
}

#[test]
fn low_arv_flip_is_weak() {
    let mut request = benchmark_flip_request();
    request.arv = 310_000.0;

    let analysis = engine().flip_returns(&request).expect("returns compute");

    assert!(analysis.roi < 10.0, "roi was {}", analysis.roi);
    assert_eq!(analysis.verdict, FlipVerdict::Weak);
}

#[test]
fn verdict_boundaries_are_marginal() {
    // ROI of exactly 20.0: 100k basis, 20k profit, no holding drag.
    let upper = FixFlipRequest {
        purchase_price: 100_000.0,
        rehab_budget: 0.0,
        arv: 120_000.0,
        holding_months: 1,
        monthly_costs: 0.0,
    };
    // ROI of exactly 10.0.
    let lower = FixFlipRequest {
        purchase_price: 100_000.0,
        rehab_budget: 0.0,
        arv: 110_000.0,
        holding_months: 1,
        monthly_costs: 0.0,
    };

    let upper_analysis = engine().flip_returns(&upper).expect("returns compute");
    let lower_analysis = engine().flip_returns(&lower).expect("returns compute");

    assert_eq!(upper_analysis.roi, 20.0);
    assert_eq!(upper_analysis.verdict, FlipVerdict::Marginal);
    assert_eq!(lower_analysis.roi, 10.0);
    assert_eq!(lower_analysis.verdict, FlipVerdict::Marginal);
}

#[test]
fn omitted_holding_period_defaults_to_six_months() {
    let mut request = benchmark_flip_request();
    request.holding_months = 0;

    let analysis = engine().flip_returns(&request).expect("returns compute");

    assert_eq!(analysis.total_holding, 6_000);
}

#[test]
fn underwater_flip_reports_negative_profit() {
    let request = FixFlipRequest {
        purchase_price: 240_000.0,
        rehab_budget: 60_000.0,
        arv: 290_000.0,
        holding_months: 6,
        monthly_costs: 1_000.0,
    };

    let analysis = engine().flip_returns(&request).expect("returns compute");

    assert_eq!(analysis.profit, -16_000);
    assert_eq!(analysis.verdict, FlipVerdict::Weak);
}

#[test]
fn zero_basis_is_rejected() {
    let request = FixFlipRequest {
        purchase_price: 0.0,
        rehab_budget: 0.0,
        arv: 120_000.0,
        holding_months: 6,
        monthly_costs: 500.0,
    };

    match engine().flip_returns(&request) {
        Err(UnderwritingError::ZeroBasis) => {}
        other => panic!("expected zero basis rejection, got {other:?}"),
    }
}

#[test]
fn evaluators_are_idempotent() {
    let engine = engine();
    let dscr_request = benchmark_dscr_request();
    let flip_request = benchmark_flip_request();

    let first_coverage = engine.coverage(&dscr_request).expect("coverage computes");
    let second_coverage = engine.coverage(&dscr_request).expect("coverage computes");
    let first_flip = engine.flip_returns(&flip_request).expect("returns compute");
    let second_flip = engine.flip_returns(&flip_request).expect("returns compute");

    assert_eq!(first_coverage, second_coverage);
    assert_eq!(first_flip, second_flip);
}
