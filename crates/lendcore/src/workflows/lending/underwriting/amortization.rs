use super::UnderwritingError;

/// Fixed-rate monthly principal-and-interest payment:
/// `L * r(1+r)^n / ((1+r)^n - 1)` with monthly rate `r` and `n` monthly
/// periods. A zero rate degenerates to straight-line `L / n`, which must be
/// special-cased because the standard formula divides by zero there.
///
/// `annual_rate_pct` is a percentage (7.25 means 7.25% per year). The result
/// is unrounded; callers own presentation rounding.
pub fn monthly_payment(
    loan_amount: f64,
    annual_rate_pct: f64,
    term_years: u32,
) -> Result<f64, UnderwritingError> {
    if term_years == 0 {
        return Err(UnderwritingError::InvalidTerm);
    }

    let periods = term_years * 12;
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;

    if monthly_rate == 0.0 {
        return Ok(loan_amount / f64::from(periods));
    }

    let growth = (1.0 + monthly_rate).powi(periods as i32);
    Ok(loan_amount * monthly_rate * growth / (growth - 1.0))
}
