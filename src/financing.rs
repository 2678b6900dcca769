//! 원리금 균등 상환 대출 계산.
use crate::snapshot::InputSnapshot;

/// 대출 상환 요약.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoanTotals {
    /// 월 상환액
    pub monthly_payment: f64,
    /// 총 이자 (0 이상)
    pub total_interest: f64,
    /// 총 상환액
    pub total_paid: f64,
}

/// 월 상환액 = P·r / (1 − (1+r)^−n), r = 연이율/100/12
///
/// 원금이나 기간이 0 이하이면 0을 반환한다. 월 이율이 0이면 P/n 으로 단순화한다.
pub fn loan_monthly_payment(principal: f64, annual_rate_pct: f64, months: f64) -> f64 {
    if principal.is_nan() || principal <= 0.0 || months.is_nan() || months <= 0.0 {
        return 0.0;
    }
    let r = annual_rate_pct / 100.0 / 12.0;
    if r == 0.0 || r.is_nan() {
        return principal / months;
    }
    principal * r / (1.0 - (1.0 + r).powf(-months))
}

/// 총 상환액과 총 이자를 계산한다. 반올림 오차로 이자가 음수가 되지 않도록 0에서 자른다.
pub fn loan_totals(principal: f64, annual_rate_pct: f64, months: f64) -> LoanTotals {
    let monthly_payment = loan_monthly_payment(principal, annual_rate_pct, months);
    let term = if months.is_nan() { 0.0 } else { months };
    let total_paid = monthly_payment * term;
    let principal = if principal.is_nan() { 0.0 } else { principal };
    LoanTotals {
        monthly_payment,
        total_interest: (total_paid - principal).max(0.0),
        total_paid,
    }
}

/// 스냅샷의 대출 항목으로 상환 요약을 만든다. 없는 항목은 0으로 본다.
pub fn snapshot_loan_totals(s: &InputSnapshot) -> LoanTotals {
    loan_totals(
        s.loan_amount.unwrap_or(0.0),
        s.loan_rate_annual.unwrap_or(0.0),
        s.loan_term_months.unwrap_or(0.0),
    )
}
