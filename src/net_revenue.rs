//! 매출에서 유지보수비와 전기 요금을 뺀 순이익, 투자 회수 기간.
use crate::power::monthly_power_cost;
use crate::revenue::{monthly_revenue_per_pc, monthly_revenue_total};
use crate::snapshot::InputSnapshot;

/// 전체 PC 월 유지보수비. 항목이 없으면 0.
pub fn monthly_maintenance_cost(s: &InputSnapshot) -> f64 {
    s.maintenance_per_pc.unwrap_or(0.0) * s.pcs
}

/// 월 순이익. 음수도 의미 있는 결과이므로 자르지 않는다.
pub fn monthly_net_revenue(s: &InputSnapshot) -> f64 {
    monthly_revenue_total(s) - monthly_maintenance_cost(s) - monthly_power_cost(s)
}

/// 자기 자본으로 살 수 있는 PC 대수. 조립 비용이 0 이하이면 0.
pub fn pcs_affordable_from_investment(s: &InputSnapshot) -> u64 {
    if s.pc_build_cost.is_nan() || s.pc_build_cost <= 0.0 {
        return 0;
    }
    let count = (s.invest_amount.unwrap_or(0.0) / s.pc_build_cost).floor();
    if count > 0.0 {
        count as u64
    } else {
        0
    }
}

/// 투자 회수 기간 [개월].
///
/// PC 1대당 월 매출이 0 이하이면 회수가 불가능하다는 뜻으로 `f64::INFINITY`를 반환한다.
pub fn roi_months(s: &InputSnapshot) -> f64 {
    let per_pc = monthly_revenue_per_pc(s);
    if per_pc <= 0.0 {
        return f64::INFINITY;
    }
    s.pc_build_cost / per_pc
}
