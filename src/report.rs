//! 스냅샷 하나에 대한 주요 지표 묶음과 표시 보조 함수.
use crate::financing::{snapshot_loan_totals, LoanTotals};
use crate::net_revenue::{
    monthly_maintenance_cost, monthly_net_revenue, pcs_affordable_from_investment, roi_months,
};
use crate::power::{monthly_power_usage, PowerUsage};
use crate::revenue::{
    matches_per_month, monthly_revenue_per_pc, monthly_revenue_total, profit_12m,
    total_gaming_hours_per_month, weekday_weekend_revenue, TwelveMonthProfit,
    WeekdayWeekendRevenue,
};
use crate::snapshot::InputSnapshot;
use crate::utilization::utilization_rate;

/// KPI 카드와 재무 요약 패널에 들어가는 값.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub monthly_revenue: f64,
    pub revenue_per_pc: f64,
    pub roi_months: f64,
    pub utilization_pct: f64,
    pub split: WeekdayWeekendRevenue,
    pub power: PowerUsage,
    pub maintenance: f64,
    pub net_revenue: f64,
    pub loan: LoanTotals,
    pub pcs_affordable: u64,
    pub gaming_hours: f64,
    pub matches: f64,
    pub twelve_months: TwelveMonthProfit,
}

impl Dashboard {
    /// 모든 지표를 새로 계산한다. 캐시하지 않는다.
    pub fn compute(s: &InputSnapshot) -> Self {
        Self {
            monthly_revenue: monthly_revenue_total(s),
            revenue_per_pc: monthly_revenue_per_pc(s),
            roi_months: roi_months(s),
            utilization_pct: utilization_rate(s),
            split: weekday_weekend_revenue(s),
            power: monthly_power_usage(s),
            maintenance: monthly_maintenance_cost(s),
            net_revenue: monthly_net_revenue(s),
            loan: snapshot_loan_totals(s),
            pcs_affordable: pcs_affordable_from_investment(s),
            gaming_hours: total_gaming_hours_per_month(s),
            matches: matches_per_month(s),
            twelve_months: profit_12m(s),
        }
    }
}

/// ROI 개월 수를 소수 한 자리로 표시한다. 회수 불가(무한대)는 "∞".
pub fn format_roi_months(months: f64) -> String {
    if months.is_finite() {
        format!("{months:.1}")
    } else {
        "∞".to_string()
    }
}

/// 비교 화면처럼 값이 없을 수 있는 곳에서 쓰는 대시 표시.
pub fn or_dash<T>(value: Option<T>, render: impl FnOnce(T) -> String) -> String {
    value.map(render).unwrap_or_else(|| "—".to_string())
}
