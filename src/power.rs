use crate::revenue::total_monthly_hours_per_pc;
use crate::snapshot::InputSnapshot;

/// 월 전력 사용량과 전기 요금.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUsage {
    /// 월 전력량 [kWh]
    pub kwh: f64,
    /// 월 전기 요금 [통화]
    pub cost: f64,
}

/// 월 전력량 [kWh]. 소비 전력이 없으면 0 W로 본다.
pub fn monthly_power_kwh(s: &InputSnapshot) -> f64 {
    let watt = s.pc_wattage.unwrap_or(0.0);
    watt * s.pcs * total_monthly_hours_per_pc(s) / 1000.0
}

/// 월 전기 요금. 전기 단가가 없으면 0으로 본다.
pub fn monthly_power_cost(s: &InputSnapshot) -> f64 {
    monthly_power_kwh(s) * s.electricity_rate.unwrap_or(0.0)
}

pub fn monthly_power_usage(s: &InputSnapshot) -> PowerUsage {
    PowerUsage {
        kwh: monthly_power_kwh(s),
        cost: monthly_power_cost(s),
    }
}
