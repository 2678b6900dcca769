//! 사용 시간과 요금으로 월 매출을 계산한다.
use crate::snapshot::{InputSnapshot, DAYS};

/// 평일/주말 매출 분해 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekdayWeekendRevenue {
    pub weekday: f64,
    pub weekend: f64,
}

impl WeekdayWeekendRevenue {
    pub fn total(&self) -> f64 {
        self.weekday + self.weekend
    }
}

/// 12개월 누적 매출과 단순 이익.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwelveMonthProfit {
    pub total_12m_revenue: f64,
    pub profit_12m: f64,
}

/// PC 1대의 월 가동 시간. 범위 제한은 하지 않는다.
pub fn total_monthly_hours_per_pc(s: &InputSnapshot) -> f64 {
    s.weekday_hours * f64::from(DAYS.weekdays) + s.weekend_hours * f64::from(DAYS.weekends)
}

/// 전체 월 매출 = 월 가동 시간 × 시간당 요금 × PC 대수
///
/// 평일/주말 기여분의 합으로 계산하므로 [`weekday_weekend_revenue`]의 두 값을
/// 더하면 항상 이 값과 정확히 같다.
pub fn monthly_revenue_total(s: &InputSnapshot) -> f64 {
    weekday_weekend_revenue(s).total()
}

/// PC 1대당 월 매출. PC가 없으면 0.
pub fn monthly_revenue_per_pc(s: &InputSnapshot) -> f64 {
    if s.pcs > 0.0 {
        monthly_revenue_total(s) / s.pcs
    } else {
        0.0
    }
}

/// 시나리오 비교용 별칭.
pub fn revenue_per_pc(s: &InputSnapshot) -> f64 {
    monthly_revenue_per_pc(s)
}

/// 월 매출을 평일/주말 기여분으로 나눈다.
pub fn weekday_weekend_revenue(s: &InputSnapshot) -> WeekdayWeekendRevenue {
    let per_hour = s.hourly_rate * s.pcs;
    WeekdayWeekendRevenue {
        weekday: s.weekday_hours * f64::from(DAYS.weekdays) * per_hour,
        weekend: s.weekend_hours * f64::from(DAYS.weekends) * per_hour,
    }
}

/// 전체 PC의 월 누적 게임 시간 [h]
pub fn total_gaming_hours_per_month(s: &InputSnapshot) -> f64 {
    s.pcs * total_monthly_hours_per_pc(s)
}

/// 월 예상 세션(매치) 수. 세션 길이가 없거나 0 이하이면 0.
pub fn matches_per_month(s: &InputSnapshot) -> f64 {
    match s.session_minutes {
        Some(minutes) if minutes > 0.0 => {
            let total_minutes = total_gaming_hours_per_month(s) * 60.0;
            (total_minutes / minutes).floor()
        }
        _ => 0.0,
    }
}

/// 12개월 매출과 초기 설비비를 뺀 이익.
pub fn profit_12m(s: &InputSnapshot) -> TwelveMonthProfit {
    let total_12m_revenue = 12.0 * monthly_revenue_total(s);
    TwelveMonthProfit {
        total_12m_revenue,
        profit_12m: total_12m_revenue - s.pc_build_cost * s.pcs,
    }
}
