use crate::revenue::total_monthly_hours_per_pc;
use crate::snapshot::{InputSnapshot, DAYS};

/// 하루 평균 점유율(%)을 계산한다.
///
/// 입력 시간이 24시간을 넘거나 음수여도 결과는 0~100%로 포화시킨다.
pub fn utilization_rate(s: &InputSnapshot) -> f64 {
    let avg_per_day = total_monthly_hours_per_pc(s) / f64::from(DAYS.total());
    let pct = (avg_per_day / 24.0) * 100.0;
    pct.clamp(0.0, 100.0)
}
