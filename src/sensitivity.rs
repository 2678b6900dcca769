use serde::Serialize;

use crate::net_revenue::roi_months;
use crate::snapshot::InputSnapshot;

/// 섭동 축
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityAxis {
    /// 시간당 요금
    Hourly,
    /// 평일/주말 사용 시간
    Usage,
}

/// 섭동 한 건의 ROI 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityPoint {
    pub label: &'static str,
    pub axis: SensitivityAxis,
    pub roi_months: f64,
}

const DOWN: f64 = 0.8;
const UP: f64 = 1.2;

fn scale_hours(hours: f64, factor: f64) -> f64 {
    (hours * factor).clamp(0.0, 24.0)
}

fn with_rate(s: &InputSnapshot, factor: f64) -> InputSnapshot {
    InputSnapshot {
        hourly_rate: s.hourly_rate * factor,
        ..s.clone()
    }
}

fn with_usage(s: &InputSnapshot, factor: f64) -> InputSnapshot {
    InputSnapshot {
        weekday_hours: scale_hours(s.weekday_hours, factor),
        weekend_hours: scale_hours(s.weekend_hours, factor),
        ..s.clone()
    }
}

/// 요금 ±20%, 사용 시간 ±20%에 대한 ROI 개월 수.
///
/// 순서는 항상 요금 하락, 요금 상승, 사용 감소, 사용 증가이다.
/// 사용 시간은 조정 후 0~24시간으로 자른다.
pub fn sensitivity_roi(s: &InputSnapshot) -> [SensitivityPoint; 4] {
    [
        SensitivityPoint {
            label: "-20% rate",
            axis: SensitivityAxis::Hourly,
            roi_months: roi_months(&with_rate(s, DOWN)),
        },
        SensitivityPoint {
            label: "+20% rate",
            axis: SensitivityAxis::Hourly,
            roi_months: roi_months(&with_rate(s, UP)),
        },
        SensitivityPoint {
            label: "-20% usage",
            axis: SensitivityAxis::Usage,
            roi_months: roi_months(&with_usage(s, DOWN)),
        },
        SensitivityPoint {
            label: "+20% usage",
            axis: SensitivityAxis::Usage,
            roi_months: roi_months(&with_usage(s, UP)),
        },
    ]
}
