use serde::{Deserialize, Serialize};

use crate::currency::Currency;

/// 한 달 평균 영업일 구성. 모든 시간 기반 계산이 이 값을 공유한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDays {
    pub weekdays: u32,
    pub weekends: u32,
}

impl MonthDays {
    /// 한 달 총 일수
    pub const fn total(&self) -> u32 {
        self.weekdays + self.weekends
    }
}

/// 평균적인 한 달: 평일 22일, 주말 8일.
pub const DAYS: MonthDays = MonthDays {
    weekdays: 22,
    weekends: 8,
};

/// 사업 파라미터 스냅샷. 계산 엔진의 유일한 입력이며 제자리에서 수정하지 않는다.
///
/// 선택 항목은 `Option`으로 표현한다. "없음"과 "0"은 타입 수준에서 구분하며,
/// 기본값 처리는 각 계산 함수가 문서화한 대로 따른다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSnapshot {
    /// PC 1대 조립 비용 [통화 단위]
    pub pc_build_cost: f64,
    /// 평일 하루 평균 가동 시간 [h]
    pub weekday_hours: f64,
    /// 주말 하루 평균 가동 시간 [h]
    pub weekend_hours: f64,
    /// PC 대수
    pub pcs: f64,
    /// PC 1대 시간당 요금
    pub hourly_rate: f64,
    /// 표시용 통화. 계산에는 영향이 없다.
    pub currency: Currency,
    /// 평균 세션 길이 [분]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_minutes: Option<f64>,
    /// PC 1대 평균 소비 전력 [W]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pc_wattage: Option<f64>,
    /// 전기 요금 [통화/kWh]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electricity_rate: Option<f64>,
    /// 자기 자본 투자액
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invest_amount: Option<f64>,
    /// PC 1대 월 유지보수비
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_per_pc: Option<f64>,
    /// 대출 원금
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<f64>,
    /// 연 이자율 [%]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_rate_annual: Option<f64>,
    /// 대출 기간 [개월]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_term_months: Option<f64>,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            pc_build_cost: 120_000.0,
            weekday_hours: 6.0,
            weekend_hours: 10.0,
            pcs: 10.0,
            hourly_rate: 50.0,
            currency: Currency::Inr,
            session_minutes: None,
            pc_wattage: None,
            electricity_rate: None,
            invest_amount: None,
            maintenance_per_pc: None,
            loan_amount: None,
            loan_rate_annual: None,
            loan_term_months: None,
        }
    }
}

/// 스냅샷 부분 갱신 요청.
///
/// 필수 항목은 `Some`일 때만 덮어쓴다. 선택 항목은 `Some(Some(v))`로 설정,
/// `Some(None)`으로 해제하며, `None`이면 기존 값을 유지한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputPatch {
    pub pc_build_cost: Option<f64>,
    pub weekday_hours: Option<f64>,
    pub weekend_hours: Option<f64>,
    pub pcs: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub currency: Option<Currency>,
    pub session_minutes: Option<Option<f64>>,
    pub pc_wattage: Option<Option<f64>>,
    pub electricity_rate: Option<Option<f64>>,
    pub invest_amount: Option<Option<f64>>,
    pub maintenance_per_pc: Option<Option<f64>>,
    pub loan_amount: Option<Option<f64>>,
    pub loan_rate_annual: Option<Option<f64>>,
    pub loan_term_months: Option<Option<f64>>,
}

impl InputPatch {
    /// 변경 항목이 하나도 없는지 확인한다.
    pub fn is_empty(&self) -> bool {
        *self == InputPatch::default()
    }
}

impl InputSnapshot {
    /// 부분 갱신을 병합한 새 스냅샷을 만든다. 값 검증은 하지 않는다.
    pub fn update(&self, patch: &InputPatch) -> InputSnapshot {
        InputSnapshot {
            pc_build_cost: patch.pc_build_cost.unwrap_or(self.pc_build_cost),
            weekday_hours: patch.weekday_hours.unwrap_or(self.weekday_hours),
            weekend_hours: patch.weekend_hours.unwrap_or(self.weekend_hours),
            pcs: patch.pcs.unwrap_or(self.pcs),
            hourly_rate: patch.hourly_rate.unwrap_or(self.hourly_rate),
            currency: patch.currency.unwrap_or(self.currency),
            session_minutes: patch.session_minutes.unwrap_or(self.session_minutes),
            pc_wattage: patch.pc_wattage.unwrap_or(self.pc_wattage),
            electricity_rate: patch.electricity_rate.unwrap_or(self.electricity_rate),
            invest_amount: patch.invest_amount.unwrap_or(self.invest_amount),
            maintenance_per_pc: patch.maintenance_per_pc.unwrap_or(self.maintenance_per_pc),
            loan_amount: patch.loan_amount.unwrap_or(self.loan_amount),
            loan_rate_annual: patch.loan_rate_annual.unwrap_or(self.loan_rate_annual),
            loan_term_months: patch.loan_term_months.unwrap_or(self.loan_term_months),
        }
    }
}
