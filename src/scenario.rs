//! 두 개의 시나리오 슬롯(A/B)을 저장하고 나란히 비교한다.
//!
//! 슬롯에는 입력 스냅샷만 저장한다. 매출, ROI 같은 파생 값은 읽을 때마다
//! 새로 계산하므로 예전에 저장한 슬롯도 항상 최신 공식으로 비교된다.
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::net_revenue::roi_months;
use crate::revenue::{monthly_revenue_total, revenue_per_pc};
use crate::snapshot::InputSnapshot;

/// 슬롯 식별자
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SlotId {
    A,
    B,
}

impl SlotId {
    pub const ALL: [SlotId; 2] = [SlotId::A, SlotId::B];

    /// 외부 저장소에서 슬롯을 구분하는 고정 키
    pub fn storage_key(&self) -> &'static str {
        match self {
            SlotId::A => "scenario:A",
            SlotId::B => "scenario:B",
        }
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            SlotId::A => "Budget Build",
            SlotId::B => "Premium Build",
        }
    }

    fn index(self) -> usize {
        match self {
            SlotId::A => 0,
            SlotId::B => 1,
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotId::A => f.write_str("A"),
            SlotId::B => f.write_str("B"),
        }
    }
}

/// 이름이 붙은 시나리오 슬롯. 비어 있을 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSlot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<InputSnapshot>,
}

impl ScenarioSlot {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_none()
    }

    /// 저장된 스냅샷으로 비교 지표를 새로 계산한다.
    pub fn metrics(&self) -> ScenarioMetrics {
        match &self.inputs {
            Some(s) => ScenarioMetrics {
                monthly_revenue: Some(monthly_revenue_total(s)),
                roi_months: Some(roi_months(s)),
                revenue_per_pc: Some(revenue_per_pc(s)),
            },
            None => ScenarioMetrics::default(),
        }
    }
}

/// 슬롯 하나의 비교 지표. 빈 슬롯은 0이 아니라 `None`(표시 불가)이다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScenarioMetrics {
    pub monthly_revenue: Option<f64>,
    pub roi_months: Option<f64>,
    pub revenue_per_pc: Option<f64>,
}

impl ScenarioMetrics {
    pub fn is_available(&self) -> bool {
        self.monthly_revenue.is_some()
    }
}

/// 비교 화면의 한 열
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonColumn {
    pub slot: SlotId,
    pub name: String,
    pub metrics: ScenarioMetrics,
}

/// 막대 차트 한 줄. 빈 슬롯은 막대 높이 0으로 그린다.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub name: String,
    pub value: f64,
}

/// A/B 두 슬롯을 보관한다.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioComparator {
    slots: [ScenarioSlot; 2],
}

impl Default for ScenarioComparator {
    fn default() -> Self {
        Self {
            slots: [
                ScenarioSlot::empty(SlotId::A.default_name()),
                ScenarioSlot::empty(SlotId::B.default_name()),
            ],
        }
    }
}

impl ScenarioComparator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장소에서 읽은 슬롯으로 복원한다.
    pub fn from_slots(a: ScenarioSlot, b: ScenarioSlot) -> Self {
        Self { slots: [a, b] }
    }

    pub fn slot(&self, id: SlotId) -> &ScenarioSlot {
        &self.slots[id.index()]
    }

    /// 현재 스냅샷을 슬롯에 덮어쓴다.
    pub fn save(&mut self, id: SlotId, snapshot: &InputSnapshot) {
        debug!(slot = %id, "scenario saved");
        self.slots[id.index()].inputs = Some(snapshot.clone());
    }

    /// 슬롯을 비운다. 이름은 유지한다.
    pub fn clear(&mut self, id: SlotId) {
        debug!(slot = %id, "scenario cleared");
        self.slots[id.index()].inputs = None;
    }

    pub fn rename(&mut self, id: SlotId, name: impl Into<String>) {
        let name = name.into();
        debug!(slot = %id, name = %name, "scenario renamed");
        self.slots[id.index()].name = name;
    }

    /// 두 슬롯의 지표를 매번 새로 계산해 반환한다.
    pub fn compare(&self) -> [ComparisonColumn; 2] {
        SlotId::ALL.map(|id| {
            let slot = self.slot(id);
            ComparisonColumn {
                slot: id,
                name: slot.name.clone(),
                metrics: slot.metrics(),
            }
        })
    }

    /// 월 매출 막대 차트 데이터
    pub fn revenue_chart(&self) -> [ChartRow; 2] {
        self.chart_rows(|m| m.monthly_revenue)
    }

    /// ROI 막대 차트 데이터
    pub fn roi_chart(&self) -> [ChartRow; 2] {
        self.chart_rows(|m| m.roi_months)
    }

    fn chart_rows(&self, pick: impl Fn(&ScenarioMetrics) -> Option<f64>) -> [ChartRow; 2] {
        self.compare().map(|col| ChartRow {
            value: pick(&col.metrics).unwrap_or(0.0),
            name: col.name,
        })
    }

    pub fn slots(&self) -> impl Iterator<Item = (SlotId, &ScenarioSlot)> {
        SlotId::ALL.into_iter().map(move |id| (id, self.slot(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_keeps_name() {
        let mut cmp = ScenarioComparator::new();
        cmp.rename(SlotId::B, "LAN Party");
        cmp.save(SlotId::B, &InputSnapshot::default());
        cmp.clear(SlotId::B);
        assert_eq!(cmp.slot(SlotId::B).name, "LAN Party");
        assert!(cmp.slot(SlotId::B).is_empty());
    }
}
