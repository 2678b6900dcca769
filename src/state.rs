//! 화면 상태 컨테이너. 입력 스냅샷과 패널 배치를 함께 보관한다.
//!
//! 모든 연산은 새 상태를 반환하며, 저장은 [`crate::config`]가 맡는다.
use serde::{Deserialize, Serialize};

use crate::snapshot::{InputPatch, InputSnapshot};

/// 저장 스키마 버전
pub const STATE_VERSION: u32 = 1;

/// 보조 패널 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SecondaryPanel {
    WeekdayBar,
    WeekdayPie,
    Sensitivity,
}

/// 쌍 패널 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PairPanel {
    Roi,
    Engagement,
}

pub fn default_sec_panels() -> Vec<SecondaryPanel> {
    vec![
        SecondaryPanel::WeekdayBar,
        SecondaryPanel::WeekdayPie,
        SecondaryPanel::Sensitivity,
    ]
}

pub fn default_pair_panels() -> Vec<PairPanel> {
    vec![PairPanel::Roi, PairPanel::Engagement]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub show_sensitivity: bool,
    pub sec_panels: Vec<SecondaryPanel>,
    pub pair_panels: Vec<PairPanel>,
    /// 현재 입력. TOML 테이블이므로 스칼라 항목 뒤에 둔다.
    pub inputs: InputSnapshot,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            show_sensitivity: true,
            sec_panels: default_sec_panels(),
            pair_panels: default_pair_panels(),
            inputs: InputSnapshot::default(),
        }
    }
}

impl AppState {
    /// 입력 스냅샷에 부분 갱신을 적용한 새 상태
    pub fn with_inputs(&self, patch: &InputPatch) -> AppState {
        AppState {
            inputs: self.inputs.update(patch),
            ..self.clone()
        }
    }

    pub fn with_show_sensitivity(&self, show: bool) -> AppState {
        AppState {
            show_sensitivity: show,
            ..self.clone()
        }
    }

    pub fn with_sec_panels(&self, panels: Vec<SecondaryPanel>) -> AppState {
        AppState {
            sec_panels: panels,
            ..self.clone()
        }
    }

    pub fn with_pair_panels(&self, panels: Vec<PairPanel>) -> AppState {
        AppState {
            pair_panels: panels,
            ..self.clone()
        }
    }

    /// 패널 배치만 기본값으로 되돌린다. 입력과 민감도 표시 여부는 유지한다.
    pub fn reset_layout(&self) -> AppState {
        AppState {
            sec_panels: default_sec_panels(),
            pair_panels: default_pair_panels(),
            ..self.clone()
        }
    }
}
