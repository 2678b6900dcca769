//! 화면 상태와 시나리오 슬롯을 TOML 파일로 저장/복원한다.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::scenario::{ScenarioComparator, ScenarioSlot, SlotId};
use crate::state::{AppState, STATE_VERSION};

/// 기본 저장 파일
pub const DEFAULT_STORE_FILE: &str = "gaming_cafe.toml";

/// 저장 파일 전체 구조.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub version: u32,
    pub state: AppState,
    /// `scenario:A` / `scenario:B` 키로 구분한 슬롯
    #[serde(default)]
    pub scenarios: BTreeMap<String, ScenarioSlot>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            state: AppState::default(),
            scenarios: BTreeMap::new(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 시나리오 JSON 오류
    #[error("시나리오 JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 지원하지 않는 스키마 버전
    #[error("지원하지 않는 저장 버전: {0}")]
    Version(u32),
}

/// 저장 파일 경로. 없으면 기본 파일명을 쓴다.
pub fn store_path(custom: Option<&Path>) -> PathBuf {
    custom
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
}

/// 저장 파일을 로드하거나 없으면 기본값으로 생성한다.
pub fn load_or_default(path: &Path) -> Result<Store, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let store: Store = toml::from_str(&content)?;
        if store.version > STATE_VERSION {
            return Err(ConfigError::Version(store.version));
        }
        debug!(path = %path.display(), "store loaded");
        Ok(store)
    } else {
        let store = Store::default();
        store.save(path)?;
        info!(path = %path.display(), "created default store");
        Ok(store)
    }
}

impl Store {
    /// 저장 파일에 기록한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        debug!(path = %path.display(), "store saved");
        Ok(())
    }

    /// 저장된 슬롯으로 비교기를 만든다. 없는 슬롯은 기본 이름의 빈 슬롯이다.
    pub fn comparator(&self) -> ScenarioComparator {
        let slot = |id: SlotId| {
            self.scenarios
                .get(id.storage_key())
                .cloned()
                .unwrap_or_else(|| ScenarioSlot::empty(id.default_name()))
        };
        ScenarioComparator::from_slots(slot(SlotId::A), slot(SlotId::B))
    }

    /// 비교기 상태를 슬롯 키로 기록한다.
    pub fn set_comparator(&mut self, cmp: &ScenarioComparator) {
        for (id, slot) in cmp.slots() {
            self.scenarios
                .insert(id.storage_key().to_string(), slot.clone());
        }
    }
}

/// 슬롯 하나를 JSON(스냅샷 형식 + 이름)으로 직렬화한다.
pub fn slot_to_json(slot: &ScenarioSlot) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(slot)?)
}

pub fn slot_from_json(json: &str) -> Result<ScenarioSlot, ConfigError> {
    Ok(serde_json::from_str(json)?)
}
