//! 저장 파일 왕복과 시나리오 슬롯 키.
use gaming_cafe_economics::config::{self, slot_from_json, slot_to_json, ConfigError, Store};
use gaming_cafe_economics::currency::Currency;
use gaming_cafe_economics::scenario::{ScenarioSlot, SlotId};
use gaming_cafe_economics::state::{AppState, PairPanel};
use gaming_cafe_economics::{InputPatch, InputSnapshot};

#[test]
fn missing_file_creates_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("store.toml");
    let store = config::load_or_default(&path).expect("load");
    assert_eq!(store, Store::default());
    assert!(path.exists());
}

#[test]
fn state_and_scenarios_survive_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("store.toml");
    let mut store = config::load_or_default(&path).expect("load");

    store.state = AppState::default()
        .with_inputs(&InputPatch {
            pcs: Some(24.0),
            currency: Some(Currency::Omr),
            pc_wattage: Some(Some(450.0)),
            loan_rate_annual: Some(Some(9.5)),
            ..Default::default()
        })
        .with_pair_panels(vec![PairPanel::Engagement, PairPanel::Roi]);

    let mut cmp = store.comparator();
    cmp.save(SlotId::B, &store.state.inputs);
    cmp.rename(SlotId::B, "Tournament Hall");
    store.set_comparator(&cmp);
    store.save(&path).expect("save");

    let reloaded = config::load_or_default(&path).expect("reload");
    assert_eq!(reloaded, store);
    assert!(reloaded.scenarios.contains_key("scenario:A"));
    assert!(reloaded.scenarios.contains_key("scenario:B"));

    let cmp = reloaded.comparator();
    assert!(cmp.slot(SlotId::A).is_empty());
    assert_eq!(cmp.slot(SlotId::B).name, "Tournament Hall");
    assert_eq!(
        cmp.slot(SlotId::B).inputs.as_ref().map(|s| s.currency),
        Some(Currency::Omr)
    );
}

#[test]
fn comparator_falls_back_to_default_names() {
    let cmp = Store::default().comparator();
    assert_eq!(cmp.slot(SlotId::A).name, "Budget Build");
    assert_eq!(cmp.slot(SlotId::B).name, "Premium Build");
}

#[test]
fn newer_schema_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("store.toml");
    let store = Store {
        version: 99,
        ..Store::default()
    };
    store.save(&path).expect("save");
    match config::load_or_default(&path) {
        Err(ConfigError::Version(99)) => {}
        other => panic!("expected version error, got {other:?}"),
    }
}

#[test]
fn slot_json_uses_snapshot_shape() {
    let slot = ScenarioSlot {
        name: "Budget Build".into(),
        inputs: Some(InputSnapshot {
            maintenance_per_pc: Some(300.0),
            ..Default::default()
        }),
    };
    let json = slot_to_json(&slot).expect("to json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["name"], "Budget Build");
    assert_eq!(value["inputs"]["pcBuildCost"], 120_000.0);
    assert_eq!(value["inputs"]["currency"], "INR");
    assert_eq!(value["inputs"]["maintenancePerPc"], 300.0);
    assert!(value["inputs"].get("loanAmount").is_none());

    assert_eq!(slot_from_json(&json).expect("from json"), slot);
}

#[test]
fn snapshot_json_accepts_missing_optionals() {
    let json = r#"{"pcBuildCost":80000,"weekdayHours":4,"weekendHours":9,"pcs":5,"hourlyRate":1.5,"currency":"USD"}"#;
    let s: InputSnapshot = serde_json::from_str(json).expect("parse");
    assert_eq!(s.currency, Currency::Usd);
    assert_eq!(s.session_minutes, None);
    assert_eq!(s.pcs, 5.0);
}
