//! PC방(게이밍 PC 시간제 대여) 사업의 매출, 회수 기간, 전력비, 대출 상환을 계산하는 엔진.
//!
//! 계산 함수는 모두 입력 스냅샷 하나만 받는 순수 함수이다. 저장과 표시는 바깥 계층이 맡는다.

pub mod app;
pub mod config;
pub mod currency;
pub mod financing;
pub mod net_revenue;
pub mod power;
pub mod report;
pub mod revenue;
pub mod scenario;
pub mod sensitivity;
pub mod series;
pub mod snapshot;
pub mod state;
pub mod ui_cli;
pub mod utilization;

pub use snapshot::{InputPatch, InputSnapshot, DAYS};
