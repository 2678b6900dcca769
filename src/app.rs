use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{self, ConfigError};
use crate::currency::{
    default_locale, parse_rates, Currency, RateError, RateSource, RateState, RateTable,
};
use crate::financing::loan_totals;
use crate::report::{format_roi_months, Dashboard};
use crate::scenario::SlotId;
use crate::sensitivity::sensitivity_roi;
use crate::series::{pcs_revenue_series, roi_curve_per_pc};
use crate::ui_cli::{self, Cli, Command, Money, ScenarioCommand};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 환율 조회 오류
    #[error("환율 오류: {0}")]
    Rates(#[from] RateError),
}

/// 저장해 둔 환율 응답 파일을 읽는 제공자.
struct FileRateSource {
    path: PathBuf,
}

impl RateSource for FileRateSource {
    fn fetch_rates(&self, base: Currency) -> Result<RateTable, RateError> {
        let body = fs::read_to_string(&self.path)
            .map_err(|e| RateError::Fetch(format!("{}: {e}", self.path.display())))?;
        parse_rates(base, &body)
    }
}

/// 명령 하나를 실행한다. 상태를 바꾸는 명령만 저장 파일을 다시 쓴다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let path = config::store_path(cli.store.as_deref());
    let mut store = config::load_or_default(&path)?;
    let locale = cli.locale.clone().unwrap_or_else(default_locale);
    let money = Money {
        currency: store.state.inputs.currency,
        locale: &locale,
    };
    debug!(command = ?cli.cmd, locale = %locale, "dispatching");

    match cli.cmd {
        Command::Kpi => {
            let d = Dashboard::compute(&store.state.inputs);
            ui_cli::print_kpi(&d, &money);
        }
        Command::Set(args) => {
            let patch = args.to_patch();
            let mut next = store.state.with_inputs(&patch);
            if let Some(show) = args.show_sensitivity {
                next = next.with_show_sensitivity(show);
            }
            if next == store.state {
                info!("nothing to update");
                return Ok(());
            }
            store.state = next;
            store.save(&path)?;
            info!(path = %path.display(), "inputs updated");
            let d = Dashboard::compute(&store.state.inputs);
            let money = Money {
                currency: store.state.inputs.currency,
                locale: &locale,
            };
            ui_cli::print_kpi(&d, &money);
        }
        Command::Reset => {
            store.state = store.state.reset_layout();
            store.save(&path)?;
            info!("layout reset");
        }
        Command::Series { max_pcs } => {
            let series = pcs_revenue_series(&store.state.inputs, max_pcs);
            ui_cli::print_series(&series, &money);
        }
        Command::RoiCurve => {
            let curve = roi_curve_per_pc(&store.state.inputs);
            ui_cli::print_roi_curve(&curve, &money);
        }
        Command::Sensitivity => {
            if !store.state.show_sensitivity {
                info!("sensitivity panel is hidden; showing anyway");
            }
            ui_cli::print_sensitivity(&sensitivity_roi(&store.state.inputs));
        }
        Command::Finance => {
            let d = Dashboard::compute(&store.state.inputs);
            ui_cli::print_finance(&d, &money);
        }
        Command::Loan {
            principal,
            rate,
            months,
        } => {
            ui_cli::print_loan(&loan_totals(principal, rate, months), &money);
        }
        Command::Rates { file } => {
            let mut rates = RateState::default();
            rates.refresh(&FileRateSource { path: file }, store.state.inputs.currency);
            if let Some(table) = rates.table() {
                ui_cli::print_rates(table, store.state.inputs.pc_build_cost, &locale);
            }
            if let Some(err) = rates.take_error() {
                return Err(err.into());
            }
        }
        Command::Scenario { action } => {
            run_scenario(action, &mut store, &path, &money)?;
        }
    }
    Ok(())
}

fn run_scenario(
    action: ScenarioCommand,
    store: &mut config::Store,
    path: &std::path::Path,
    money: &Money<'_>,
) -> Result<(), AppError> {
    let mut cmp = store.comparator();
    let mutated = match action {
        ScenarioCommand::Save { slot } => {
            cmp.save(slot.into(), &store.state.inputs);
            true
        }
        ScenarioCommand::Clear { slot } => {
            cmp.clear(slot.into());
            true
        }
        ScenarioCommand::Rename { slot, name } => {
            cmp.rename(slot.into(), name);
            true
        }
        ScenarioCommand::Compare => {
            ui_cli::print_comparison(&cmp.compare(), money);
            ui_cli::print_chart("Monthly Revenue", &cmp.revenue_chart(), |v| money.fmt(v));
            ui_cli::print_chart("ROI (months)", &cmp.roi_chart(), |v| {
                format!("{} mo", format_roi_months(v))
            });
            false
        }
        ScenarioCommand::Export { slot } => {
            let id: SlotId = slot.into();
            println!("{}", config::slot_to_json(cmp.slot(id))?);
            false
        }
    };
    if mutated {
        store.set_comparator(&cmp);
        store.save(path)?;
        info!(path = %path.display(), "scenarios updated");
    }
    Ok(())
}
