//! 명령행 인자 정의와 결과 출력.
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::currency::{format_currency, Currency, RateTable};
use crate::financing::LoanTotals;
use crate::report::{format_roi_months, or_dash, Dashboard};
use crate::scenario::{ChartRow, ComparisonColumn, SlotId};
use crate::sensitivity::SensitivityPoint;
use crate::series::{PcsRevenueSeries, RoiCurve};
use crate::snapshot::InputPatch;

#[derive(Debug, Parser)]
#[command(author, version, about = "Gaming cafe revenue, ROI and financing calculator")]
pub struct Cli {
    /// 상태 저장 파일 (기본: ./gaming_cafe.toml)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
    /// 금액 표시 로케일 (기본: OS 로케일)
    #[arg(long, global = true)]
    pub locale: Option<String>,
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show headline KPIs for the current inputs
    Kpi,
    /// Update current inputs (only the given fields change)
    Set(SetArgs),
    /// Restore the default panel layout
    Reset,
    /// Monthly revenue for 1..N PCs
    Series {
        #[arg(long, default_value_t = 100)]
        max_pcs: i64,
    },
    /// Cumulative revenue per PC against build cost
    RoiCurve,
    /// ROI under +/-20% rate and usage
    Sensitivity,
    /// Net revenue, maintenance, power and loan summary
    Finance,
    /// Amortized loan payment for explicit terms
    Loan {
        principal: f64,
        /// Annual rate in percent
        rate: f64,
        months: f64,
    },
    /// Show display conversion ratios from a saved exchange-rate response
    Rates {
        /// JSON body of the form {"rates": {"USD": 0.012, ...}}
        file: PathBuf,
    },
    /// Manage the two comparison slots
    Scenario {
        #[command(subcommand)]
        action: ScenarioCommand,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SlotArg {
    A,
    B,
}

impl From<SlotArg> for SlotId {
    fn from(value: SlotArg) -> Self {
        match value {
            SlotArg::A => SlotId::A,
            SlotArg::B => SlotId::B,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ScenarioCommand {
    /// Capture current inputs into a slot
    Save { slot: SlotArg },
    /// Empty a slot
    Clear { slot: SlotArg },
    /// Rename a slot
    Rename { slot: SlotArg, name: String },
    /// Compare both slots side by side
    Compare,
    /// Print a slot as JSON
    Export { slot: SlotArg },
}

/// 해제 가능한 선택 항목
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptionalField {
    SessionMinutes,
    PcWattage,
    ElectricityRate,
    InvestAmount,
    MaintenancePerPc,
    LoanAmount,
    LoanRateAnnual,
    LoanTermMonths,
}

#[derive(Debug, Args, Default)]
pub struct SetArgs {
    #[arg(long)]
    pub pc_build_cost: Option<f64>,
    #[arg(long)]
    pub weekday_hours: Option<f64>,
    #[arg(long)]
    pub weekend_hours: Option<f64>,
    #[arg(long)]
    pub pcs: Option<f64>,
    #[arg(long)]
    pub hourly_rate: Option<f64>,
    #[arg(long)]
    pub currency: Option<Currency>,
    #[arg(long)]
    pub session_minutes: Option<f64>,
    #[arg(long)]
    pub pc_wattage: Option<f64>,
    #[arg(long)]
    pub electricity_rate: Option<f64>,
    #[arg(long)]
    pub invest_amount: Option<f64>,
    #[arg(long)]
    pub maintenance_per_pc: Option<f64>,
    #[arg(long)]
    pub loan_amount: Option<f64>,
    #[arg(long)]
    pub loan_rate_annual: Option<f64>,
    #[arg(long)]
    pub loan_term_months: Option<f64>,
    /// Unset optional fields
    #[arg(long, value_enum)]
    pub clear: Vec<OptionalField>,
    #[arg(long)]
    pub show_sensitivity: Option<bool>,
}

impl SetArgs {
    /// 인자를 부분 갱신 요청으로 바꾼다. 같은 항목을 설정과 해제에 모두 주면 해제가 우선한다.
    pub fn to_patch(&self) -> InputPatch {
        let cleared = |f: OptionalField| self.clear.contains(&f);
        let optional = |value: Option<f64>, f: OptionalField| {
            if cleared(f) {
                Some(None)
            } else {
                value.map(Some)
            }
        };
        InputPatch {
            pc_build_cost: self.pc_build_cost,
            weekday_hours: self.weekday_hours,
            weekend_hours: self.weekend_hours,
            pcs: self.pcs,
            hourly_rate: self.hourly_rate,
            currency: self.currency,
            session_minutes: optional(self.session_minutes, OptionalField::SessionMinutes),
            pc_wattage: optional(self.pc_wattage, OptionalField::PcWattage),
            electricity_rate: optional(self.electricity_rate, OptionalField::ElectricityRate),
            invest_amount: optional(self.invest_amount, OptionalField::InvestAmount),
            maintenance_per_pc: optional(self.maintenance_per_pc, OptionalField::MaintenancePerPc),
            loan_amount: optional(self.loan_amount, OptionalField::LoanAmount),
            loan_rate_annual: optional(self.loan_rate_annual, OptionalField::LoanRateAnnual),
            loan_term_months: optional(self.loan_term_months, OptionalField::LoanTermMonths),
        }
    }
}

/// 금액 표시기. 통화와 로케일을 묶어둔다.
pub struct Money<'a> {
    pub currency: Currency,
    pub locale: &'a str,
}

impl Money<'_> {
    pub fn fmt(&self, value: f64) -> String {
        format_currency(value, self.currency, self.locale)
    }

    /// 0 이하인 선택 항목은 대시로 표시한다.
    fn fmt_positive(&self, value: f64) -> String {
        or_dash((value > 0.0).then_some(value), |v| self.fmt(v))
    }
}

pub fn print_kpi(d: &Dashboard, money: &Money<'_>) {
    println!("Monthly Revenue   : {}", money.fmt(d.monthly_revenue));
    println!("ROI (months)      : {}", format_roi_months(d.roi_months));
    println!("Utilization Rate  : {:.0}%", d.utilization_pct);
    println!("Revenue / PC      : {}", money.fmt(d.revenue_per_pc));
    println!(
        "Weekday / Weekend : {} / {}",
        money.fmt(d.split.weekday),
        money.fmt(d.split.weekend)
    );
    println!("Gaming hours      : {:.0} h/month", d.gaming_hours);
    if d.matches > 0.0 {
        println!("Sessions          : {:.0} /month", d.matches);
    }
    println!(
        "12-month revenue  : {} (profit {})",
        money.fmt(d.twelve_months.total_12m_revenue),
        money.fmt(d.twelve_months.profit_12m)
    );
}

pub fn print_finance(d: &Dashboard, money: &Money<'_>) {
    println!("Gross revenue / month  : {}", money.fmt(d.monthly_revenue));
    println!("Maintenance (all PCs)  : {}", money.fmt_positive(d.maintenance));
    println!(
        "Electricity cost       : {} ({:.1} kWh)",
        money.fmt_positive(d.power.cost),
        d.power.kwh
    );
    println!("Net revenue            : {}", money.fmt(d.net_revenue));
    println!(
        "Loan payment / month   : {}",
        money.fmt_positive(d.loan.monthly_payment)
    );
    println!("PCs purchasable (cash) : {}", d.pcs_affordable);
}

pub fn print_loan(loan: &LoanTotals, money: &Money<'_>) {
    println!("Monthly payment : {}", money.fmt_positive(loan.monthly_payment));
    println!("Total interest  : {}", money.fmt_positive(loan.total_interest));
    println!("Total paid      : {}", money.fmt_positive(loan.total_paid));
}

pub fn print_series(series: &PcsRevenueSeries, money: &Money<'_>) {
    for p in series {
        println!("{:>4} PCs  {}", p.pcs, money.fmt(p.revenue));
    }
}

pub fn print_roi_curve(curve: &RoiCurve, money: &Money<'_>) {
    if curve.break_even_months > 0 {
        println!("Break-even: month {}", curve.break_even_months);
    } else {
        println!("Break-even: never");
    }
    for p in &curve.points {
        let marker = if i64::from(p.month) == curve.break_even_months {
            " <"
        } else {
            ""
        };
        println!(
            "{:>3}  {:>14}  capex {}{marker}",
            p.month,
            money.fmt(p.cumulative),
            money.fmt(p.capex)
        );
    }
}

pub fn print_sensitivity(points: &[SensitivityPoint]) {
    for p in points {
        println!("{:<12} {}", p.label, format_roi_months(p.roi_months));
    }
}

pub fn print_comparison(columns: &[ComparisonColumn], money: &Money<'_>) {
    for col in columns {
        println!("[{}] {}", col.slot, col.name);
        let m = &col.metrics;
        println!(
            "  Monthly Revenue : {}",
            or_dash(m.monthly_revenue, |v| money.fmt(v))
        );
        println!("  ROI (months)    : {}", or_dash(m.roi_months, format_roi_months));
        println!(
            "  Revenue / PC    : {}",
            or_dash(m.revenue_per_pc, |v| money.fmt(v))
        );
    }
}

pub fn print_rates(table: &RateTable, build_cost: f64, locale: &str) {
    println!("Base: {}", table.base());
    for c in Currency::ALL {
        match table.convert(build_cost, c) {
            Some(v) => println!(
                "  {}  x{:<12.6} build cost {}",
                c,
                table.rate(c),
                format_currency(v, c, locale)
            ),
            None => println!("  {}  rate unavailable", c),
        }
    }
}

pub fn print_chart(title: &str, rows: &[ChartRow], render: impl Fn(f64) -> String) {
    println!("{title}");
    for row in rows {
        println!("  {:<20} {}", row.name, render(row.value));
    }
}
