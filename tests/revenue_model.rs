//! 매출, 점유율, 전력, 순이익 계산 회귀 테스트. 기준 예시는 기본 입력(INR, 10대)이다.
use gaming_cafe_economics::net_revenue::{
    monthly_maintenance_cost, monthly_net_revenue, pcs_affordable_from_investment, roi_months,
};
use gaming_cafe_economics::power::{monthly_power_cost, monthly_power_kwh};
use gaming_cafe_economics::revenue::{
    matches_per_month, monthly_revenue_per_pc, monthly_revenue_total, profit_12m,
    total_gaming_hours_per_month, total_monthly_hours_per_pc, weekday_weekend_revenue,
};
use gaming_cafe_economics::utilization::utilization_rate;
use gaming_cafe_economics::{currency::Currency, InputSnapshot};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn reference() -> InputSnapshot {
    InputSnapshot {
        pc_build_cost: 120_000.0,
        weekday_hours: 6.0,
        weekend_hours: 10.0,
        pcs: 10.0,
        hourly_rate: 50.0,
        currency: Currency::Inr,
        ..Default::default()
    }
}

#[test]
fn reference_scenario_kpis() {
    let s = reference();
    assert_eq!(total_monthly_hours_per_pc(&s), 212.0);
    assert_eq!(monthly_revenue_total(&s), 106_000.0);
    assert_eq!(monthly_revenue_per_pc(&s), 10_600.0);
    assert_close("roi", roi_months(&s), 11.320_754_716_981_131, 1e-9);
    assert_close("util", utilization_rate(&s), 29.444_444_444_444_443, 1e-9);
}

#[test]
fn utilization_uses_thirty_day_month() {
    // 212 h / 30일 = 7.0667 h/일 → 29.44%
    let s = reference();
    let expected = 212.0 / 30.0 / 24.0 * 100.0;
    assert_close("util", utilization_rate(&s), expected, 1e-12);
    let full = InputSnapshot {
        weekday_hours: 24.0,
        weekend_hours: 24.0,
        ..reference()
    };
    assert_eq!(utilization_rate(&full), 100.0);
}

#[test]
fn revenue_is_linear_in_each_factor() {
    let s = reference();
    let base = monthly_revenue_total(&s);
    for k in [0.0, 0.5, 2.0, 3.0, 7.5] {
        let pcs = InputSnapshot {
            pcs: s.pcs * k,
            ..s.clone()
        };
        assert_close("pcs", monthly_revenue_total(&pcs), base * k, 1e-12);
        let rate = InputSnapshot {
            hourly_rate: s.hourly_rate * k,
            ..s.clone()
        };
        assert_close("rate", monthly_revenue_total(&rate), base * k, 1e-12);
    }

    // 평일 시간만 바꾸면 평일 기여분만 비례해서 변한다.
    let split = weekday_weekend_revenue(&s);
    let doubled_weekday = InputSnapshot {
        weekday_hours: s.weekday_hours * 2.0,
        ..s.clone()
    };
    assert_close(
        "weekday",
        monthly_revenue_total(&doubled_weekday),
        split.weekday * 2.0 + split.weekend,
        1e-12,
    );
    let doubled_weekend = InputSnapshot {
        weekend_hours: s.weekend_hours * 2.0,
        ..s.clone()
    };
    assert_close(
        "weekend",
        monthly_revenue_total(&doubled_weekend),
        split.weekday + split.weekend * 2.0,
        1e-12,
    );
}

#[test]
fn zero_factor_gives_zero_revenue() {
    for s in [
        InputSnapshot { pcs: 0.0, ..reference() },
        InputSnapshot { hourly_rate: 0.0, ..reference() },
        InputSnapshot {
            weekday_hours: 0.0,
            weekend_hours: 0.0,
            ..reference()
        },
    ] {
        assert_eq!(monthly_revenue_total(&s), 0.0);
    }
}

#[test]
fn weekday_weekend_parts_sum_exactly() {
    let cases = [
        reference(),
        InputSnapshot {
            weekday_hours: 3.7,
            weekend_hours: 13.13,
            pcs: 17.0,
            hourly_rate: 0.1,
            ..reference()
        },
        InputSnapshot {
            weekday_hours: 30.0,
            weekend_hours: -2.0,
            pcs: -3.0,
            hourly_rate: 19.99,
            ..reference()
        },
    ];
    for s in cases {
        let split = weekday_weekend_revenue(&s);
        assert_eq!(split.weekday + split.weekend, monthly_revenue_total(&s));
    }
    let split = weekday_weekend_revenue(&reference());
    assert_eq!(split.weekday, 66_000.0);
    assert_eq!(split.weekend, 40_000.0);
}

#[test]
fn per_pc_revenue_is_zero_without_pcs() {
    let s = InputSnapshot { pcs: 0.0, ..reference() };
    assert_eq!(monthly_revenue_per_pc(&s), 0.0);
    assert_eq!(roi_months(&s), f64::INFINITY);
}

#[test]
fn roi_is_infinite_exactly_when_per_pc_revenue_is_not_positive() {
    let cases = [
        reference(),
        InputSnapshot { hourly_rate: 0.0, ..reference() },
        InputSnapshot { hourly_rate: -5.0, ..reference() },
        InputSnapshot { pcs: -2.0, ..reference() },
        InputSnapshot {
            weekday_hours: 0.0,
            weekend_hours: 0.0,
            ..reference()
        },
        InputSnapshot { pc_build_cost: 0.0, ..reference() },
    ];
    for s in cases {
        let per_pc = monthly_revenue_per_pc(&s);
        assert_eq!(roi_months(&s).is_infinite(), per_pc <= 0.0, "{s:?}");
    }
}

#[test]
fn power_defaults_missing_fields_to_zero() {
    let s = reference();
    assert_eq!(monthly_power_kwh(&s), 0.0);
    assert_eq!(monthly_power_cost(&s), 0.0);

    let only_wattage = InputSnapshot {
        pc_wattage: Some(400.0),
        ..reference()
    };
    // 400 W × 10대 × 212 h / 1000 = 848 kWh
    assert_close("kwh", monthly_power_kwh(&only_wattage), 848.0, 1e-12);
    assert_eq!(monthly_power_cost(&only_wattage), 0.0);

    let priced = InputSnapshot {
        electricity_rate: Some(8.0),
        ..only_wattage
    };
    assert_close("cost", monthly_power_cost(&priced), 6_784.0, 1e-12);
}

#[test]
fn net_revenue_subtracts_maintenance_and_power() {
    let s = InputSnapshot {
        maintenance_per_pc: Some(500.0),
        pc_wattage: Some(400.0),
        electricity_rate: Some(8.0),
        ..reference()
    };
    assert_eq!(monthly_maintenance_cost(&s), 5_000.0);
    assert_close(
        "net",
        monthly_net_revenue(&s),
        106_000.0 - 5_000.0 - 6_784.0,
        1e-12,
    );

    let losing = InputSnapshot {
        maintenance_per_pc: Some(50_000.0),
        ..reference()
    };
    assert!(monthly_net_revenue(&losing) < 0.0);
}

#[test]
fn affordable_pcs_from_investment() {
    let s = InputSnapshot {
        invest_amount: Some(500_000.0),
        ..reference()
    };
    assert_eq!(pcs_affordable_from_investment(&s), 4);
    assert_eq!(pcs_affordable_from_investment(&reference()), 0);
    let free = InputSnapshot {
        pc_build_cost: 0.0,
        ..s.clone()
    };
    assert_eq!(pcs_affordable_from_investment(&free), 0);
    let debt = InputSnapshot {
        invest_amount: Some(-250_000.0),
        ..reference()
    };
    assert_eq!(pcs_affordable_from_investment(&debt), 0);
}

#[test]
fn usage_metrics() {
    let s = InputSnapshot {
        session_minutes: Some(45.0),
        ..reference()
    };
    assert_eq!(total_gaming_hours_per_month(&s), 2_120.0);
    // 2120 h × 60 / 45 = 2826.67 → 2826
    assert_eq!(matches_per_month(&s), 2_826.0);

    let p = profit_12m(&reference());
    assert_eq!(p.total_12m_revenue, 1_272_000.0);
    assert_eq!(p.profit_12m, 1_272_000.0 - 1_200_000.0);
}
