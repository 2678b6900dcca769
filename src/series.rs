//! 차트용 투영 시계열. 렌더링 비용을 묶어두기 위해 길이에 상한을 둔다.
use crate::revenue::monthly_revenue_per_pc;
use crate::snapshot::InputSnapshot;

/// PC 대수 축 상한
pub const MAX_SERIES_PCS: u32 = 100;
/// ROI 곡선 최소/최대 기간 [개월]
pub const MIN_CURVE_MONTHS: i64 = 12;
pub const MAX_CURVE_MONTHS: i64 = 48;
/// 손익분기 이후 추가로 보여줄 기간 [개월]
pub const CURVE_TAIL_MONTHS: i64 = 6;

/// PC 대수별 월 매출 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PcsRevenuePoint {
    pub pcs: u32,
    pub revenue: f64,
}

/// PC 대수 1..=limit 에 대한 월 매출 시계열.
///
/// 값은 순회할 때 계산하며, `iter()`를 다시 호출하면 처음부터 다시 시작한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PcsRevenueSeries {
    per_pc: f64,
    limit: u32,
}

impl PcsRevenueSeries {
    pub fn len(&self) -> usize {
        self.limit as usize
    }

    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = PcsRevenuePoint> + Clone + '_ {
        let per_pc = self.per_pc;
        (1..=self.limit).map(move |n| PcsRevenuePoint {
            pcs: n,
            revenue: per_pc * f64::from(n),
        })
    }
}

impl<'a> IntoIterator for &'a PcsRevenueSeries {
    type Item = PcsRevenuePoint;
    type IntoIter = Box<dyn Iterator<Item = PcsRevenuePoint> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// PC 대수를 1부터 `min(100, max(1, max_pcs))`까지 늘렸을 때의 월 매출.
pub fn pcs_revenue_series(s: &InputSnapshot, max_pcs: i64) -> PcsRevenueSeries {
    let limit = max_pcs.clamp(1, i64::from(MAX_SERIES_PCS)) as u32;
    PcsRevenueSeries {
        per_pc: monthly_revenue_per_pc(s),
        limit,
    }
}

/// ROI 곡선의 한 달 지점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiCurvePoint {
    pub month: u32,
    /// PC 1대 누적 매출
    pub cumulative: f64,
    /// PC 1대 조립 비용 (수평선)
    pub capex: f64,
}

/// ROI 곡선과 손익분기 개월 수.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiCurve {
    pub points: Vec<RoiCurvePoint>,
    /// 손익분기 개월 수(올림). 1대당 매출이 0 이하이면 0.
    pub break_even_months: i64,
}

impl RoiCurve {
    /// 곡선이 다루는 마지막 달
    pub fn horizon_months(&self) -> u32 {
        self.points.last().map_or(0, |p| p.month)
    }
}

/// PC 1대 기준 누적 매출 곡선을 만든다.
///
/// 기간은 손익분기 + 6개월이며 12~48개월로 제한한다.
pub fn roi_curve_per_pc(s: &InputSnapshot) -> RoiCurve {
    let per_pc = monthly_revenue_per_pc(s);
    let break_even_months = if per_pc > 0.0 {
        // f64 -> i64 변환은 포화되고 NaN은 0이 된다.
        (s.pc_build_cost / per_pc).ceil() as i64
    } else {
        0
    };
    let months = break_even_months
        .saturating_add(CURVE_TAIL_MONTHS)
        .clamp(MIN_CURVE_MONTHS, MAX_CURVE_MONTHS) as u32;
    let points = (0..=months)
        .map(|m| RoiCurvePoint {
            month: m,
            cumulative: per_pc * f64::from(m),
            capex: s.pc_build_cost,
        })
        .collect();
    RoiCurve {
        points,
        break_even_months,
    }
}
