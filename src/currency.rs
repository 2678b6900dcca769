//! 통화 식별자, 표시 형식, 환율표.
//!
//! 계산 엔진은 통화 간 환산을 하지 않는다. 여기의 환율은 입력 위젯의 범위를
//! 다른 통화로 보여줄 때 같은 표시 용도로만 쓴다.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use sys_locale::get_locale;
use thiserror::Error;
use tracing::{debug, warn};

/// 지원 통화
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "INR")]
    Inr,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "OMR")]
    Omr,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Inr, Currency::Usd, Currency::Omr];

    /// ISO 4217 코드
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Omr => "OMR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Omr => "﷼",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("알 수 없는 통화 코드: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Currency::Inr),
            "USD" => Ok(Currency::Usd),
            "OMR" => Ok(Currency::Omr),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}

/// OS 로케일을 읽고, 알 수 없으면 en-US를 쓴다.
pub fn default_locale() -> String {
    get_locale().unwrap_or_else(|| "en-US".to_string())
}

fn uses_indian_grouping(locale: &str) -> bool {
    let l = locale.to_ascii_lowercase().replace('_', "-");
    l.ends_with("-in") || l.contains("-in-")
}

/// 정수 부분에 자릿수 구분 기호를 넣는다.
///
/// 인도 로케일은 마지막 3자리 뒤로 2자리씩(12,34,567), 그 외는 3자리씩 묶는다.
fn group_digits(digits: &str, indian: bool) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let step = if indian { 2 } else { 3 };
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}

/// 금액을 정수 단위로 반올림해 통화 기호와 함께 표시한다.
pub fn format_currency(value: f64, currency: Currency, locale: &str) -> String {
    if value.is_nan() {
        return "—".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}{}∞", currency.symbol());
    }
    let rounded = value.abs().round();
    let digits = format!("{rounded:.0}");
    let grouped = group_digits(&digits, uses_indian_grouping(locale));
    if rounded == 0.0 {
        return format!("{}{grouped}", currency.symbol());
    }
    format!("{sign}{}{grouped}", currency.symbol())
}

/// 환율 조회/해석 오류. 호출 측은 재시도 가능한 상태로 표시한다.
#[derive(Debug, Error)]
pub enum RateError {
    /// 응답 본문 해석 실패
    #[error("환율 응답 해석 오류: {0}")]
    Malformed(#[from] serde_json::Error),
    /// 조회 자체 실패 (네트워크, HTTP 상태 등)
    #[error("환율 조회 실패: {0}")]
    Fetch(String),
}

/// 기준 통화 대비 환율표. 기준 통화의 값은 항상 1이다.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    base: Currency,
    rates: BTreeMap<Currency, f64>,
}

impl RateTable {
    /// 누락된 통화는 0(알 수 없음)으로 채우고 기준 통화는 1로 고정한다.
    pub fn new(base: Currency, raw: &BTreeMap<Currency, f64>) -> Self {
        let rates = Currency::ALL
            .iter()
            .map(|&c| {
                let rate = if c == base {
                    1.0
                } else {
                    raw.get(&c).copied().unwrap_or(0.0)
                };
                (c, rate)
            })
            .collect();
        Self { base, rates }
    }

    pub fn base(&self) -> Currency {
        self.base
    }

    /// 기준 통화 금액에 곱할 환율. 0이면 알 수 없는 값이다.
    pub fn rate(&self, to: Currency) -> f64 {
        self.rates.get(&to).copied().unwrap_or(0.0)
    }

    /// 기준 → 대상 통화 환산 비율. 알 수 없으면 `None`.
    pub fn ratio(&self, to: Currency) -> Option<f64> {
        let r = self.rate(to);
        (r.is_finite() && r > 0.0).then_some(r)
    }

    /// 표시용 환산 금액
    pub fn convert(&self, amount: f64, to: Currency) -> Option<f64> {
        self.ratio(to).map(|r| amount * r)
    }
}

#[derive(Debug, Deserialize)]
struct RatesBody {
    #[serde(default)]
    rates: BTreeMap<String, f64>,
}

/// 환율 서비스의 `{ "rates": { "USD": 0.012, ... } }` 응답을 해석한다.
pub fn parse_rates(base: Currency, body: &str) -> Result<RateTable, RateError> {
    let parsed: RatesBody = serde_json::from_str(body)?;
    let raw: BTreeMap<Currency, f64> = parsed
        .rates
        .iter()
        .filter_map(|(code, &rate)| code.parse::<Currency>().ok().map(|c| (c, rate)))
        .collect();
    Ok(RateTable::new(base, &raw))
}

/// 환율 제공자. 실제 네트워크 구현은 이 크레이트 밖에 둔다.
pub trait RateSource {
    fn fetch_rates(&self, base: Currency) -> Result<RateTable, RateError>;
}

/// 마지막으로 성공한 환율표와 최근 오류를 보관한다.
///
/// 조회에 실패해도 이전 환율표를 그대로 유지하므로 표시 계층은 계속 동작한다.
#[derive(Debug, Default)]
pub struct RateState {
    table: Option<RateTable>,
    last_error: Option<RateError>,
}

impl RateState {
    pub fn table(&self) -> Option<&RateTable> {
        self.table.as_ref()
    }

    pub fn last_error(&self) -> Option<&RateError> {
        self.last_error.as_ref()
    }

    /// 최근 오류를 꺼낸다. 환율표는 그대로 남는다.
    pub fn take_error(&mut self) -> Option<RateError> {
        self.last_error.take()
    }

    /// 재시도가 필요한 상태인지
    pub fn needs_retry(&self) -> bool {
        self.last_error.is_some()
    }

    /// 환율을 다시 조회한다. 실패하면 오류만 기록하고 기존 환율표는 유지한다.
    pub fn refresh<S: RateSource + ?Sized>(&mut self, source: &S, base: Currency) {
        match source.fetch_rates(base) {
            Ok(table) => {
                debug!(base = %base, "exchange rates refreshed");
                self.table = Some(table);
                self.last_error = None;
            }
            Err(err) => {
                warn!(base = %base, error = %err, "exchange rate refresh failed");
                self.last_error = Some(err);
            }
        }
    }
}
