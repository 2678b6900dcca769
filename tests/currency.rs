use gaming_cafe_economics::currency::{
    format_currency, parse_rates, Currency, RateError, RateSource, RateState, RateTable,
};
use std::cell::Cell;

#[test]
fn formats_whole_units_with_grouping() {
    assert_eq!(format_currency(106_000.0, Currency::Inr, "en-IN"), "₹1,06,000");
    assert_eq!(format_currency(106_000.0, Currency::Usd, "en-US"), "$106,000");
    assert_eq!(format_currency(9_964.49, Currency::Usd, "en-US"), "$9,964");
    assert_eq!(format_currency(999.5, Currency::Omr, "en-US"), "﷼1,000");
    assert_eq!(format_currency(-2_500.0, Currency::Usd, "en-US"), "-$2,500");
    assert_eq!(format_currency(-0.2, Currency::Usd, "en-US"), "$0");
}

#[test]
fn currency_codes_parse() {
    assert_eq!("inr".parse::<Currency>().ok(), Some(Currency::Inr));
    assert_eq!(" OMR ".parse::<Currency>().ok(), Some(Currency::Omr));
    assert!("EUR".parse::<Currency>().is_err());
    assert_eq!(Currency::Usd.to_string(), "USD");
}

#[test]
fn parses_rate_payload_and_pins_base() {
    let body = r#"{"base":"INR","rates":{"USD":0.012,"OMR":0.0046,"INR":83.0,"EUR":0.011}}"#;
    let table = parse_rates(Currency::Inr, body).expect("parse");
    assert_eq!(table.base(), Currency::Inr);
    assert_eq!(table.rate(Currency::Inr), 1.0);
    assert_eq!(table.rate(Currency::Usd), 0.012);
    assert_eq!(table.convert(1_000.0, Currency::Omr), Some(4.6));
}

#[test]
fn missing_rates_are_unknown() {
    let table = parse_rates(Currency::Usd, "{}").expect("parse");
    assert_eq!(table.rate(Currency::Usd), 1.0);
    assert_eq!(table.rate(Currency::Inr), 0.0);
    assert_eq!(table.ratio(Currency::Inr), None);
    assert!(matches!(
        parse_rates(Currency::Usd, "not json"),
        Err(RateError::Malformed(_))
    ));
}

struct FlakySource {
    calls: Cell<u32>,
}

impl RateSource for FlakySource {
    fn fetch_rates(&self, base: Currency) -> Result<RateTable, RateError> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if n == 0 {
            parse_rates(base, r#"{"rates":{"INR":83.0}}"#)
        } else {
            Err(RateError::Fetch("HTTP 503".into()))
        }
    }
}

#[test]
fn failed_refresh_keeps_stale_table() {
    let source = FlakySource { calls: Cell::new(0) };
    let mut state = RateState::default();
    state.refresh(&source, Currency::Usd);
    assert!(!state.needs_retry());
    let first = state.table().cloned();

    state.refresh(&source, Currency::Usd);
    assert!(state.needs_retry());
    assert_eq!(state.table().cloned(), first);
    assert_eq!(
        state.table().and_then(|t| t.ratio(Currency::Inr)),
        Some(83.0)
    );
    assert!(state.take_error().is_some());
    assert!(!state.needs_retry());
}
