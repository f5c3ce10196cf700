//! Candles domain: day and intraday OHLCV bars.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::shared::serde_util::{format_date, format_timestamp};
use crate::shared::{Envelope, ErrorPayload, QueryParams};

// ─── Candle ──────────────────────────────────────────────────────────────────

/// One price bar with decoded prices.
///
/// `time` is the bucket key as sent: a date for day candles, a timestamp for
/// intraday candles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    pub time: String,
    pub open: Decimal,
    pub close: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub volume: i64,
}

/// Candles in the order the server returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandleSeries {
    pub candles: Vec<Candle>,
}

impl CandleSeries {
    pub fn new(candles: Vec<Candle>) -> Self {
        Self { candles }
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candle> {
        self.candles.iter()
    }
}

impl<'a> IntoIterator for &'a CandleSeries {
    type Item = &'a Candle;
    type IntoIter = std::slice::Iter<'a, Candle>;

    fn into_iter(self) -> Self::IntoIter {
        self.candles.iter()
    }
}

pub type DayCandlesResponse = Envelope<CandleSeries, ErrorPayload>;
pub type IntradayCandlesResponse = Envelope<CandleSeries, ErrorPayload>;

// ─── Time frames ─────────────────────────────────────────────────────────────

/// Bar size for `/day-candles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayTimeFrame {
    D1,
    W1,
}

impl DayTimeFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayTimeFrame::D1 => "D1",
            DayTimeFrame::W1 => "W1",
        }
    }
}

impl fmt::Display for DayTimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bar size for `/intraday-candles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntradayTimeFrame {
    M1,
    M5,
    M15,
    M30,
    H1,
}

impl IntradayTimeFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntradayTimeFrame::M1 => "M1",
            IntradayTimeFrame::M5 => "M5",
            IntradayTimeFrame::M15 => "M15",
            IntradayTimeFrame::M30 => "M30",
            IntradayTimeFrame::H1 => "H1",
        }
    }
}

impl fmt::Display for IntradayTimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Request parameters ──────────────────────────────────────────────────────

/// Query for `/day-candles`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCandlesParams {
    pub security_board: String,
    pub security_code: String,
    pub time_frame: DayTimeFrame,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub count: Option<i32>,
}

impl DayCandlesParams {
    pub fn new(
        security_board: impl Into<String>,
        security_code: impl Into<String>,
        time_frame: DayTimeFrame,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Self {
        Self {
            security_board: security_board.into(),
            security_code: security_code.into(),
            time_frame,
            from,
            to,
            count: None,
        }
    }

    pub fn with_count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        candle_query(
            &self.security_board,
            &self.security_code,
            self.time_frame.as_str(),
            format_date(&self.from),
            format_date(&self.to),
            self.count,
        )
    }
}

/// Query for `/intraday-candles`. Bounds are sent as UTC ISO-8601.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntradayCandlesParams {
    pub security_board: String,
    pub security_code: String,
    pub time_frame: IntradayTimeFrame,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub count: Option<i32>,
}

impl IntradayCandlesParams {
    pub fn new(
        security_board: impl Into<String>,
        security_code: impl Into<String>,
        time_frame: IntradayTimeFrame,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Self {
        Self {
            security_board: security_board.into(),
            security_code: security_code.into(),
            time_frame,
            from,
            to,
            count: None,
        }
    }

    pub fn with_count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        candle_query(
            &self.security_board,
            &self.security_code,
            self.time_frame.as_str(),
            format_timestamp(&self.from),
            format_timestamp(&self.to),
            self.count,
        )
    }
}

fn candle_query(
    board: &str,
    code: &str,
    time_frame: &str,
    from: String,
    to: String,
    count: Option<i32>,
) -> QueryParams {
    let mut query = vec![
        ("SecurityBoard", board.to_string()),
        ("SecurityCode", code.to_string()),
        ("TimeFrame", time_frame.to_string()),
        ("Interval.From", from),
        ("Interval.To", to),
    ];
    if let Some(count) = count {
        query.push(("Interval.Count", count.to_string()));
    }
    query
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

pub(crate) fn parse_day(body: &str) -> Result<DayCandlesResponse, SchemaError> {
    crate::shared::parse::<wire::DayCandlesWire, _>("DayCandlesResponse", body)
}

pub(crate) fn parse_intraday(body: &str) -> Result<IntradayCandlesResponse, SchemaError> {
    crate::shared::parse::<wire::IntradayCandlesWire, _>("IntradayCandlesResponse", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const DAY_BODY: &str = r#"{"data":{"candles":[{"date":"2024-03-10","open":{"num":20125,"scale":2},"close":{"num":20130,"scale":2},"high":{"num":20200,"scale":2},"low":{"num":20050,"scale":2},"volume":1000}]},"error":null}"#;

    #[test]
    fn test_parse_day_documented_body() {
        let resp = parse_day(DAY_BODY).unwrap();
        let series = resp.data().unwrap();
        assert_eq!(series.len(), 1);
        let candle = &series.candles[0];
        assert_eq!(candle.time, "2024-03-10");
        assert_eq!(candle.open, Decimal::new(20125, 2));
        assert_eq!(candle.close, Decimal::new(20130, 2));
        assert_eq!(candle.volume, 1000);
    }

    #[test]
    fn test_parse_day_idempotent() {
        assert_eq!(parse_day(DAY_BODY).unwrap(), parse_day(DAY_BODY).unwrap());
    }

    #[test]
    fn test_parse_day_missing_volume() {
        let body = r#"{"data":{"candles":[{"date":"2024-03-10","open":{"num":1,"scale":0},"close":{"num":1,"scale":0},"high":{"num":1,"scale":0},"low":{"num":1,"scale":0}}]}}"#;
        let err = parse_day(body).unwrap_err();
        assert_eq!(
            err,
            SchemaError::validation("data.candles[0].volume", "required field", "missing")
        );
    }

    #[test]
    fn test_parse_day_wrong_volume_type() {
        let body = DAY_BODY.replace(r#""volume":1000"#, r#""volume":"lots""#);
        let err = parse_day(&body).unwrap_err();
        assert_eq!(
            err,
            SchemaError::validation("data.candles[0].volume", "i64", r#"string "lots""#)
        );
    }

    #[test]
    fn test_parse_day_error_envelope() {
        let body = r#"{"data":null,"error":{"code":"NotFound","message":"No candles","data":"TQBR.XXXX"}}"#;
        let resp = parse_day(body).unwrap();
        let err = resp.into_result().unwrap_err();
        assert_eq!(err.message, "No candles");
        assert_eq!(err.data.as_deref(), Some("TQBR.XXXX"));
    }

    #[test]
    fn test_parse_intraday_empty_series() {
        let resp = parse_intraday(r#"{"data":{"candles":[]}}"#).unwrap();
        assert!(resp.data().unwrap().is_empty());
    }

    #[test]
    fn test_day_query() {
        let params = DayCandlesParams::new(
            "TQBR",
            "GAZP",
            DayTimeFrame::D1,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
        );
        assert_eq!(
            params.to_query(),
            vec![
                ("SecurityBoard", "TQBR".to_string()),
                ("SecurityCode", "GAZP".to_string()),
                ("TimeFrame", "D1".to_string()),
                ("Interval.From", "2024-03-10".to_string()),
                ("Interval.To", "2024-03-11".to_string()),
            ]
        );
    }

    #[test]
    fn test_intraday_query_with_count() {
        let params = IntradayCandlesParams::new(
            "TQBR",
            "SBER",
            IntradayTimeFrame::M15,
            Utc.with_ymd_and_hms(2024, 3, 4, 7, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 4, 15, 0, 0).unwrap(),
        )
        .with_count(10);
        let query = params.to_query();
        assert_eq!(query[2], ("TimeFrame", "M15".to_string()));
        assert_eq!(query[3], ("Interval.From", "2024-03-04T07:00:00Z".to_string()));
        assert_eq!(query[4], ("Interval.To", "2024-03-04T15:00:00Z".to_string()));
        assert_eq!(query[5], ("Interval.Count", "10".to_string()));
    }

    #[test]
    fn test_time_frame_display() {
        assert_eq!(DayTimeFrame::W1.to_string(), "W1");
        assert_eq!(IntradayTimeFrame::H1.to_string(), "H1");
    }
}
