//! Wire types for the day and intraday candle responses.

use serde::Deserialize;

use crate::shared::{ErrorPayload, ScaledNumber, WireEnvelope};

/// One day candle, keyed by calendar date.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DayCandleWire {
    pub date: String,
    pub open: ScaledNumber,
    pub close: ScaledNumber,
    pub high: ScaledNumber,
    pub low: ScaledNumber,
    pub volume: i64,
}

/// One intraday candle, keyed by bucket start timestamp.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntradayCandleWire {
    pub timestamp: String,
    pub open: ScaledNumber,
    pub close: ScaledNumber,
    pub high: ScaledNumber,
    pub low: ScaledNumber,
    pub volume: i64,
}

/// `data` object of both candle endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CandlesData<C> {
    pub candles: Vec<C>,
}

pub type DayCandlesWire = WireEnvelope<CandlesData<DayCandleWire>, ErrorPayload>;
pub type IntradayCandlesWire = WireEnvelope<CandlesData<IntradayCandleWire>, ErrorPayload>;
