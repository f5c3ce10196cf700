//! Conversions from wire candles to decoded domain candles.

use super::wire::{
    CandlesData, DayCandleWire, DayCandlesWire, IntradayCandleWire, IntradayCandlesWire,
};
use super::{Candle, CandleSeries, DayCandlesResponse, IntradayCandlesResponse};
use crate::error::SchemaError;
use crate::shared::schema::decode_scaled;
use crate::shared::{Envelope, ScaledNumber};

struct RawCandle {
    time: String,
    open: ScaledNumber,
    close: ScaledNumber,
    high: ScaledNumber,
    low: ScaledNumber,
    volume: i64,
}

impl From<DayCandleWire> for RawCandle {
    fn from(c: DayCandleWire) -> Self {
        Self {
            time: c.date,
            open: c.open,
            close: c.close,
            high: c.high,
            low: c.low,
            volume: c.volume,
        }
    }
}

impl From<IntradayCandleWire> for RawCandle {
    fn from(c: IntradayCandleWire) -> Self {
        Self {
            time: c.timestamp,
            open: c.open,
            close: c.close,
            high: c.high,
            low: c.low,
            volume: c.volume,
        }
    }
}

impl RawCandle {
    fn decode(self, index: usize) -> Result<Candle, SchemaError> {
        let path = |field: &str| format!("data.candles[{}].{}", index, field);
        Ok(Candle {
            open: decode_scaled(path("open"), self.open)?,
            close: decode_scaled(path("close"), self.close)?,
            high: decode_scaled(path("high"), self.high)?,
            low: decode_scaled(path("low"), self.low)?,
            time: self.time,
            volume: self.volume,
        })
    }
}

/// Server order is kept; candles are never re-sorted.
fn decode_series<C: Into<RawCandle>>(data: CandlesData<C>) -> Result<CandleSeries, SchemaError> {
    data.candles
        .into_iter()
        .enumerate()
        .map(|(i, c)| c.into().decode(i))
        .collect::<Result<Vec<_>, _>>()
        .map(CandleSeries::new)
}

impl TryFrom<DayCandlesWire> for DayCandlesResponse {
    type Error = SchemaError;

    fn try_from(wire: DayCandlesWire) -> Result<Self, Self::Error> {
        Envelope::try_from_wire(wire, decode_series)
    }
}

impl TryFrom<IntradayCandlesWire> for IntradayCandlesResponse {
    type Error = SchemaError;

    fn try_from(wire: IntradayCandlesWire) -> Result<Self, Self::Error> {
        Envelope::try_from_wire(wire, decode_series)
    }
}
