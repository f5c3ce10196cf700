//! Pure conversion module for the API's scaled-number representation.
//!
//! Prices and volumes arrive as a `(num, scale)` pair meaning `num * 10^-scale`.
//! All math uses `rust_decimal::Decimal` for exact arithmetic.
//! No async, no network calls.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest scale `Decimal` can carry.
pub const MAX_SCALE: i64 = 28;

/// Fixed-point number as sent by the backend (`{"num": 20125, "scale": 2}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaledNumber {
    pub num: i64,
    pub scale: i64,
}

impl ScaledNumber {
    pub fn new(num: i64, scale: i64) -> Self {
        Self { num, scale }
    }

    /// Decode into an exact decimal.
    pub fn decode(&self) -> Result<Decimal, ScalingError> {
        decode(self.num, self.scale)
    }
}

/// Errors that can occur while decoding a scaled number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalingError {
    InvalidScale(i64),
    Unrepresentable { num: i64, scale: i64 },
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::InvalidScale(scale) => {
                write!(f, "Scale must be non-negative, got {}", scale)
            }
            ScalingError::Unrepresentable { num, scale } => write!(
                f,
                "{} * 10^-{} exceeds the maximum decimal scale of {}",
                num, scale, MAX_SCALE
            ),
        }
    }
}

impl std::error::Error for ScalingError {}

/// Decode `num * 10^-scale` without going through binary floating point.
///
/// ```text
/// decode(20125, 2) == 201.25
/// decode(-5, 0)    == -5
/// ```
pub fn decode(num: i64, scale: i64) -> Result<Decimal, ScalingError> {
    if scale < 0 {
        return Err(ScalingError::InvalidScale(scale));
    }
    if scale > MAX_SCALE {
        return Err(ScalingError::Unrepresentable { num, scale });
    }

    Decimal::try_from_i128_with_scale(num as i128, scale as u32)
        .map_err(|_| ScalingError::Unrepresentable { num, scale })
}
