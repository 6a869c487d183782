use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Candle resolution scored for every asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1d")]
    Daily,
    #[serde(rename = "4h")]
    FourHour,
    #[serde(rename = "1h")]
    Hourly,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Daily, Timeframe::FourHour, Timeframe::Hourly];

    /// Interval label shared by Binance and the report keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Daily => "1d",
            Timeframe::FourHour => "4h",
            Timeframe::Hourly => "1h",
        }
    }

    pub fn candles_per_day(&self) -> u32 {
        match self {
            Timeframe::Daily => 1,
            Timeframe::FourHour => 6,
            Timeframe::Hourly => 24,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(Timeframe::Daily),
            "4h" => Ok(Timeframe::FourHour),
            "1h" => Ok(Timeframe::Hourly),
            other => Err(format!("unknown timeframe: {}", other)),
        }
    }
}
