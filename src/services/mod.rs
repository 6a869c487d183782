pub mod binance;
pub mod coingecko;
pub mod fallback;
pub mod market_data;

pub use binance::BinanceClient;
pub use coingecko::CoinGeckoClient;
pub use fallback::FallbackCandleProvider;
pub use market_data::{AssetSource, CandleProvider};
