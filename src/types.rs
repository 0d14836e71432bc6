//! Shared data types that cross module boundaries: the bus payloads, the
//! order-intent/fill contract between strategies and the execution manager,
//! and the weather observation shape produced by the weather feed client.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

/// `max_spend_cents <= 0` means the intent is uncapped.
pub const UNCAPPED: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Yes,
    No,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Yes => Side::No,
            Side::No => Side::Yes,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Yes => "yes",
            Side::No => "no",
        }
    }

    pub fn parse(s: &str) -> Option<Side> {
        match s.to_ascii_lowercase().as_str() {
            "yes" => Some(Side::Yes),
            "no" => Some(Side::No),
            _ => None,
        }
    }
}

/// Per-market metadata as resolved by discovery, keyed by market ticker in
/// `MarketDiscoveryEvent::market_info`.
#[derive(Debug, Clone, Default)]
pub struct ContractInfo {
    pub event_ticker: String,
    pub subtitle: String,
    pub yes_bid: Option<u8>,
    pub yes_ask: Option<u8>,
    pub no_bid: Option<u8>,
    pub no_ask: Option<u8>,
    pub last_price: Option<u8>,
    pub volume: Option<u64>,
    pub open_interest: Option<u64>,
    pub cap_strike: Option<f64>,
}

/// One combined event per discovery cycle covering every configured series
/// (matching `services/bot/events.py::MarketDiscoveryEvent`, which likewise
/// carries no `series`/`station` field — discovery resolves all series into
/// one flat ticker set before publishing, see `services/markets/ticker.py`).
#[derive(Debug, Clone)]
pub struct MarketDiscoveryEvent {
    pub tickers: Vec<String>,
    pub market_info: HashMap<String, ContractInfo>,
}

#[derive(Debug, Clone)]
pub struct OrderbookUpdateEvent {
    pub market_ticker: String,
    pub yes: BTreeMap<u8, f64>,
    pub no: BTreeMap<u8, f64>,
}

#[derive(Debug, Clone)]
pub struct WeatherObservation {
    pub station: String,
    pub value_fahrenheit: f64,
    pub ob_timestamp: DateTime<Utc>,
    pub received_timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct OrderIntent {
    pub strategy_id: String,
    pub event_ticker: String,
    pub series: String,
    pub station: String,
    pub market_ticker: String,
    pub side: Side,
    pub max_price_cents: u8,
    pub max_spend_cents: i64,
    pub paper_mode: bool,
}

#[derive(Debug, Clone)]
pub struct Fill {
    pub wall_clock: DateTime<Utc>,
    pub strategy_id: String,
    pub event_ticker: String,
    pub series: String,
    pub station: String,
    pub market_ticker: String,
    pub side: Side,
    pub contracts_filled: i64,
    pub avg_fill_price_cents: f64,
    pub total_cost_cents: i64,
    pub strategy_event_spent_cents: i64,
}

/// Commands sent from the discovery controller to the exchange ingest loop
/// so the websocket task can update its subscription set.
#[derive(Debug, Clone)]
pub enum WsMarketCommand {
    UpdateMarkets { add: Vec<String>, remove: Vec<String> },
}
