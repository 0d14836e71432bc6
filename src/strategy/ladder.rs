//! Ladder Strategy — the reference strategy instance. Generalizes
//! `services/bot/strategies/ladder.py::LadderStrategy` (same field names:
//! `trigger_temp`, `executed`, `nws_start`/`nws_end`, `consecutive_obs`,
//! `max_price_cents`) plus the `max_spend_per_event_cents` budget field
//! spec.md adds beyond the Python original (no spend cap there).

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::bus::EventBus;
use crate::config::Config;
use crate::ticker_window::observation_window;
use crate::types::{MarketDiscoveryEvent, OrderIntent, OrderbookUpdateEvent, Side, WeatherObservation, UNCAPPED};
use crate::registry;

use super::Strategy;

const WEATHER_HISTORY_CAPACITY: usize = 10;

struct LadderEntry {
    trigger_temp: f64,
    subtitle: String,
    executed: bool,
    series: String,
    station: String,
    event_ticker: String,
    nws_start_utc: DateTime<Utc>,
    nws_end_utc: DateTime<Utc>,
}

pub struct LadderStrategy {
    id: String,
    targets: Vec<String>,
    consecutive_obs: usize,
    max_price_cents: u8,
    max_spend_per_event_cents: i64,
    ladder: HashMap<String, LadderEntry>,
    weather_history: HashMap<String, VecDeque<(DateTime<Utc>, f64)>>,
    bus: EventBus,
    #[allow(dead_code)]
    config: Arc<Config>,
}

impl LadderStrategy {
    pub fn new(
        id: String,
        targets: Vec<String>,
        params: &serde_yaml::Mapping,
        bus: EventBus,
        config: Arc<Config>,
    ) -> Self {
        let consecutive_obs = param_i64(params, "consecutive_obs").unwrap_or(2).max(1) as usize;
        let max_price_cents = param_i64(params, "max_price_cents").unwrap_or(95).clamp(1, 99) as u8;
        let max_spend_per_event_cents = param_i64(params, "max_spend_per_event_cents").unwrap_or(UNCAPPED);

        Self {
            id,
            targets,
            consecutive_obs,
            max_price_cents,
            max_spend_per_event_cents,
            ladder: HashMap::new(),
            weather_history: HashMap::new(),
            bus,
            config,
        }
    }

    fn targets_series(&self, event_ticker: &str) -> bool {
        self.targets.iter().any(|t| event_ticker.starts_with(t.as_str()))
    }
}

fn param_i64(params: &serde_yaml::Mapping, key: &str) -> Option<i64> {
    params
        .get(serde_yaml::Value::String(key.to_string()))
        .and_then(|v| v.as_i64())
}

impl Strategy for LadderStrategy {
    fn id(&self) -> &str {
        &self.id
    }

    /// Rebuild the ladder from scratch and clear all weather history: a
    /// rediscovery cycle means the previously tracked contracts may no
    /// longer be the ones in play (spec §4.6.1). `event` now aggregates every
    /// configured series into one combined discovery cycle (matching
    /// `services/bot/events.py::MarketDiscoveryEvent`), so every strategy
    /// instance sees every cycle and filters down to its own targets here
    /// rather than being gated on a single series carried by the event.
    fn on_market_discovery(&mut self, event: &MarketDiscoveryEvent) {
        self.ladder.clear();
        self.weather_history.clear();
        for target in &self.targets {
            if let Some(station) = registry::by_series(target) {
                self.weather_history.insert(station.weather_station_id.to_string(), VecDeque::new());
            }
        }

        for ticker in &event.tickers {
            let Some(info) = event.market_info.get(ticker) else { continue };
            if !self.targets_series(&info.event_ticker) {
                continue;
            }
            let Some(cap_strike) = info.cap_strike else { continue };
            let Some(station) = registry::by_ticker(ticker) else { continue };
            let series = info.event_ticker.split('-').next().unwrap_or(&info.event_ticker).to_string();
            let (nws_start_utc, nws_end_utc) = observation_window(&info.event_ticker, station);

            self.ladder.insert(
                ticker.clone(),
                LadderEntry {
                    trigger_temp: cap_strike,
                    subtitle: info.subtitle.clone(),
                    executed: false,
                    series,
                    station: station.weather_station_id.to_string(),
                    event_ticker: info.event_ticker.clone(),
                    nws_start_utc,
                    nws_end_utc,
                },
            );
        }

        info!(strategy_id = %self.id, targets = ?self.targets, entries = self.ladder.len(), "ladder rebuilt");
    }

    fn on_orderbook_update(&mut self, _event: &OrderbookUpdateEvent) {}

    fn on_weather_observation(&mut self, event: &WeatherObservation) {
        let history = self
            .weather_history
            .entry(event.station.clone())
            .or_insert_with(VecDeque::new);
        history.push_back((event.ob_timestamp, event.value_fahrenheit));
        while history.len() > WEATHER_HISTORY_CAPACITY {
            history.pop_front();
        }

        let history = history.clone();
        let paper_mode = self.config.paper_mode();
        for (ticker, entry) in self.ladder.iter_mut() {
            if entry.executed || entry.station != event.station {
                continue;
            }

            let valid: Vec<(DateTime<Utc>, f64)> = history
                .iter()
                .copied()
                .filter(|(ts, _)| *ts >= entry.nws_start_utc && *ts <= entry.nws_end_utc)
                .collect();

            if valid.len() < self.consecutive_obs {
                continue;
            }

            let last_n = &valid[valid.len() - self.consecutive_obs..];
            if last_n.iter().all(|(_, temp)| *temp >= entry.trigger_temp) {
                entry.executed = true;
                info!(
                    strategy_id = %self.id,
                    ticker,
                    subtitle = %entry.subtitle,
                    trigger_temp = entry.trigger_temp,
                    "ladder triggered"
                );
                self.bus.publish_intent(OrderIntent {
                    strategy_id: self.id.clone(),
                    event_ticker: entry.event_ticker.clone(),
                    series: entry.series.clone(),
                    station: entry.station.clone(),
                    market_ticker: ticker.clone(),
                    side: Side::No,
                    max_price_cents: self.max_price_cents,
                    max_spend_cents: self.max_spend_per_event_cents,
                    paper_mode,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContractInfo;

    fn config() -> Arc<Config> {
        let yaml = r#"
event_series: ["KXHIGHCHI", "KXHIGHNY"]
event_rollover:
  rediscover_interval_seconds: 300
  event_selection: active
bot:
  paper_mode: true
  strategies:
    - id: ladder-multi
      class_name: LadderStrategy
      targets: ["KXHIGHCHI", "KXHIGHNY"]
"#;
        Arc::new(Config::from_yaml_str(yaml).unwrap())
    }

    fn strategy() -> LadderStrategy {
        LadderStrategy::new(
            "ladder-multi".to_string(),
            vec!["KXHIGHCHI".to_string(), "KXHIGHNY".to_string()],
            &serde_yaml::Mapping::new(),
            EventBus::new(),
            config(),
        )
    }

    fn contract(event_ticker: &str, cap_strike: f64) -> ContractInfo {
        ContractInfo { event_ticker: event_ticker.to_string(), cap_strike: Some(cap_strike), ..Default::default() }
    }

    /// Regression test for the bug where a per-series discovery event wiped
    /// the whole ladder on every publish: a strategy targeting two series
    /// must keep both series' entries after a single combined discovery
    /// event covering both.
    #[test]
    fn combined_discovery_event_builds_ladder_for_every_targeted_series() {
        let mut strat = strategy();
        let mut market_info = HashMap::new();
        market_info.insert("KXHIGHCHI-26FEB21-T42".to_string(), contract("KXHIGHCHI-26FEB21", 42.0));
        market_info.insert("KXHIGHNY-26FEB21-T50".to_string(), contract("KXHIGHNY-26FEB21", 50.0));

        strat.on_market_discovery(&MarketDiscoveryEvent {
            tickers: market_info.keys().cloned().collect(),
            market_info,
        });

        assert_eq!(strat.ladder.len(), 2);
        assert!(strat.ladder.contains_key("KXHIGHCHI-26FEB21-T42"));
        assert!(strat.ladder.contains_key("KXHIGHNY-26FEB21-T50"));
        assert_eq!(strat.ladder["KXHIGHCHI-26FEB21-T42"].station, "KMDW");
        assert_eq!(strat.ladder["KXHIGHNY-26FEB21-T50"].station, "KNYC");
    }

    /// A later cycle that only resolves one of the two series (e.g. the
    /// other series' REST call failed and was skipped upstream) still
    /// rebuilds from whatever the combined event carries; it must not need a
    /// second per-series event to retain the other series going forward.
    #[test]
    fn rebuild_replaces_ladder_wholesale_from_the_one_combined_event() {
        let mut strat = strategy();
        let mut first = HashMap::new();
        first.insert("KXHIGHCHI-26FEB21-T42".to_string(), contract("KXHIGHCHI-26FEB21", 42.0));
        first.insert("KXHIGHNY-26FEB21-T50".to_string(), contract("KXHIGHNY-26FEB21", 50.0));
        strat.on_market_discovery(&MarketDiscoveryEvent { tickers: first.keys().cloned().collect(), market_info: first });
        assert_eq!(strat.ladder.len(), 2);

        let mut second = HashMap::new();
        second.insert("KXHIGHCHI-26FEB22-T44".to_string(), contract("KXHIGHCHI-26FEB22", 44.0));
        second.insert("KXHIGHNY-26FEB22-T51".to_string(), contract("KXHIGHNY-26FEB22", 51.0));
        strat.on_market_discovery(&MarketDiscoveryEvent { tickers: second.keys().cloned().collect(), market_info: second });

        assert_eq!(strat.ladder.len(), 2);
        assert!(strat.ladder.contains_key("KXHIGHCHI-26FEB22-T44"));
        assert!(strat.ladder.contains_key("KXHIGHNY-26FEB22-T51"));
    }
}
