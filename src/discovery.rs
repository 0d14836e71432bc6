//! Market Discovery Controller — resolves the active ticker set per
//! configured series at startup and on a fixed interval, generalized from the
//! teacher's `src/market_manager.rs` rotation loop (`fetch_current_market`,
//! `run_market_manager`, `WsMarketCommand::UpdateMarkets`) to the full
//! selection-strategy surface of `services/markets/ticker.py::_select_event_for_series`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::time::{interval, Duration};
use tracing::{info, warn};

use kalshi_rs::events::models::Event;
use kalshi_rs::KalshiClient;

use crate::bus::EventBus;
use crate::exchange::rest::{contracts_for_event, events_for_series};
use crate::exchange::ws::ExchangeHandle;
use crate::lifecycle::Shutdown;
use crate::registry;
use crate::types::MarketDiscoveryEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStrategy {
    Active,
    Next,
    Consecutive,
}

impl SelectionStrategy {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "next" => Some(Self::Next),
            "consecutive" => Some(Self::Consecutive),
            _ => None,
        }
    }
}

fn sort_key_active(e: &Event) -> (String, String, String) {
    (
        e.close_time.clone().unwrap_or_default(),
        e.strike_date.clone().unwrap_or_default(),
        e.event_ticker.clone(),
    )
}

fn sort_key_next(e: &Event) -> (String, String) {
    (e.strike_date.clone().unwrap_or_default(), e.event_ticker.clone())
}

/// Select which event tickers to track this cycle for one series.
fn select_events(mut events: Vec<Event>, strategy: SelectionStrategy, today: &str) -> Vec<Event> {
    match strategy {
        SelectionStrategy::Active => {
            events.sort_by(|a, b| sort_key_active(a).cmp(&sort_key_active(b)));
            events.into_iter().take(1).collect()
        }
        SelectionStrategy::Consecutive => {
            events.sort_by(|a, b| sort_key_active(a).cmp(&sort_key_active(b)));
            events.into_iter().take(2).collect()
        }
        SelectionStrategy::Next => {
            let mut upcoming: Vec<Event> = events
                .iter()
                .filter(|e| e.strike_date.as_deref().map(|d| d >= today).unwrap_or(false))
                .cloned()
                .collect();
            if upcoming.is_empty() {
                return select_events(events, SelectionStrategy::Active, today);
            }
            upcoming.sort_by(|a, b| sort_key_next(a).cmp(&sort_key_next(b)));
            upcoming.into_iter().take(1).collect()
        }
    }
}

/// One discovery pass over every configured series, aggregated into a single
/// `MarketDiscoveryEvent` published once per cycle — matching
/// `services/markets/ticker.py::resolve_event_tickers`/`discover_markets`,
/// which resolve one event per series but fold all of them into one flat
/// ticker set and one combined `market_info` before the bot ever sees it.
/// Errors for a single series are logged and skipped; the caller keeps
/// operating on whatever was previously resolved for that series (spec §4.5
/// failure mode), and the other series still publish normally this cycle.
async fn discover_once(
    client: &KalshiClient,
    exchange: &ExchangeHandle,
    bus: &EventBus,
    series_list: &[String],
    strategy: SelectionStrategy,
    tracked: &mut HashSet<String>,
) {
    let mut market_info = HashMap::new();

    for series in series_list {
        let Some(station) = registry::by_series(series) else {
            warn!(series, "series not in market registry; skipping");
            continue;
        };

        let today = chrono::Utc::now()
            .with_timezone(&station.tz)
            .date_naive()
            .format("%Y-%m-%d")
            .to_string();

        let events = match events_for_series(client, series, Some("open")).await {
            Ok(events) => events,
            Err(e) => {
                warn!(series, error = %e, "discovery REST call failed; keeping previous ticker set");
                continue;
            }
        };

        let selected = select_events(events, strategy, &today);
        if selected.is_empty() {
            info!(series, "no open events resolved this cycle");
            continue;
        }

        let mut series_info = HashMap::new();
        let mut failed = false;
        for event in &selected {
            match contracts_for_event(client, &event.event_ticker).await {
                Ok(contracts) => series_info.extend(contracts),
                Err(e) => {
                    warn!(series, event_ticker = %event.event_ticker, error = %e, "contracts fetch failed; aborting this series' cycle");
                    failed = true;
                    break;
                }
            }
        }
        if failed {
            continue;
        }

        info!(series, station = station.city, tickers = series_info.len(), "series resolved for this cycle");
        market_info.extend(series_info);
    }

    let tickers: Vec<String> = market_info.keys().cloned().collect();
    let new_set: HashSet<String> = tickers.iter().cloned().collect();

    if &new_set != tracked {
        let add: Vec<String> = new_set.difference(tracked).cloned().collect();
        let remove: Vec<String> = tracked.difference(&new_set).cloned().collect();
        exchange.update_markets(add, remove).await;
        exchange.request_reconnect();
        *tracked = new_set;
    }

    info!(tickers = tickers.len(), "market discovery cycle complete");
    bus.publish_discovery(MarketDiscoveryEvent { tickers, market_info });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(ticker: &str, close_time: &str, strike_date: &str) -> Event {
        Event {
            event_ticker: ticker.to_string(),
            series_ticker: "KXHIGHCHI".to_string(),
            sub_title: None,
            title: String::new(),
            collateral_return_type: None,
            mutually_exclusive: false,
            category: None,
            strike_date: Some(strike_date.to_string()),
            strike_period: None,
            close_time: Some(close_time.to_string()),
            markets: Vec::new(),
            available_on_brokers: false,
        }
    }

    #[test]
    fn active_takes_earliest_close_time() {
        let events = vec![
            event("A-26FEB22", "2026-02-22T23:00:00Z", "2026-02-22"),
            event("A-26FEB21", "2026-02-21T23:00:00Z", "2026-02-21"),
        ];
        let sel = select_events(events, SelectionStrategy::Active, "2026-02-21");
        assert_eq!(sel.len(), 1);
        assert_eq!(sel[0].event_ticker, "A-26FEB21");
    }

    #[test]
    fn consecutive_takes_first_two_by_active_order() {
        let events = vec![
            event("A-26FEB23", "2026-02-23T23:00:00Z", "2026-02-23"),
            event("A-26FEB21", "2026-02-21T23:00:00Z", "2026-02-21"),
            event("A-26FEB22", "2026-02-22T23:00:00Z", "2026-02-22"),
        ];
        let sel = select_events(events, SelectionStrategy::Consecutive, "2026-02-21");
        assert_eq!(sel.len(), 2);
        assert_eq!(sel[0].event_ticker, "A-26FEB21");
        assert_eq!(sel[1].event_ticker, "A-26FEB22");
    }

    #[test]
    fn next_filters_strike_date_at_or_after_today() {
        let events = vec![
            event("A-26FEB20", "2026-02-20T23:00:00Z", "2026-02-20"),
            event("A-26FEB22", "2026-02-22T23:00:00Z", "2026-02-22"),
        ];
        let sel = select_events(events, SelectionStrategy::Next, "2026-02-21");
        assert_eq!(sel.len(), 1);
        assert_eq!(sel[0].event_ticker, "A-26FEB22");
    }

    #[test]
    fn next_falls_back_to_active_when_nothing_upcoming() {
        let events = vec![event("A-26FEB20", "2026-02-20T23:00:00Z", "2026-02-20")];
        let sel = select_events(events, SelectionStrategy::Next, "2026-02-21");
        assert_eq!(sel.len(), 1);
        assert_eq!(sel[0].event_ticker, "A-26FEB20");
    }
}

pub async fn run(
    client: Arc<KalshiClient>,
    exchange: ExchangeHandle,
    bus: EventBus,
    series_list: Vec<String>,
    strategy: SelectionStrategy,
    rediscover_interval_seconds: u64,
    shutdown: Shutdown,
) {
    let mut tracked: HashSet<String> = HashSet::new();

    discover_once(&client, &exchange, &bus, &series_list, strategy, &mut tracked).await;

    let mut tick = interval(Duration::from_secs(rediscover_interval_seconds));
    tick.tick().await; // first tick fires immediately; startup pass already ran above.

    while shutdown.is_running() {
        tokio::select! {
            _ = tick.tick() => {
                if !shutdown.is_running() {
                    return;
                }
                discover_once(&client, &exchange, &bus, &series_list, strategy, &mut tracked).await;
            }
            _ = shutdown.recv() => {
                return;
            }
        }
    }
}
