//! Execution Manager — the centralized sweep-and-fill component (spec §4.7).
//!
//! Generalized from `services/bot/managers/execution.py::ExecutionManager`
//! (100-complement sweep, price-then-budget walk, CSV trade log) from a
//! single global paper balance to the spec's per-`(strategy_id,
//! event_ticker)` spend tally, and from paper-only to the paper/live parity
//! contract: `on_order_intent` always computes the same levels and the same
//! fill, and only the side effect (`record a Fill` vs `place a live sweep
//! order per level`, see [`live`]) differs on `intent.paper_mode`.

mod live;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use kalshi_rs::KalshiClient;

use crate::bus::{next_event, EventBus};
use crate::lifecycle::Shutdown;
use crate::persistence::FillSink;
use crate::state::book::Book;
use crate::types::{ContractInfo, Fill, MarketDiscoveryEvent, OrderIntent, OrderbookUpdateEvent};

/// Owned solely by the execution manager (spec §5): a local orderbook
/// replica kept in sync via bus events (never shared with the ingest
/// pipeline), last-known contract metadata, and the spend tally.
pub struct ExecutionManager {
    client: Arc<KalshiClient>,
    sink: Arc<FillSink>,
    orderbooks: HashMap<String, Book>,
    #[allow(dead_code)]
    market_info: HashMap<String, ContractInfo>,
    spent: HashMap<(String, String), i64>,
}

impl ExecutionManager {
    /// `sink` is shared (`Arc`) with the periodic/shutdown flush task in
    /// `main.rs` — the fill buffer Parquet rewrites from lives on this one
    /// instance, so whoever calls `flush()` must be looking at the same
    /// buffer `record()` fills.
    pub fn new(client: Arc<KalshiClient>, sink: Arc<FillSink>) -> Self {
        Self {
            client,
            sink,
            orderbooks: HashMap::new(),
            market_info: HashMap::new(),
            spent: HashMap::new(),
        }
    }

    fn on_market_discovery(&mut self, event: &MarketDiscoveryEvent) {
        for ticker in &event.tickers {
            self.orderbooks.entry(ticker.clone()).or_default();
        }
        self.market_info.extend(event.market_info.clone());
    }

    fn on_orderbook_update(&mut self, event: &OrderbookUpdateEvent) {
        let book = self.orderbooks.entry(event.market_ticker.clone()).or_default();
        book.yes = event.yes.clone();
        book.no = event.no.clone();
    }

    /// The sweep algorithm, spec §4.7 steps 1-6. Uses the manager's own
    /// snapshot of the book at the instant the intent is processed — the
    /// engine has no cross-feed ordering guarantee beyond that (spec §5).
    async fn on_order_intent(&mut self, intent: &OrderIntent) {
        let key = (intent.strategy_id.clone(), intent.event_ticker.clone());
        let spent_so_far = *self.spent.get(&key).unwrap_or(&0);
        let uncapped = intent.max_spend_cents <= 0;

        if !uncapped && spent_so_far >= intent.max_spend_cents {
            info!(strategy_id = %intent.strategy_id, event_ticker = %intent.event_ticker, "budget exhausted; skipping intent");
            return;
        }

        let Some(book) = self.orderbooks.get(&intent.market_ticker) else {
            warn!(market_ticker = %intent.market_ticker, "no local orderbook for intent; skipping (not blocking on a fetch)");
            return;
        };

        let levels = book.implied_ask_levels(intent.side);
        let mut filled: i64 = 0;
        let mut running_cost: i64 = 0;
        let mut consumed: Vec<(u8, i64)> = Vec::new();

        for (price_cents, qty) in levels {
            if price_cents > intent.max_price_cents {
                break;
            }
            let qty_contracts = qty.floor() as i64;
            if qty_contracts <= 0 {
                continue;
            }

            let take = if uncapped {
                qty_contracts
            } else {
                let remaining = intent.max_spend_cents - spent_so_far - running_cost;
                if remaining <= 0 {
                    break;
                }
                qty_contracts.min(remaining / price_cents as i64)
            };

            if take <= 0 {
                break;
            }

            filled += take;
            running_cost += take * price_cents as i64;
            consumed.push((price_cents, take));
        }

        if filled == 0 {
            info!(
                strategy_id = %intent.strategy_id,
                market_ticker = %intent.market_ticker,
                max_price_cents = intent.max_price_cents,
                "no liquidity under cap or budget exhausted; intent dropped"
            );
            return;
        }

        if !intent.paper_mode {
            if let Err(e) = live::place_sweep(&self.client, intent, &consumed).await {
                warn!(error = %e, market_ticker = %intent.market_ticker, "live sweep order placement failed");
            }
        }

        let cumulative = {
            let entry = self.spent.entry(key).or_insert(0);
            *entry += running_cost;
            *entry
        };

        let fill = Fill {
            wall_clock: Utc::now(),
            strategy_id: intent.strategy_id.clone(),
            event_ticker: intent.event_ticker.clone(),
            series: intent.series.clone(),
            station: intent.station.clone(),
            market_ticker: intent.market_ticker.clone(),
            side: intent.side,
            contracts_filled: filled,
            avg_fill_price_cents: running_cost as f64 / filled as f64,
            total_cost_cents: running_cost,
            strategy_event_spent_cents: cumulative,
        };

        info!(
            strategy_id = %fill.strategy_id,
            market_ticker = %fill.market_ticker,
            ?fill.side,
            contracts_filled = fill.contracts_filled,
            avg_fill_price_cents = fill.avg_fill_price_cents,
            total_cost_cents = fill.total_cost_cents,
            paper_mode = intent.paper_mode,
            "order intent executed"
        );

        if let Err(e) = self.sink.record(&fill).await {
            warn!(error = %e, "failed to persist fill");
        }
    }
}

/// Runs until the bus is dropped or `running` clears, racing the three event
/// streams the execution manager subscribes to (spec §4.7: `OrderbookUpdateEvent`,
/// `MarketDiscoveryEvent`, `OrderIntent`).
pub async fn run(mut manager: ExecutionManager, bus: EventBus, shutdown: Shutdown) {
    let mut discovery_rx = bus.subscribe_discovery();
    let mut orderbook_rx = bus.subscribe_orderbook();
    let mut intent_rx = bus.subscribe_intent();

    while shutdown.is_running() {
        tokio::select! {
            ev = next_event(&mut discovery_rx) => {
                match ev {
                    Some(e) => manager.on_market_discovery(&e),
                    None => return,
                }
            }
            ev = next_event(&mut orderbook_rx) => {
                match ev {
                    Some(e) => manager.on_orderbook_update(&e),
                    None => return,
                }
            }
            ev = next_event(&mut intent_rx) => {
                match ev {
                    Some(e) => manager.on_order_intent(&e).await,
                    None => return,
                }
            }
            _ = shutdown.recv() => {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn book_with_yes_bids(levels: &[(u8, f64)]) -> Book {
        let mut b = Book::default();
        for &(p, q) in levels {
            b.apply_delta(Side::Yes, p, q);
        }
        b
    }

    fn intent(max_price: u8, max_spend: i64) -> OrderIntent {
        OrderIntent {
            strategy_id: "ladder-chi".into(),
            event_ticker: "KXHIGHCHI-26FEB21".into(),
            series: "KXHIGHCHI".into(),
            station: "KMDW".into(),
            market_ticker: "KXHIGHCHI-26FEB21-T42".into(),
            side: Side::No,
            max_price_cents: max_price,
            max_spend_cents: max_spend,
            paper_mode: true,
        }
    }

    #[test]
    fn sweep_math_matches_scenario_one() {
        // spec §8 scenario 1: yes {48:100, 47:50} -> implied no asks [52:100, 53:50].
        let book = book_with_yes_bids(&[(48, 100.0), (47, 50.0)]);
        let levels = book.implied_ask_levels(Side::No);
        assert_eq!(levels, vec![(52, 100.0), (53, 50.0)]);

        let it = intent(95, 5000);
        let uncapped = it.max_spend_cents <= 0;
        let mut filled = 0i64;
        let mut running_cost = 0i64;
        for (price, qty) in levels {
            if price > it.max_price_cents {
                break;
            }
            let qty_contracts = qty.floor() as i64;
            let take = if uncapped {
                qty_contracts
            } else {
                let remaining = it.max_spend_cents - running_cost;
                if remaining <= 0 {
                    break;
                }
                qty_contracts.min(remaining / price as i64)
            };
            if take <= 0 {
                break;
            }
            filled += take;
            running_cost += take * price as i64;
        }
        assert_eq!(filled, 96);
        assert_eq!(running_cost, 4992);
    }
}
