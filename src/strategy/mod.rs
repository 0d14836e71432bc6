//! Strategy Interface — the three-handler contract every strategy
//! implements, and a name -> constructor registry.
//!
//! Grounded on `services/bot/strategies/base.py::BaseStrategy` (the same
//! three handlers) as a Rust trait, with instance construction resolved by
//! `class_name` the way `services/bot/managers/strategy_manager.py` is implied
//! to (a string-keyed map, no reflection).

pub mod ladder;

use std::sync::Arc;

use crate::bus::{next_event, EventBus};
use crate::config::Config;
use crate::lifecycle::Shutdown;
use crate::types::{MarketDiscoveryEvent, OrderbookUpdateEvent, WeatherObservation};

/// All strategies must not mutate shared orderbook state and must keep
/// handlers cheap — trigger checks are O(ladder-size x history-size) with
/// small constants (spec §4.6).
pub trait Strategy: Send + Sync {
    fn id(&self) -> &str;
    fn on_market_discovery(&mut self, event: &MarketDiscoveryEvent);
    fn on_orderbook_update(&mut self, event: &OrderbookUpdateEvent);
    fn on_weather_observation(&mut self, event: &WeatherObservation);
}

/// One configured strategy instance, as read from `bot.strategies` (spec §6.5).
pub struct StrategySpec {
    pub id: String,
    pub class_name: String,
    pub targets: Vec<String>,
    pub params: serde_yaml::Mapping,
}

/// Resolve a configured strategy spec into a running instance. Unknown
/// `class_name`s are a startup failure (spec §6.7: "zero strategies loaded"
/// is fatal, and so is an unresolvable one — there is no silent skip here).
pub fn build(spec: &StrategySpec, bus: EventBus, config: Arc<Config>) -> anyhow::Result<Box<dyn Strategy>> {
    match spec.class_name.as_str() {
        "LadderStrategy" => Ok(Box::new(ladder::LadderStrategy::new(
            spec.id.clone(),
            spec.targets.clone(),
            &spec.params,
            bus,
            config,
        ))),
        other => anyhow::bail!("unknown strategy class_name: {other}"),
    }
}

/// Drives one strategy instance for the engine's lifetime, racing the three
/// event streams it cares about (spec §4.6: market discovery, orderbook
/// updates, weather observations). One task per configured strategy, so a
/// slow or panicking handler in one strategy never blocks another's delivery.
pub async fn run_instance(mut strategy: Box<dyn Strategy>, bus: EventBus, shutdown: Shutdown) {
    let mut discovery_rx = bus.subscribe_discovery();
    let mut orderbook_rx = bus.subscribe_orderbook();
    let mut weather_rx = bus.subscribe_weather();

    while shutdown.is_running() {
        tokio::select! {
            ev = next_event(&mut discovery_rx) => {
                match ev {
                    Some(e) => strategy.on_market_discovery(&e),
                    None => return,
                }
            }
            ev = next_event(&mut orderbook_rx) => {
                match ev {
                    Some(e) => strategy.on_orderbook_update(&e),
                    None => return,
                }
            }
            ev = next_event(&mut weather_rx) => {
                match ev {
                    Some(e) => strategy.on_weather_observation(&e),
                    None => return,
                }
            }
            _ = shutdown.recv() => {
                return;
            }
        }
    }
}
