//! Event Bus — typed publish/subscribe.
//!
//! Generalizes `services/bot/events.py::EventBus` (a `dict[type, list[handler]]`
//! with `asyncio.create_task(handler(event))` fire-and-forget dispatch) into a
//! statically typed Rust bus: one broadcast channel per event category, so
//! subscription is by exact event type and delivery order for one event type
//! is publish order. Each subscriber owns an independent receiver and runs its
//! own dispatch loop in its own task, so one subscriber's processing failure
//! never drops another subscriber's delivery of the same event — the same
//! isolation `asyncio.create_task` gave the original per-handler fan-out.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::types::{MarketDiscoveryEvent, OrderIntent, OrderbookUpdateEvent, WeatherObservation};

const CHANNEL_CAPACITY: usize = 4096;

#[derive(Clone)]
pub struct EventBus {
    discovery: broadcast::Sender<Arc<MarketDiscoveryEvent>>,
    orderbook: broadcast::Sender<Arc<OrderbookUpdateEvent>>,
    weather: broadcast::Sender<Arc<WeatherObservation>>,
    intent: broadcast::Sender<Arc<OrderIntent>>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            discovery: broadcast::channel(CHANNEL_CAPACITY).0,
            orderbook: broadcast::channel(CHANNEL_CAPACITY).0,
            weather: broadcast::channel(CHANNEL_CAPACITY).0,
            intent: broadcast::channel(CHANNEL_CAPACITY).0,
        }
    }

    pub fn publish_discovery(&self, ev: MarketDiscoveryEvent) {
        let _ = self.discovery.send(Arc::new(ev));
    }

    pub fn subscribe_discovery(&self) -> broadcast::Receiver<Arc<MarketDiscoveryEvent>> {
        self.discovery.subscribe()
    }

    pub fn publish_orderbook(&self, ev: OrderbookUpdateEvent) {
        let _ = self.orderbook.send(Arc::new(ev));
    }

    pub fn subscribe_orderbook(&self) -> broadcast::Receiver<Arc<OrderbookUpdateEvent>> {
        self.orderbook.subscribe()
    }

    pub fn publish_weather(&self, ev: WeatherObservation) {
        let _ = self.weather.send(Arc::new(ev));
    }

    pub fn subscribe_weather(&self) -> broadcast::Receiver<Arc<WeatherObservation>> {
        self.weather.subscribe()
    }

    pub fn publish_intent(&self, ev: OrderIntent) {
        let _ = self.intent.send(Arc::new(ev));
    }

    pub fn subscribe_intent(&self) -> broadcast::Receiver<Arc<OrderIntent>> {
        self.intent.subscribe()
    }
}

/// Await the next delivery on a subscriber's receiver, skipping past
/// `Lagged` gaps with a warning instead of treating them as fatal — a slow
/// subscriber should catch back up on the next delivery, not kill its task.
/// `None` means the bus itself was dropped (publisher side gone).
///
/// An `async fn` rather than an inline `.await` chain so it can be used
/// directly as a `tokio::select!` branch: each call returns a fresh,
/// not-yet-polled future, which is what `select!` requires to race several
/// subscriptions inside one task (discovery / orderbook / weather, or
/// discovery / orderbook / intent).
pub async fn next_event<T>(rx: &mut broadcast::Receiver<Arc<T>>) -> Option<Arc<T>> {
    loop {
        match rx.recv().await {
            Ok(ev) => return Some(ev),
            Err(broadcast::error::RecvError::Lagged(n)) => {
                tracing::warn!(skipped = n, "bus subscriber lagged; resuming");
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => return None,
        }
    }
}
