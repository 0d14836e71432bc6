//! Orderbook Store — owned solely by the ingest pipeline (spec §5: "Orderbook
//! state is owned solely by the ingest pipeline; the execution manager
//! maintains a replica updated via events"). Generalizes the teacher's
//! `Shared { tickers: Arc<DashMap<String, Arc<TickerState>>> }` pattern
//! (`src/state/mod.rs`, `src/state/ticker.rs`) down to just the book, since
//! position/order/flow state has no counterpart in this spec.

pub mod book;

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::RwLock;

use crate::types::{OrderbookUpdateEvent, Side};
use book::Book;

#[derive(Clone, Default)]
pub struct OrderbookStore {
    books: Arc<DashMap<String, Arc<RwLock<Book>>>>,
}

impl OrderbookStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, ticker: &str) -> Arc<RwLock<Book>> {
        self.books
            .entry(ticker.to_string())
            .or_insert_with(|| Arc::new(RwLock::new(Book::default())))
            .clone()
    }

    /// Logical-inconsistency policy (spec §7): a delta for a ticker never
    /// snapshot'd is ignored, not inferred. Callers should check
    /// `has_snapshot` before applying a delta; snapshot application always
    /// creates the entry.
    pub fn has_snapshot(&self, ticker: &str) -> bool {
        self.books.contains_key(ticker)
    }

    pub async fn apply_snapshot(&self, ticker: &str, yes: &[(u8, f64)], no: &[(u8, f64)]) {
        let book = self.entry(ticker);
        let mut g = book.write().await;
        g.apply_snapshot(yes, no);
    }

    pub async fn apply_delta(&self, ticker: &str, side: Side, price: u8, qty: f64) {
        let book = self.entry(ticker);
        let mut g = book.write().await;
        g.apply_delta(side, price, qty);
    }

    pub async fn event_for(&self, ticker: &str) -> OrderbookUpdateEvent {
        let book = self.entry(ticker);
        let g = book.read().await;
        OrderbookUpdateEvent {
            market_ticker: ticker.to_string(),
            yes: g.yes.clone(),
            no: g.no.clone(),
        }
    }

    pub fn remove(&self, ticker: &str) {
        self.books.remove(ticker);
    }
}
