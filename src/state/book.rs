//! Per-market orderbook model shared by the exchange ingest pipeline and the
//! execution manager's local replica.
//!
//! The teacher's own `state/book.rs::Book::apply_delta` is an *incremental*
//! model (`arr[idx] += delta`) suited to the real Kalshi `orderbook_delta`
//! wire format. This crate's contract instead specifies *absolute-set* delta
//! semantics (assign the level outright; remove it when qty <= 0), matching
//! `collector/kalshi/ws.py::apply_orderbook_delta`. That is a deliberate
//! divergence from the teacher's own incremental variant, not an oversight —
//! see DESIGN.md.

use std::collections::BTreeMap;

use crate::types::Side;

#[derive(Debug, Clone, Default)]
pub struct Book {
    pub yes: BTreeMap<u8, f64>,
    pub no: BTreeMap<u8, f64>,
}

impl Book {
    /// Replace the book for both sides entirely with the snapshot's levels.
    pub fn apply_snapshot(&mut self, yes: &[(u8, f64)], no: &[(u8, f64)]) {
        self.yes = yes.iter().copied().filter(|&(_, q)| q > 0.0).collect();
        self.no = no.iter().copied().filter(|&(_, q)| q > 0.0).collect();
    }

    /// Absolute-set: `qty <= 0` removes the level, otherwise the level is
    /// assigned outright regardless of any prior quantity at that price.
    pub fn apply_delta(&mut self, side: Side, price: u8, qty: f64) {
        let map = self.side_mut(side);
        if qty <= 0.0 {
            map.remove(&price);
        } else {
            map.insert(price, qty);
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut BTreeMap<u8, f64> {
        match side {
            Side::Yes => &mut self.yes,
            Side::No => &mut self.no,
        }
    }

    fn side(&self, side: Side) -> &BTreeMap<u8, f64> {
        match side {
            Side::Yes => &self.yes,
            Side::No => &self.no,
        }
    }

    pub fn best_bid(&self, side: Side) -> Option<(u8, f64)> {
        self.side(side).iter().next_back().map(|(&p, &q)| (p, q))
    }

    /// Implied asks for `side`, derived from the opposite side's resting bids
    /// by the 100-complement rule, sorted ascending by price (best first).
    pub fn implied_ask_levels(&self, side: Side) -> Vec<(u8, f64)> {
        let mut levels: Vec<(u8, f64)> = self
            .side(side.other())
            .iter()
            .map(|(&p, &q)| (100u8.saturating_sub(p), q))
            .collect();
        levels.sort_by_key(|&(p, _)| p);
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_replaces_book_exactly() {
        let mut b = Book::default();
        b.apply_delta(Side::Yes, 10, 5.0);
        b.apply_snapshot(&[(48, 100.0), (47, 50.0)], &[(50, 200.0)]);
        assert_eq!(b.yes.get(&48), Some(&100.0));
        assert_eq!(b.yes.get(&47), Some(&50.0));
        assert_eq!(b.yes.get(&10), None);
        assert_eq!(b.no.get(&50), Some(&200.0));
    }

    #[test]
    fn snapshot_drops_zero_and_negative_levels() {
        let mut b = Book::default();
        b.apply_snapshot(&[(48, 0.0), (47, -1.0), (46, 10.0)], &[]);
        assert_eq!(b.yes.len(), 1);
        assert_eq!(b.yes.get(&46), Some(&10.0));
    }

    #[test]
    fn delta_zero_removes_level() {
        let mut b = Book::default();
        b.apply_delta(Side::Yes, 48, 100.0);
        b.apply_delta(Side::Yes, 48, 0.0);
        assert!(b.yes.get(&48).is_none());
    }

    #[test]
    fn delta_is_absolute_assignment_not_additive() {
        let mut b = Book::default();
        b.apply_delta(Side::Yes, 48, 100.0);
        b.apply_delta(Side::Yes, 48, 30.0);
        assert_eq!(b.yes.get(&48), Some(&30.0));
    }

    #[test]
    fn all_stored_quantities_are_positive() {
        let mut b = Book::default();
        b.apply_delta(Side::Yes, 48, 100.0);
        b.apply_delta(Side::No, 52, 40.0);
        b.apply_delta(Side::Yes, 47, -5.0);
        for &q in b.yes.values().chain(b.no.values()) {
            assert!(q > 0.0);
        }
    }

    #[test]
    fn implied_ask_is_100_complement_of_opposite_bids_sorted_ascending() {
        let mut b = Book::default();
        b.apply_delta(Side::Yes, 48, 100.0);
        b.apply_delta(Side::Yes, 47, 50.0);
        let asks = b.implied_ask_levels(Side::No);
        assert_eq!(asks, vec![(52, 100.0), (53, 50.0)]);
    }
}
