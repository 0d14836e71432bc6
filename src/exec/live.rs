//! Live order placement — the "how to buy" half of the execution manager's
//! paper/live split (spec §4.7 paper/live equivalence invariant).
//!
//! One IOC limit order per price level the paper sweep consumed, so the set
//! of orders submitted here is exactly the `(price, contracts)` pairs the
//! paper sweep recorded — "byte-identical" sweep semantics, just a different
//! side effect per level. Grounded on `src/exec/http.rs` (teacher's
//! `CreateOrderRequest` construction for a signed limit order) generalized
//! from a single resting GTC order to a per-level IOC sweep.

use anyhow::Result;

use kalshi_rs::portfolio::models::CreateOrderRequest;
use kalshi_rs::KalshiClient;

use crate::types::{OrderIntent, Side};

/// Place one IOC limit order per `(price_cents, contracts)` level consumed by
/// the sweep, in the same best-first order the paper path recorded them.
pub async fn place_sweep(
    client: &KalshiClient,
    intent: &OrderIntent,
    levels: &[(u8, i64)],
) -> Result<()> {
    for (price_cents, qty) in levels {
        let client_order_id = uuid::Uuid::new_v4().to_string();
        let req = order_request(intent, *price_cents, *qty as u64, &client_order_id);
        let resp = client.create_order(&req).await.map_err(|e| anyhow::anyhow!("{e}"))?;
        tracing::info!(
            market_ticker = %intent.market_ticker,
            order_id = %resp.order.order_id,
            price_cents,
            qty,
            "live sweep order placed"
        );
    }
    Ok(())
}

fn order_request(intent: &OrderIntent, price_cents: u8, qty: u64, client_order_id: &str) -> CreateOrderRequest {
    let (yes_price, no_price) = match intent.side {
        Side::Yes => (Some(price_cents as u64), None),
        Side::No => (None, Some(price_cents as u64)),
    };

    CreateOrderRequest {
        ticker: intent.market_ticker.clone(),
        side: intent.side.as_str().to_string(),
        action: "buy".to_string(),
        count: qty,
        client_order_id: Some(client_order_id.to_string()),
        type_: Some("limit".to_string()),
        yes_price,
        no_price,
        yes_price_dollars: None,
        no_price_dollars: None,
        expiration_ts: None,
        time_in_force: Some("ioc".to_string()),
        buy_max_cost: None,
        post_only: Some(false),
        reduce_only: None,
        self_trade_prevention_type: None,
        order_group_id: None,
        cancel_order_on_pause: None,
    }
}
