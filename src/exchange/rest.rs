//! Exchange Client — REST half. Signed request transport is entirely the
//! vendored `kalshi-rs` crate's job (`client.rs`, `helpers.rs`, `auth/*`);
//! this module only shapes the two calls the core needs, per spec §4.1 /
//! §6.1, and maps raw `Market` rows into the engine's `ContractInfo`.

use std::collections::HashMap;

use anyhow::{Context, Result};

use kalshi_rs::KalshiClient;
use kalshi_rs::events::models::Event;
use kalshi_rs::markets::models::MarketsQuery;

use crate::ticker_window::cap_strike_from_subtitle;
use crate::types::ContractInfo;

/// `GET /events?series_ticker=...&status=open`.
pub async fn events_for_series(
    client: &KalshiClient,
    series: &str,
    status: Option<&str>,
) -> Result<Vec<Event>> {
    let resp = client
        .get_events_for_series(series, status)
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("get_events_for_series({series})"))?;
    Ok(resp.events)
}

/// `GET /markets?event_ticker=...`, mapped into `ContractInfo` keyed by
/// market ticker. Missing `no_bid`/`no_ask` are derived from the yes side via
/// the 100-complement rule; missing `cap_strike` falls back to subtitle
/// parsing (API-first, regex-fallback).
pub async fn contracts_for_event(
    client: &KalshiClient,
    event_ticker: &str,
) -> Result<HashMap<String, ContractInfo>> {
    let params = MarketsQuery {
        event_ticker: Some(event_ticker.to_string()),
        ..Default::default()
    };
    let resp = client
        .get_all_markets(&params)
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("get_markets_for_event({event_ticker})"))?;

    let mut out = HashMap::with_capacity(resp.markets.len());
    for m in resp.markets {
        let yes_bid = present_price(m.yes_bid);
        let yes_ask = present_price(m.yes_ask);
        let no_bid = present_price(m.no_bid).or_else(|| yes_ask.map(|p| 100u8.saturating_sub(p)));
        let no_ask = present_price(m.no_ask).or_else(|| yes_bid.map(|p| 100u8.saturating_sub(p)));
        let cap_strike = m.cap_strike.or_else(|| cap_strike_from_subtitle(&m.subtitle));

        out.insert(
            m.ticker.clone(),
            ContractInfo {
                event_ticker: m.event_ticker,
                subtitle: m.subtitle,
                yes_bid,
                yes_ask,
                no_bid,
                no_ask,
                last_price: present_price(m.last_price),
                volume: Some(m.volume),
                open_interest: Some(m.open_interest as u64),
                cap_strike,
            },
        );
    }
    Ok(out)
}

/// Kalshi represents "no resting orders at this price" as 0 rather than a
/// null field on these endpoints; treat it as missing.
fn present_price(cents: u32) -> Option<u8> {
    if cents == 0 {
        None
    } else {
        u8::try_from(cents).ok()
    }
}
