//! Weather Feed Client — single long-lived websocket to Synoptic's push feed.
//!
//! Grounded on `collector/synoptic/ws.py::SynopticWSMixin`: URL-encoded
//! station filter (no client-initiated subscribe message), `type`-discriminated
//! JSON frames (`data` / `auth` / `metadata`), per-row decode guarded so one
//! bad row doesn't drop the others, and the same 5s/10s reconnect backoff
//! policy as the exchange client. Reuses `tokio-tungstenite`, the same crate
//! the vendored `kalshi-rs` SDK already depends on for its own websocket.

use chrono::{DateTime, NaiveDateTime, Utc};
use futures_util::StreamExt;
use serde::Deserialize;
use tokio::time::{sleep, Duration};
use tokio_tungstenite::connect_async;
use tracing::{info, warn};
use url::Url;

use crate::bus::EventBus;
use crate::lifecycle::Shutdown;
use crate::types::WeatherObservation;

const CLEAN_CLOSE_BACKOFF_MS: u64 = 5_000;
const ERROR_BACKOFF_MS: u64 = 10_000;

#[derive(Deserialize)]
struct Frame {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Vec<DataRow>,
    #[serde(default)]
    code: Option<String>,
}

#[derive(Deserialize)]
struct DataRow {
    #[allow(dead_code)]
    stid: String,
    #[allow(dead_code)]
    sensor: String,
    date: String,
    value: serde_json::Value,
}

/// Build the feed URL: `wss://push.synopticdata.com/feed/<TOKEN>/?units=english&stid=S1,S2,...&vars=air_temp`.
pub fn feed_url(token: &str, station_ids: &[String]) -> Result<Url, url::ParseError> {
    let stid = station_ids.join(",");
    Url::parse(&format!(
        "wss://push.synopticdata.com/feed/{token}/?units=english&stid={stid}&vars=air_temp"
    ))
}

/// Runs until shutdown is triggered. Reconnects with the exchange client's
/// same backoff policy; the feed's own keep-alive means no client ping is
/// needed.
pub async fn run(url: Url, bus: EventBus, shutdown: Shutdown) {
    while shutdown.is_running() {
        match connect_async(url.as_str()).await {
            Ok((stream, _response)) => {
                info!("weather feed connected");
                let mut clean_close = true;
                let (_sink, mut reader) = stream.split();

                loop {
                    tokio::select! {
                        msg = reader.next() => {
                            match msg {
                                Some(Ok(tokio_tungstenite::tungstenite::Message::Text(text))) => {
                                    handle_frame(&bus, &text, &shutdown);
                                    if !shutdown.is_running() {
                                        return;
                                    }
                                }
                                Some(Ok(tokio_tungstenite::tungstenite::Message::Close(_))) | None => {
                                    info!("weather feed closed");
                                    break;
                                }
                                Some(Ok(_)) => {}
                                Some(Err(e)) => {
                                    warn!(error = %e, "weather feed read error");
                                    clean_close = false;
                                    break;
                                }
                            }
                        }
                        _ = shutdown.recv() => {
                            return;
                        }
                    }
                }

                let backoff = if clean_close { CLEAN_CLOSE_BACKOFF_MS } else { ERROR_BACKOFF_MS };
                sleep(Duration::from_millis(backoff)).await;
            }
            Err(e) => {
                warn!(error = %e, "weather feed connect failed");
                sleep(Duration::from_millis(ERROR_BACKOFF_MS)).await;
            }
        }
    }
}

fn handle_frame(bus: &EventBus, text: &str, shutdown: &Shutdown) {
    let frame: Frame = match serde_json::from_str(text) {
        Ok(f) => f,
        Err(e) => {
            warn!(error = %e, "unparseable weather feed frame; dropping");
            return;
        }
    };

    match frame.kind.as_str() {
        "data" => {
            let received_ts = Utc::now();
            for row in frame.data {
                let Some(value) = row.value.as_f64() else {
                    warn!(stid = %row.stid, value = %row.value, "non-numeric observation value; dropping row");
                    continue;
                };
                let Ok(ob_timestamp) = parse_ob_timestamp(&row.date) else {
                    warn!(stid = %row.stid, date = %row.date, "unparseable observation timestamp; dropping row");
                    continue;
                };
                bus.publish_weather(WeatherObservation {
                    station: row.stid,
                    value_fahrenheit: value,
                    ob_timestamp,
                    received_timestamp: received_ts,
                });
            }
        }
        "auth" => {
            if frame.code.as_deref() == Some("failed") {
                warn!("weather feed authentication failed; stopping engine");
                shutdown.trigger();
            } else {
                info!("weather feed auth frame received");
            }
        }
        "metadata" => {
            info!("weather feed metadata frame received");
        }
        other => {
            warn!(kind = other, "unrecognized weather feed frame type");
        }
    }
}

/// The push feed sends `date` as a space-separated, timezone-less string
/// (`"2026-02-20 21:44:00"`), not RFC3339 — confirmed in both
/// `collector/synoptic/ws.py` and `collector/synoptic_listener.py`, which
/// both `strptime` with `"%Y-%m-%d %H:%M:%S"` and attach UTC directly rather
/// than converting from a local offset.
fn parse_ob_timestamp(date: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::EventBus;
    use chrono::TimeZone;

    #[test]
    fn auth_failed_clears_running() {
        let bus = EventBus::new();
        let shutdown = Shutdown::new();
        handle_frame(&bus, r#"{"type":"auth","code":"failed"}"#, &shutdown);
        assert!(!shutdown.is_running());
    }

    #[test]
    fn auth_ok_leaves_running_set() {
        let bus = EventBus::new();
        let shutdown = Shutdown::new();
        handle_frame(&bus, r#"{"type":"auth","code":"ok"}"#, &shutdown);
        assert!(shutdown.is_running());
    }

    #[test]
    fn data_frame_publishes_observation() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe_weather();
        let shutdown = Shutdown::new();
        handle_frame(
            &bus,
            r#"{"type":"data","data":[{"stid":"KMDW","sensor":"air_temp","date":"2026-02-21 18:00:00","value":42.5}]}"#,
            &shutdown,
        );
        let ev = rx.try_recv().expect("observation published");
        assert_eq!(ev.station, "KMDW");
        assert_eq!(ev.value_fahrenheit, 42.5);
        assert_eq!(ev.ob_timestamp, Utc.with_ymd_and_hms(2026, 2, 21, 18, 0, 0).unwrap());
    }

    #[test]
    fn ob_timestamp_parses_space_separated_wire_format() {
        // Real push-feed wire format, not RFC3339: "2026-02-20 21:44:00".
        let ts = parse_ob_timestamp("2026-02-20 21:44:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2026, 2, 20, 21, 44, 0).unwrap());
    }

    #[test]
    fn ob_timestamp_rejects_rfc3339() {
        assert!(parse_ob_timestamp("2026-02-21T18:00:00Z").is_err());
    }
}
