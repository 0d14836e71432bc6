//! Ticker -> observation window resolution, and subtitle -> cap_strike
//! derivation.
//!
//! Grounded on `services/markets/ticker.py` (date parsing / window math) and
//! `collector/tz.py` (UTC-first discipline: no naive "now", every instant
//! here comes from `chrono::Utc::now()` or a parsed timestamp).

use std::sync::OnceLock;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use regex::Regex;

use crate::registry::Station;

fn date_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}[A-Z]{3}\d{2}$").unwrap())
}

fn month_num(abbr: &str) -> Option<u32> {
    Some(match abbr {
        "JAN" => 1,
        "FEB" => 2,
        "MAR" => 3,
        "APR" => 4,
        "MAY" => 5,
        "JUN" => 6,
        "JUL" => 7,
        "AUG" => 8,
        "SEP" => 9,
        "OCT" => 10,
        "NOV" => 11,
        "DEC" => 12,
        _ => return None,
    })
}

/// Parse the `YYMMMDD` token out of an event ticker (`SERIES-YYMMMDD[-suffix]`).
/// Two-digit year rollover past 2099 is an explicit non-goal.
pub fn parse_event_date(event_ticker: &str) -> Option<NaiveDate> {
    let re = date_token_re();
    for tok in event_ticker.split('-') {
        if re.is_match(tok) {
            let yy: i32 = tok[0..2].parse().ok()?;
            let mon = month_num(&tok[2..5])?;
            let dd: u32 = tok[5..7].parse().ok()?;
            return NaiveDate::from_ymd_opt(2000 + yy, mon, dd);
        }
    }
    None
}

/// UTC offset (in seconds, east positive) of the station's Local Standard
/// Time, evaluated at a fixed winter reference date so DST never leaks in.
fn lst_offset_seconds(station: &Station) -> i32 {
    let (month, day) = if station.lat < 0.0 { (7, 15) } else { (1, 15) };
    let local = station
        .tz
        .with_ymd_and_hms(2024, month, day, 12, 0, 0)
        .single()
        .expect("reference LST instant is unambiguous for every registered station");
    local.offset().fix().local_minus_utc()
}

/// `observation_window(event_ticker, station) -> (start_utc, end_utc)`.
///
/// Falls back to "today in the station's tz" if no date token parses.
pub fn observation_window(event_ticker: &str, station: &Station) -> (DateTime<Utc>, DateTime<Utc>) {
    let date = parse_event_date(event_ticker).unwrap_or_else(|| {
        tracing::warn!(event_ticker, "no YYMMMDD token in ticker; falling back to today in station tz");
        Utc::now().with_timezone(&station.tz).date_naive()
    });

    let offset_secs = lst_offset_seconds(station);
    let midnight = date.and_hms_opt(0, 0, 0).expect("midnight is always a valid time-of-day");
    let start_utc = Utc.from_utc_datetime(&midnight) - Duration::seconds(offset_secs as i64);
    let end_utc = start_utc + Duration::hours(24);
    (start_utc, end_utc)
}

fn or_above_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(-?\d+(?:\.\d+)?)\s*°?\s*(?:f\s*)?or above").unwrap())
}

fn range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(-?\d+(?:\.\d+)?)\s*°?\s*(?:f\s*)?to\s*(-?\d+(?:\.\d+)?)\s*°?").unwrap())
}

fn below_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)below\s*(-?\d+(?:\.\d+)?)\s*°?").unwrap())
}

fn last_numeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-?\d+(?:\.\d+)?").unwrap())
}

/// Derive `cap_strike` from a contract subtitle when the API field is
/// missing. Precedence is API-first, regex-fallback (the caller is
/// responsible for preferring the API value); within the fallback the order
/// is "X or above" -> X, "X to Y" -> Y, "below X" -> X, else last numeric
/// token. Returns `None` if nothing numeric is found.
pub fn cap_strike_from_subtitle(subtitle: &str) -> Option<f64> {
    if let Some(c) = or_above_re().captures(subtitle) {
        return c[1].parse().ok();
    }
    if let Some(c) = range_re().captures(subtitle) {
        return c[2].parse().ok();
    }
    if let Some(c) = below_re().captures(subtitle) {
        return c[1].parse().ok();
    }
    last_numeric_re()
        .find_iter(subtitle)
        .last()
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn parses_standard_ticker() {
        let d = parse_event_date("KXHIGHCHI-26FEB21").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 2, 21).unwrap());
    }

    #[test]
    fn parses_ticker_with_contract_suffix() {
        let d = parse_event_date("KXHIGHCHI-26FEB21-T42").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 2, 21).unwrap());
    }

    #[test]
    fn no_date_token_returns_none() {
        assert!(parse_event_date("KXHIGHCHI").is_none());
    }

    #[test]
    fn window_is_24h_and_lst_based() {
        let station = registry::by_series("KXHIGHCHI").unwrap();
        let (start, end) = observation_window("KXHIGHCHI-26FEB21", station);
        assert_eq!(end - start, Duration::hours(24));
        // Chicago LST (winter, no DST) is UTC-6.
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 2, 21, 6, 0, 0).unwrap());
    }

    #[test]
    fn window_new_york_offset() {
        let station = registry::by_series("KXHIGHNY").unwrap();
        let (start, _) = observation_window("KXHIGHNY-26FEB21", station);
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 2, 21, 5, 0, 0).unwrap());
    }

    #[test]
    fn cap_strike_or_above() {
        assert_eq!(cap_strike_from_subtitle("42° or above"), Some(42.0));
    }

    #[test]
    fn cap_strike_range_takes_upper_bound() {
        assert_eq!(cap_strike_from_subtitle("39° to 40°"), Some(40.0));
    }

    #[test]
    fn cap_strike_below() {
        assert_eq!(cap_strike_from_subtitle("below 39°"), Some(39.0));
    }

    #[test]
    fn cap_strike_last_numeric_fallback() {
        assert_eq!(cap_strike_from_subtitle("Chicago high temp 42"), Some(42.0));
    }

    #[test]
    fn cap_strike_no_numeric_is_none() {
        assert_eq!(cap_strike_from_subtitle("no numbers here"), None);
    }
}
