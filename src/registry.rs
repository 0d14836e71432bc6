//! Market Registry — the static series-prefix -> station mapping.
//!
//! Immutable at runtime (spec: "Market registry is immutable at runtime").
//! Seeded from the station list the original bot ships
//! (`collector/weather/stations.py::STATION_REGISTRY`).

use chrono_tz::Tz;

#[derive(Debug, Clone, Copy)]
pub struct Station {
    /// Kalshi series prefix, e.g. "KXHIGHCHI".
    pub series_prefix: &'static str,
    /// 4-letter exchange-market station id (ICAO-style).
    pub icao: &'static str,
    /// 3-letter regional station id (IATA-style).
    pub iata: &'static str,
    pub city: &'static str,
    pub tz: Tz,
    pub lat: f64,
    pub lon: f64,
    /// Synoptic push feed station id. May be empty if the series has no
    /// configured weather-feed counterpart.
    pub weather_station_id: &'static str,
}

const STATIONS: &[Station] = &[
    Station {
        series_prefix: "KXHIGHCHI",
        icao: "KMDW",
        iata: "MDW",
        city: "Chicago",
        tz: chrono_tz::US::Central,
        lat: 41.7868,
        lon: -87.7522,
        weather_station_id: "KMDW",
    },
    Station {
        series_prefix: "KXHIGHNY",
        icao: "KNYC",
        iata: "NYC",
        city: "New York",
        tz: chrono_tz::US::Eastern,
        lat: 40.7794,
        lon: -73.9692,
        weather_station_id: "KNYC",
    },
    Station {
        series_prefix: "KXHIGHMIA",
        icao: "KMIA",
        iata: "MIA",
        city: "Miami",
        tz: chrono_tz::US::Eastern,
        lat: 25.7959,
        lon: -80.2870,
        weather_station_id: "KMIA",
    },
    Station {
        series_prefix: "KXHIGHDEN",
        icao: "KDEN",
        iata: "DEN",
        city: "Denver",
        tz: chrono_tz::US::Mountain,
        lat: 39.8461,
        lon: -104.6562,
        weather_station_id: "KDEN",
    },
    Station {
        series_prefix: "KXHIGHAUS",
        icao: "KAUS",
        iata: "AUS",
        city: "Austin",
        tz: chrono_tz::US::Central,
        lat: 30.1945,
        lon: -97.6699,
        weather_station_id: "KAUS",
    },
    Station {
        series_prefix: "KXHIGHHOU",
        icao: "KHOU",
        iata: "HOU",
        city: "Houston",
        tz: chrono_tz::US::Central,
        lat: 29.6454,
        lon: -95.2789,
        weather_station_id: "KHOU",
    },
    Station {
        series_prefix: "KXHIGHPHL",
        icao: "KPHL",
        iata: "PHL",
        city: "Philadelphia",
        tz: chrono_tz::US::Eastern,
        lat: 39.8744,
        lon: -75.2424,
        weather_station_id: "KPHL",
    },
];

/// All registered stations.
pub fn all() -> &'static [Station] {
    STATIONS
}

/// Look up a station by its series prefix (e.g. "KXHIGHCHI").
pub fn by_series(series_prefix: &str) -> Option<&'static Station> {
    STATIONS.iter().find(|s| s.series_prefix == series_prefix)
}

/// Look up the station owning an event or market ticker by matching the
/// series prefix that the ticker starts with (tickers look like
/// `KXHIGHCHI-26FEB21` or `KXHIGHCHI-26FEB21-T42`).
pub fn by_ticker(ticker: &str) -> Option<&'static Station> {
    let series = ticker.split('-').next().unwrap_or(ticker);
    by_series(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_series_resolve() {
        assert_eq!(by_series("KXHIGHCHI").unwrap().city, "Chicago");
        assert_eq!(by_ticker("KXHIGHNY-26FEB21").unwrap().city, "New York");
    }

    #[test]
    fn unknown_series_is_none() {
        assert!(by_series("KXHIGHZZZ").is_none());
    }
}
