mod bus;
mod config;
mod discovery;
mod exchange;
mod exec;
mod lifecycle;
mod persistence;
mod registry;
mod state;
mod strategy;
mod ticker_window;
mod types;
mod weather;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::time::{interval, Duration};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kalshi_rs::auth::Account;
use kalshi_rs::{KalshiClient, KalshiWebsocketClient};

use bus::EventBus;
use config::Config;
use exec::ExecutionManager;
use lifecycle::{install_signal_handlers, Shutdown};
use persistence::FillSink;
use state::OrderbookStore;
use strategy::StrategySpec;

/// `kalshi_weather_bot [config path]`; defaults to `config.yaml` in the
/// working directory (spec §6.7 startup sequence).
fn config_path() -> PathBuf {
    std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("config.yaml"))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Arc::new(Config::from_file(&config_path()).context("loading config")?);
    let credentials = config::load_credentials(&config.credentials).context("loading credentials")?;

    let account = Account::from_file(
        credentials.private_key_path.to_str().context("private key path is not valid UTF-8")?,
        credentials.api_key_id.clone(),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("constructing exchange account")?;

    let client = Arc::new(KalshiClient::new(account.clone()));
    let ws_client = KalshiWebsocketClient::new(account);

    let bus = EventBus::new();
    let store = OrderbookStore::new();
    let shutdown = Shutdown::new();
    install_signal_handlers(shutdown.clone());

    let (exchange_handle, exchange_task) =
        exchange::ws::spawn(ws_client, store, bus.clone(), Vec::new(), shutdown.clone());

    let weather_stations: Vec<String> = config
        .event_series
        .iter()
        .filter_map(|series| registry::by_series(series))
        .map(|s| s.weather_station_id.to_string())
        .filter(|id| !id.is_empty())
        .collect();
    let weather_url = weather::feed_url(&credentials.weather_feed_token, &weather_stations)
        .context("building weather feed url")?;
    let weather_task = tokio::spawn(weather::run(weather_url, bus.clone(), shutdown.clone()));

    let discovery_task = tokio::spawn(discovery::run(
        client.clone(),
        exchange_handle,
        bus.clone(),
        config.event_series.clone(),
        config.event_rollover.selection_strategy()?,
        config.event_rollover.rediscover_interval_seconds,
        shutdown.clone(),
    ));

    let mut strategy_tasks = Vec::with_capacity(config.bot.strategies.len());
    for s in &config.bot.strategies {
        let spec = StrategySpec {
            id: s.id.clone(),
            class_name: s.class_name.clone(),
            targets: s.targets.clone(),
            params: s.params.clone(),
        };
        let instance = strategy::build(&spec, bus.clone(), config.clone())
            .with_context(|| format!("building strategy {}", spec.id))?;
        info!(strategy_id = %spec.id, class_name = %spec.class_name, "strategy instance started");
        strategy_tasks.push(tokio::spawn(strategy::run_instance(instance, bus.clone(), shutdown.clone())));
    }

    let sink = Arc::new(FillSink::new(config.persistence.csv_path(), config.persistence.parquet_dir()));
    let manager = ExecutionManager::new(client.clone(), sink.clone());
    let exec_task = tokio::spawn(exec::run(manager, bus.clone(), shutdown.clone()));

    let flush_sink = sink;
    let flush_interval = config.persistence.flush_interval_seconds;
    let flush_shutdown = shutdown.clone();
    let flush_task = tokio::spawn(async move {
        let mut tick = interval(Duration::from_secs(flush_interval));
        loop {
            tokio::select! {
                _ = tick.tick() => {
                    if let Err(e) = flush_sink.flush().await {
                        error!(error = %e, "periodic fill flush failed");
                    }
                }
                _ = flush_shutdown.recv() => {
                    if let Err(e) = flush_sink.flush().await {
                        error!(error = %e, "shutdown fill flush failed");
                    }
                    return;
                }
            }
        }
    });

    info!(
        series = ?config.event_series,
        strategies = config.bot.strategies.len(),
        "engine started"
    );

    let _ = tokio::join!(exchange_task, weather_task, discovery_task, exec_task, flush_task);
    for t in strategy_tasks {
        let _ = t.await;
    }

    info!("engine shut down cleanly");
    Ok(())
}
