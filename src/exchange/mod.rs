//! Exchange Client — signed REST + websocket access to Kalshi, built on top
//! of the vendored `kalshi-rs` SDK crate.

pub mod rest;
pub mod ws;
