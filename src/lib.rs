#![doc(test(attr(deny(warnings))))]

//! Nichiwari Core turns a purchase price and usage period into a per-day
//! ownership cost and finds everyday purchases that make that cost relatable.

pub mod cli;
pub mod comparison;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod presets;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Nichiwari Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
