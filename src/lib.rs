#![doc(test(attr(deny(warnings))))]

//! Carbon Admin manages carbon-footprint reference records (line-item
//! categories, invoice line items, and HSR station entries) against a remote
//! REST backend, through an interactive management shell.

pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod domain;
pub mod errors;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Carbon Admin tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("carbon_admin=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
