//
//  incidentio-client
//  logging.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Logging setup for hosts that do not install their own subscriber.
//!
//! The client only emits `tracing` events. Wire dumps use the
//! `incidentio_client::wire` target at `info` level, so
//! `INCIDENT_IO_LOG=incidentio_client::wire=info` shows them alone.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "INCIDENT_IO_LOG";

/// Installs a stderr subscriber filtered by [`LOG_ENV`] (default `warn`).
///
/// Does nothing when a global subscriber is already set.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
