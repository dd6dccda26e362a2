//! Service Configuration
//!
//! Runtime settings come from command-line flags, then environment variables,
//! then built-in defaults. Flags win.
//!
//! | Setting          | Env var                      | Flag               | Default          |
//! |------------------|------------------------------|--------------------|------------------|
//! | Listen address   | `TEXTS_BIND`                 | `--bind`           | `127.0.0.1:8000` |
//! | Stats interval   | `TEXTS_STATS_INTERVAL_SECS`  | `--stats-interval` | `30`             |
//! | Log level        | `TEXTS_LOG_LEVEL`            | `--log-level`      | `info`           |

use clap::Parser;
use std::net::SocketAddr;
use std::num::ParseIntError;
use std::time::Duration;
use tracing::Level;

pub const ENV_BIND: &str = "TEXTS_BIND";
pub const ENV_STATS_INTERVAL: &str = "TEXTS_STATS_INTERVAL_SECS";
pub const ENV_LOG_LEVEL: &str = "TEXTS_LOG_LEVEL";

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "text-snippets", version, about = "In-memory text snippet service")]
pub struct ServiceConfig {
    /// Address the HTTP server listens on.
    #[arg(long, env = ENV_BIND, default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Seconds between stats log lines. Zero disables the reporter.
    #[arg(
        long = "stats-interval",
        env = ENV_STATS_INTERVAL,
        default_value = "30",
        value_name = "SECS",
        value_parser = parse_interval
    )]
    pub stats_interval: Duration,

    /// Maximum log level (trace, debug, info, warn, error).
    #[arg(long, env = ENV_LOG_LEVEL, default_value = "info")]
    pub log_level: Level,
}

fn parse_interval(value: &str) -> Result<Duration, ParseIntError> {
    value.trim().parse().map(Duration::from_secs)
}
