//! Logging setup.
//!
//! Quiet by default (`warn`); levels come from `[logging]` in the
//! settings file, with `RUST_LOG` taking precedence when set:
//!
//! ```bash
//! RUST_LOG=debug symdex index doc/html/search
//! RUST_LOG=symdex::parsing=trace symdex query image2d
//! ```

use std::sync::Once;

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Initialize logging. Safe to call more than once; only the first
/// call takes effect.
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let mut spec = config.default.clone();
            for (module, level) in &config.modules {
                spec.push_str(&format!(",{module}={level}"));
            }
            EnvFilter::new(spec)
        });

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}

/// Initialize with the default (quiet) configuration.
pub fn init() {
    init_with_config(&LoggingConfig::default());
}
