//! Logging setup for the `rotate_point` tool and the benchmarks
//!
//! The library emits `tracing` events only (a `trace!` whenever a rotation matrix
//! is reprojected onto SO(3)). Executables install a subscriber once at startup
//! with one of the functions below.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::SystemTime;

/// Install a subscriber at INFO, unless `RUST_LOG` says otherwise
///
/// # Example
/// ```no_run
/// use lie_rotation::init_logger;
///
/// init_logger();
/// tracing::info!("rotation tool started");
/// ```
///
/// To watch reprojections as they happen:
/// ```bash
/// RUST_LOG=lie_rotation=trace cargo run --bin rotate_point -- --compose-steps 100000
/// ```
pub fn init_logger() {
    init_logger_with_level(Level::INFO)
}

/// Install a subscriber with `default_level`, unless `RUST_LOG` says otherwise
///
/// `rotate_point --verbose` uses this with `Level::DEBUG` to print the full matrix.
pub fn init_logger_with_level(default_level: Level) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level, &directives))
        .with_timer(SystemTime)
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();
}

/// Filter from `RUST_LOG`-style `directives`, falling back to `default_level`.
///
/// Malformed directives are skipped rather than rejected.
fn build_filter(default_level: Level, directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(directives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_empty_directives_use_default_level() {
        let filter = build_filter(Level::INFO, "");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));

        let filter = build_filter(Level::DEBUG, "");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_explicit_directive_is_honoured() {
        let filter = build_filter(Level::INFO, "lie_rotation=trace");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
