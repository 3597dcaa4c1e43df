//! Diagnostic logging setup.
//!
//! `DWLOG_LOG` takes an `EnvFilter` directive (e.g. `dwlog=debug`); without
//! it the level follows `-v` flags. Output always goes to stderr.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "DWLOG_LOG";

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("dwlog={}", level_for(verbosity))));

    // a second init (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(5), "debug");
    }
}
