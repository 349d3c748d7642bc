//! Diagnostic logging.
//!
//! Progress the user asked for goes through [`crate::output`] on stdout.
//! Everything else is a `tracing` event written to stderr, so piping
//! `shopfront check --json` stays clean. `RUST_LOG` overrides the filter.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "shopfront=debug,info" } else { "shopfront=warn" }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_crate_level() {
        assert_eq!(default_directive(true), "shopfront=debug,info");
        assert_eq!(default_directive(false), "shopfront=warn");
    }

    #[test]
    fn directives_parse() {
        for verbose in [true, false] {
            assert!(EnvFilter::try_new(default_directive(verbose)).is_ok());
        }
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_cli_logger(false);
        init_cli_logger(true);
    }
}
