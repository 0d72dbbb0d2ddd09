//! Structured logging setup.
//!
//! Events go to stderr through a `tracing-subscriber` fmt layer so stdout
//! carries only the calculator's own output. The filter comes from
//! `CALCSTATE_LOG` (same syntax as `RUST_LOG`) and defaults to `warn`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::env::Env;

/// Default filter directive when `CALCSTATE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from the environment.
pub fn filter_from_env(env: &Env) -> EnvFilter {
    env.var(crate::constants::ENV_LOG)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(env: &Env) {
    let _ = tracing_subscriber::registry()
        .with(filter_from_env(env))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_when_unset() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert_eq!(filter_from_env(&env).to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn filter_from_variable() {
        let env = Env::mock([("CALCSTATE_LOG", "debug")]);
        assert_eq!(filter_from_env(&env).to_string(), "debug");
    }

    #[test]
    fn init_twice_is_harmless() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        init(&env);
        init(&env);
    }
}
