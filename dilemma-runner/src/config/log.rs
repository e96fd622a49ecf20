use env_logger::Env;

const DEFAULT_FILTER: &str = "info";

/// Installs `env_logger`; `RUST_LOG` overrides the default filter.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)).init();
}
