use time::macros::format_description;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, fmt::time::LocalTime};

/// `RUST_LOG` wins over the configured level when it is set.
pub fn init_tracing(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},sqlx=warn,hyper=info")));
    let timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ));

    fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_target(false)
        .init();
}
