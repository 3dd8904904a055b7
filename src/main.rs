use emlak::{start_server, utilities::logging::init_tracing};
use shared::utilities::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::init().await?;
    init_tracing(config.tracing_level);

    start_server(config).await?;

    Ok(())
}
