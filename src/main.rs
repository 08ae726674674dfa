use linkstat::{config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::Config::from_env();
    telemetry::init_tracing(&config);

    config.validate()?;
    config.print_summary();

    server::run(config).await
}
