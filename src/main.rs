use haven_role_relay::{bot, config::Config, error::AppError, logger};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    logger::init();

    let config = Config::from_file("config.json")?;

    tracing::info!("Starting Haven role relay");

    let client = bot::start::init_bot(&config).await?;
    bot::start::start_bot(client).await
}
