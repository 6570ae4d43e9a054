mod client;
mod config;
mod error;

use anyhow::Result;
use dotenv::dotenv;
use log::info;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::load()?;
    let _admin = client::admin_client(&config)?;
    info!(
        "Kafka admin client created for {}",
        config.get("bootstrap.servers").unwrap_or_default()
    );

    Ok(())
}
