use std::env;
use std::process::ExitCode;

use anyhow::Result;
use log::{error, info};

use lounasvahti::restaurants::{default_restaurants, http_client};
use lounasvahti::scrape;
use lounasvahti::telegram::MenuPoster;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    env_logger::init();

    info!("Starting lunch menu scraper");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let Ok(bot_token) = env::var("TELEGRAM_BOT_TOKEN") else {
        error!("TELEGRAM_BOT_TOKEN environment variable not set");
        return Ok(ExitCode::from(1));
    };
    let Ok(channel_id) = env::var("TELEGRAM_CHANNEL_ID") else {
        error!("TELEGRAM_CHANNEL_ID environment variable not set");
        return Ok(ExitCode::from(1));
    };

    let client = http_client()?;
    let restaurants = default_restaurants();
    info!("Initialized {} restaurant scrapers", restaurants.len());

    let poster = MenuPoster::new(&bot_token, &channel_id);
    let status = scrape::run(&client, &restaurants, &poster).await;

    info!("Run finished with status {:?}", status);
    Ok(ExitCode::from(status.exit_code() as u8))
}
