use std::env;

use dotenv::dotenv;
use eyre::Context;
use log::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    if let Err(err) = dotenv() {
        info!("Failed to load .env file: {}", err);
    }
    pretty_env_logger::init();
    color_eyre::install()?;
    info!("connecting to mongo");
    let mongo_url = env::var("MONGO_URL").context("Failed to get MONGO_URL from env")?;
    let storage = storage::Storage::new(&mongo_url)
        .await
        .context("Failed to create storage")?;
    info!("creating registry");
    let registry = registry::Registry::new(storage);

    let mut session = registry.db.start_session().await?;
    let batches = registry.batches.get_all(&mut session).await?;
    let trainers = registry.trainers.get_all(&mut session).await?;
    info!(
        "registry ready: {} batches, {} trainers",
        batches.len(),
        trainers.len()
    );

    Ok(())
}
