mod models;
mod scrapers;

use models::{DateWindow, RunSnapshot};
use scrapers::ChromeSession;
use std::path::Path;
use tracing::{info, Level};

const SNAPSHOT_PATH: &str = "rates.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏨 Rate Scout - Kondapur nightly rate check");
    info!("===========================================");

    // One window for the whole run; every target checks the same night.
    let window = DateWindow::tonight();
    info!(
        "Checking {} -> {}",
        window.checkin_str(),
        window.checkout_str()
    );

    let targets = scrapers::sites::registry();

    let results = {
        let session = ChromeSession::launch()?;
        scrapers::run::scrape_all(&session, &targets, &window)
    }; // browser is released here, before the snapshot write

    let found = results.iter().filter(|r| r.price.is_some()).count();
    info!("Checked {} sites, {} with a price", results.len(), found);

    let snapshot = RunSnapshot::new(window, results);
    snapshot.persist(Path::new(SNAPSHOT_PATH)).await?;
    info!("💾 Saved snapshot to {}", SNAPSHOT_PATH);

    Ok(())
}
