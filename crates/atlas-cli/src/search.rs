//! The `search` subcommand: one bridge invocation over a terminal page.

use atlas_bridge::{Bridge, SearchOutcome};
use atlas_core::AppConfig;
use atlas_geocode::GeoSearchClient;

use crate::page::TerminalPage;

/// Runs one address search and prints the viewer URL on success.
///
/// # Errors
///
/// Returns an error when the client cannot be constructed or the search
/// fails with a transport/protocol error; negative results (not found,
/// coordinates missing) exit cleanly with their status line.
pub async fn run(config: &AppConfig, address: &str) -> anyhow::Result<()> {
    let client = GeoSearchClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.geocode_base,
    )?;
    let bridge = Bridge::new(client, TerminalPage::new(address), config);

    let outcome = bridge.run_search().await;
    if matches!(outcome, SearchOutcome::MapLoaded { .. }) {
        // The terminal page mounts synchronously, so the frame is "loaded"
        // as soon as the search returns.
        bridge.frame_loaded().await;
    }

    let (page, _book) = bridge.into_parts();
    if let Some(status) = page.status(atlas_bridge::status::PRIMARY_INDICATOR) {
        println!("status: {status}");
    }

    match outcome {
        SearchOutcome::MapLoaded { url } => {
            println!("{url}");
            Ok(())
        }
        SearchOutcome::NotFound
        | SearchOutcome::CoordinatesMissing
        | SearchOutcome::ContainerMissing
        | SearchOutcome::Superseded => Ok(()),
        SearchOutcome::Failed { message } => anyhow::bail!("search failed: {message}"),
    }
}
