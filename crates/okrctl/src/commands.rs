//! Command execution: wires config, client, feed and rendering together.

use crate::client::OkrClient;
use crate::display;
use crate::feed::OkrFeed;
use crate::json_types::BoardJson;
use crate::watch::LiveBoard;
use anyhow::Result;
use okr_common::{DashboardConfig, OkrFilter};
use std::time::Duration;

/// One fetch, rendered to the terminal or as stable JSON.
pub async fn list(config: &DashboardConfig, filter: &OkrFilter, json: bool) -> Result<()> {
    let client = OkrClient::new(&config.api_url, config.api_token.clone(), config.timeout_secs)?;
    let feed = OkrFeed::new(|filter: OkrFilter| {
        let client = client.clone();
        async move { client.fetch_okrs(&filter).await.map_err(anyhow::Error::from) }
    });

    feed.refresh(filter).await;
    let state = feed.state();

    if json {
        let board = BoardJson::from_state(&state);
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    display::print_board(&state);

    if state.error.is_some() {
        anyhow::bail!("fetch failed");
    }
    Ok(())
}

/// Live board: each tick is a manual refresh of the full fetch.
pub async fn watch(
    config: &DashboardConfig,
    filter: &OkrFilter,
    interval_override: Option<u64>,
) -> Result<()> {
    let client = OkrClient::new(&config.api_url, config.api_token.clone(), config.timeout_secs)?;
    let feed = OkrFeed::new(|filter: OkrFilter| {
        let client = client.clone();
        async move { client.fetch_okrs(&filter).await.map_err(anyhow::Error::from) }
    });

    let interval =
        Duration::from_secs(interval_override.unwrap_or(config.watch_interval_secs).max(1));

    let mut board = LiveBoard::new(feed.subscribe(), interval);
    board.run(|| feed.refresh(filter)).await
}
