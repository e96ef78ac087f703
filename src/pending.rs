//! Client for the external pending-song store.
//!
//! The store is a small trusted web service that collects song submissions
//! made while nobody was authenticated. It exposes the queue as a JSON list
//! and a single delete operation that clears it wholesale. Authentication is
//! not part of its contract.

use reqwest::Client;

use crate::{config, types::PendingSong};

/// Reads the queued submissions in the order the store returns them.
pub async fn list() -> Result<Vec<PendingSong>, reqwest::Error> {
    let api_url = format!("{uri}/songs", uri = &config::store_apiurl());

    let client = Client::new();
    let response = client.get(&api_url).send().await?.error_for_status()?;

    response.json::<Vec<PendingSong>>().await
}

/// Clears the queue. Callers only do this after every queued track made it
/// into the playlist.
pub async fn clear() -> Result<(), reqwest::Error> {
    let api_url = format!("{uri}/songs", uri = &config::store_apiurl());

    let client = Client::new();
    client.delete(&api_url).send().await?.error_for_status()?;

    Ok(())
}
