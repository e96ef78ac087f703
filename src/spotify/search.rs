use reqwest::Client;

use crate::{
    config,
    types::{SearchResponse, Track},
};

/// Searches the Spotify catalog for tracks matching a free-text query.
///
/// Only the track portion of the search response is used. A query that
/// matches nothing yields an empty list, not an error.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `query` - Free-text query, e.g. a song or artist name
/// * `limit` - Maximum number of results to return (1-50)
pub async fn search_tracks(
    token: &str,
    query: &str,
    limit: u32,
) -> Result<Vec<Track>, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());
    let limit = limit.to_string();

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SearchResponse>().await?;
    Ok(res.tracks.items)
}
