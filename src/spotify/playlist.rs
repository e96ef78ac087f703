use reqwest::Client;

use crate::{
    config,
    types::{AddTracksToPlaylistRequest, AddTracksToPlaylistResponse, PlaylistTracksResponse, Track},
};

/// Retrieves the full track list of the shared playlist.
///
/// Follows the `next` links in the playlist tracks endpoint until every page
/// has been read, so the returned list reflects the playlist regardless of
/// its length. Playlist entries whose track object is null (removed or
/// unavailable tracks) are skipped.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - Every track currently in the playlist, in playlist order
/// - `Err(reqwest::Error)` - Network error, API error, or decode failure
///
/// # Example
///
/// ```
/// let tracks = get_tracks(&token).await?;
/// println!("Playlist holds {} tracks", tracks.len());
/// ```
pub async fn get_tracks(token: &str) -> Result<Vec<Track>, reqwest::Error> {
    let mut api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = &config::playlist_id()
    );

    let client = Client::new();
    let mut tracks: Vec<Track> = Vec::new();

    loop {
        let response = client
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let page = response.json::<PlaylistTracksResponse>().await?;
        tracks.extend(page.items.into_iter().filter_map(|item| item.track));

        match page.next {
            Some(next) => api_url = next,
            None => break,
        }
    }

    Ok(tracks)
}

/// Appends tracks to the shared playlist in the given order.
///
/// The endpoint accepts at most 100 URIs per request; callers with more
/// split the list into batches.
pub async fn add_tracks(
    token: &str,
    uris: &[String],
) -> Result<AddTracksToPlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = &config::playlist_id()
    );

    let request = AddTracksToPlaylistRequest {
        uris: uris.to_vec(),
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    response.json::<AddTracksToPlaylistResponse>().await
}
