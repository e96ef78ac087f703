use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    management::{PlaylistSync, SessionManager},
    types::SearchTableRow,
    utils, warning,
};

const SEARCH_LIMIT: u32 = 20;

pub async fn search(query: String) {
    let manager = match SessionManager::load().await {
        Ok(m) => m,
        Err(e) => {
            error!("Failed to load session. Please run bplcli auth\n Error: {}", e);
        }
    };

    let mut playlist = PlaylistSync::new(manager);

    // Best effort: without the snapshot the results simply lose their
    // already-added markers.
    if let Err(e) = playlist.fetch_playlist().await {
        warning!("Failed to fetch playlist tracks: {}", e);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching the catalog...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = playlist.search(&query, SEARCH_LIMIT).await;
    pb.finish_and_clear();

    let tracks = match result {
        Ok(tracks) => tracks,
        Err(e) => {
            warning!("Search failed: {}", e);
            return;
        }
    };

    if tracks.is_empty() {
        info!("No tracks matched '{}'.", query);
        return;
    }

    let rows: Vec<SearchTableRow> = tracks
        .iter()
        .map(|track| SearchTableRow {
            added: if playlist.contains(&track.uri) {
                "✓".to_string()
            } else {
                String::new()
            },
            name: track.name.clone(),
            artists: utils::format_artists(&track.artists),
            uri: track.uri.clone(),
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
    info!("Tracks marked ✓ are already in the playlist; adding them again is a no-op.");
}
