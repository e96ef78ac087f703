use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    management::{PlaylistSync, SessionManager},
    types::TrackTableRow,
    utils, warning,
};

pub async fn playlist() {
    let manager = match SessionManager::load().await {
        Ok(m) => m,
        Err(e) => {
            error!("Failed to load session. Please run bplcli auth\n Error: {}", e);
        }
    };

    let mut playlist = PlaylistSync::new(manager);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlist tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = playlist.fetch_playlist().await;
    pb.finish_and_clear();

    if let Err(e) = result {
        warning!("Failed to fetch playlist tracks: {}", e);
        return;
    }

    if playlist.snapshot().is_empty() {
        info!("The playlist is empty.");
        return;
    }

    let rows: Vec<TrackTableRow> = playlist
        .snapshot()
        .iter()
        .map(|track| TrackTableRow {
            name: track.name.clone(),
            artists: utils::format_artists(&track.artists),
            uri: track.uri.clone(),
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
