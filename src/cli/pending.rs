use tabled::Table;

use crate::{info, pending, types::TrackTableRow, warning};

pub async fn pending() {
    let songs = match pending::list().await {
        Ok(songs) => songs,
        Err(e) => {
            warning!("Failed to list pending songs: {}", e);
            return;
        }
    };

    if songs.is_empty() {
        info!("The pending queue is empty.");
        return;
    }

    let rows: Vec<TrackTableRow> = songs
        .iter()
        .map(|song| TrackTableRow {
            name: song.name.clone().unwrap_or_else(|| "-".to_string()),
            artists: song
                .artists
                .as_deref()
                .map(|artists| artists.join(", "))
                .unwrap_or_else(|| "-".to_string()),
            uri: song.uri.clone(),
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
    info!(
        "{} song(s) waiting; run bplcli sync to add them to the playlist.",
        songs.len()
    );
}
