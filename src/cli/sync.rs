use crate::{
    error, info,
    management::{DrainOutcome, PlaylistSync, SessionManager, SyncError},
    success, warning,
};

pub async fn sync() {
    let manager = match SessionManager::load().await {
        Ok(m) => m,
        Err(e) => {
            error!("Failed to load session. Please run bplcli auth\n Error: {}", e);
        }
    };

    let mut playlist = PlaylistSync::new(manager);

    match playlist.drain_pending().await {
        Ok(DrainOutcome::Empty) => info!("No pending songs waiting in the store."),
        Ok(DrainOutcome::Drained(count)) => {
            success!("Added {} pending song(s) to the playlist.", count)
        }
        Err(SyncError::Clear(e)) => warning!(
            "Pending songs were added but the queue could not be cleared; the next sync will submit them again: {}",
            e
        ),
        Err(e) => warning!(
            "Failed to drain pending songs, they stay queued for the next sync: {}",
            e
        ),
    }

    match playlist.fetch_playlist().await {
        Ok(()) => info!("Playlist currently holds {} track(s).", playlist.snapshot().len()),
        Err(e) => warning!("Failed to fetch playlist tracks: {}", e),
    }
}
