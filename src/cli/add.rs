use crate::{
    error, info,
    management::{AddOutcome, PlaylistSync, SessionManager},
    success,
    types::Track,
    utils, warning,
};

pub async fn add(track: String, search: bool) {
    if !search && !utils::is_track_uri(&track) {
        error!(
            "'{}' is not a spotify:track: URI. Use --search to submit a query instead.",
            track
        );
    }

    let manager = match SessionManager::load().await {
        Ok(m) => m,
        Err(e) => {
            error!("Failed to load session. Please run bplcli auth\n Error: {}", e);
        }
    };

    let mut playlist = PlaylistSync::new(manager);

    // The snapshot is what duplicate checks run against. Without it an add
    // could double up, so bail out instead.
    if let Err(e) = playlist.fetch_playlist().await {
        warning!("Failed to fetch playlist tracks, not adding anything: {}", e);
        return;
    }

    let track: Track = if search {
        match playlist.search(&track, 1).await {
            Ok(tracks) => match tracks.into_iter().next() {
                Some(t) => t,
                None => {
                    info!("No tracks matched '{}'.", track);
                    return;
                }
            },
            Err(e) => {
                warning!("Search failed: {}", e);
                return;
            }
        }
    } else {
        utils::track_from_uri(&track)
    };

    match playlist.add_track(&track).await {
        Ok(AddOutcome::Added) => success!("Added '{}' to the playlist.", track.name),
        Ok(AddOutcome::AlreadyPresent) => {
            info!("'{}' is already in the playlist, nothing to do.", track.name)
        }
        Err(e) => warning!("Failed to add '{}' to the playlist: {}", track.name, e),
    }
}
