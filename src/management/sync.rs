use std::fmt;

use crate::{
    pending, spotify,
    types::{PendingSong, Track},
    utils,
};

use super::SessionManager;

/// Maximum number of track URIs the playlist add endpoint accepts per request.
const ADD_BATCH_SIZE: usize = 100;

#[derive(Debug)]
pub enum SyncError {
    Catalog(reqwest::Error),
    Store(reqwest::Error),
    /// The queue made it into the playlist but the store delete failed, so
    /// the next drain will submit the same songs again.
    Clear(reqwest::Error),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Catalog(e) => write!(f, "catalog request failed: {}", e),
            SyncError::Store(e) => write!(f, "pending store request failed: {}", e),
            SyncError::Clear(e) => write!(f, "pending store clear failed: {}", e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainOutcome {
    Empty,
    Drained(usize),
}

/// Synchronizes the shared playlist with submissions.
///
/// Holds an in-memory snapshot of the playlist's tracks that duplicate
/// checks run against. The snapshot is replaced wholesale by
/// `fetch_playlist` and appended to by successful adds; it is never
/// mutated on a failed request.
pub struct PlaylistSync {
    session: SessionManager,
    snapshot: Vec<Track>,
}

impl PlaylistSync {
    pub fn new(session: SessionManager) -> Self {
        PlaylistSync {
            session,
            snapshot: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> &[Track] {
        &self.snapshot
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.snapshot.iter().any(|track| track.uri == uri)
    }

    /// Replaces the snapshot with the playlist's current remote state,
    /// following pagination until the full track list is read. On failure
    /// the previous snapshot stays in place.
    pub async fn fetch_playlist(&mut self) -> Result<(), SyncError> {
        let token = self.session.get_valid_token().await;
        let tracks = spotify::playlist::get_tracks(&token)
            .await
            .map_err(SyncError::Catalog)?;

        self.snapshot = tracks;
        Ok(())
    }

    pub async fn search(&mut self, query: &str, limit: u32) -> Result<Vec<Track>, SyncError> {
        let token = self.session.get_valid_token().await;
        spotify::search::search_tracks(&token, query, limit)
            .await
            .map_err(SyncError::Catalog)
    }

    /// Adds a single track to the playlist unless the snapshot already holds
    /// its URI. A duplicate is a no-op that makes no network request. After a
    /// successful add the track is appended to the snapshot, so submitting it
    /// again within the same run stays a no-op.
    pub async fn add_track(&mut self, track: &Track) -> Result<AddOutcome, SyncError> {
        if self.contains(&track.uri) {
            return Ok(AddOutcome::AlreadyPresent);
        }

        let token = self.session.get_valid_token().await;
        spotify::playlist::add_tracks(&token, &[track.uri.clone()])
            .await
            .map_err(SyncError::Catalog)?;

        self.snapshot.push(track.clone());
        Ok(AddOutcome::Added)
    }

    /// Replays every song queued in the pending store into the playlist, in
    /// queue order, then clears the store. The store is only cleared after
    /// all adds succeeded; any failure before that leaves the queue in place
    /// for the next run. A clear that fails after the adds is reported as
    /// its own error variant, since the queue then still holds songs that
    /// already made it into the playlist.
    pub async fn drain_pending(&mut self) -> Result<DrainOutcome, SyncError> {
        let songs: Vec<PendingSong> = pending::list().await.map_err(SyncError::Store)?;
        if songs.is_empty() {
            return Ok(DrainOutcome::Empty);
        }

        let uris = utils::pending_uris(&songs);
        let token = self.session.get_valid_token().await;
        for chunk in uris.chunks(ADD_BATCH_SIZE) {
            spotify::playlist::add_tracks(&token, chunk)
                .await
                .map_err(SyncError::Catalog)?;
        }

        pending::clear().await.map_err(SyncError::Clear)?;
        Ok(DrainOutcome::Drained(uris.len()))
    }
}
