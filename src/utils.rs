use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{PendingSong, Track, TrackArtist};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

pub fn format_artists(artists: &[TrackArtist]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn is_track_uri(value: &str) -> bool {
    match value.strip_prefix("spotify:track:") {
        Some(id) => !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric()),
        None => false,
    }
}

/// Builds a minimal track from a bare URI. The catalog is not consulted, so
/// the display name falls back to the URI itself.
pub fn track_from_uri(uri: &str) -> Track {
    let id = uri.rsplit(':').next().unwrap_or_default().to_string();

    Track {
        id,
        name: uri.to_string(),
        artists: Vec::new(),
        uri: uri.to_string(),
    }
}

pub fn pending_uris(songs: &[PendingSong]) -> Vec<String> {
    songs.iter().map(|song| song.uri.clone()).collect()
}
