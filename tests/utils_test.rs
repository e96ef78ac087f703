use bplcli::types::{PendingSong, TrackArtist};
use bplcli::utils::*;

// Helper function to create a test artist
fn create_test_artist(name: &str) -> TrackArtist {
    TrackArtist {
        name: name.to_string(),
    }
}

// Helper function to create a test pending song
fn create_test_pending_song(uri: &str, name: Option<&str>) -> PendingSong {
    PendingSong {
        uri: uri.to_string(),
        name: name.map(|n| n.to_string()),
        artists: None,
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_format_artists() {
    // Empty slice yields an empty string
    assert_eq!(format_artists(&[]), "");

    // Single artist
    let single = vec![create_test_artist("Carly Rae Jepsen")];
    assert_eq!(format_artists(&single), "Carly Rae Jepsen");

    // Multiple artists are comma separated in order
    let multiple = vec![
        create_test_artist("Daft Punk"),
        create_test_artist("Pharrell Williams"),
        create_test_artist("Nile Rodgers"),
    ];
    assert_eq!(
        format_artists(&multiple),
        "Daft Punk, Pharrell Williams, Nile Rodgers"
    );
}

#[test]
fn test_is_track_uri_valid_inputs() {
    assert!(is_track_uri("spotify:track:4cOdK2wGLETKBW3PvgPWqT"));
    assert!(is_track_uri("spotify:track:abc123"));
    assert!(is_track_uri("spotify:track:ABC123xyz"));
}

#[test]
fn test_is_track_uri_invalid_inputs() {
    // Wrong entity type
    assert!(!is_track_uri("spotify:album:4cOdK2wGLETKBW3PvgPWqT"));
    assert!(!is_track_uri("spotify:artist:4cOdK2wGLETKBW3PvgPWqT"));

    // Missing id
    assert!(!is_track_uri("spotify:track:"));

    // Not a URI at all
    assert!(!is_track_uri(""));
    assert!(!is_track_uri("never gonna give you up"));
    assert!(!is_track_uri(
        "https://open.spotify.com/track/4cOdK2wGLETKBW3PvgPWqT"
    ));

    // Id with non-alphanumeric characters
    assert!(!is_track_uri("spotify:track:abc 123"));
    assert!(!is_track_uri("spotify:track:abc:123"));
}

#[test]
fn test_track_from_uri() {
    let track = track_from_uri("spotify:track:4cOdK2wGLETKBW3PvgPWqT");

    // Id is the last URI segment
    assert_eq!(track.id, "4cOdK2wGLETKBW3PvgPWqT");

    // URI is carried over unchanged
    assert_eq!(track.uri, "spotify:track:4cOdK2wGLETKBW3PvgPWqT");

    // Without a catalog lookup the name falls back to the URI
    assert_eq!(track.name, "spotify:track:4cOdK2wGLETKBW3PvgPWqT");

    // No artist information is available
    assert!(track.artists.is_empty());
}

#[test]
fn test_pending_uris() {
    let songs = vec![
        create_test_pending_song("spotify:track:aaa", Some("Song A")),
        create_test_pending_song("spotify:track:bbb", None),
        create_test_pending_song("spotify:track:ccc", Some("Song C")),
    ];

    let uris = pending_uris(&songs);

    // Order is preserved
    assert_eq!(
        uris,
        vec!["spotify:track:aaa", "spotify:track:bbb", "spotify:track:ccc"]
    );

    // Duplicates in the queue are kept as-is
    let duplicated = vec![
        create_test_pending_song("spotify:track:aaa", None),
        create_test_pending_song("spotify:track:aaa", None),
    ];
    assert_eq!(pending_uris(&duplicated).len(), 2);
}
