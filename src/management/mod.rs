mod session;
mod sync;

pub use session::RENEWAL_MARGIN_SECS;
pub use session::SessionManager;
pub use session::session_state;
pub use sync::AddOutcome;
pub use sync::DrainOutcome;
pub use sync::PlaylistSync;
pub use sync::SyncError;
