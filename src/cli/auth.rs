use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{spotify, types::PkceSession};

pub async fn auth(shared_state: Arc<Mutex<Option<PkceSession>>>) {
    spotify::auth::authorize(shared_state).await;

    // Reached only with a persisted session. Replay queued submissions and
    // load the playlist so the first interactive command starts current.
    super::sync().await;
}
