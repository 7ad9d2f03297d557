use crate::PollStore;

use rp_config::PollConfig;

/// Shared state handed to every handler
#[derive(Clone, Default)]
pub struct AppState {
    pub store: PollStore,
    pub poll_config: PollConfig,
}
