use roster_business::{BusinessConfig, FetchState, user_list_ctx};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    /// Text currently in the country filter field. Pushed to the context whenever it changes.
    pub filter_draft: String,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            ctx: user_list_ctx(config, FetchState::default()),
            filter_draft: String::new(),
        }
    }

    /// State pointed at a mock server; users are served from `<base_url>/api/`.
    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(format!("{base_url}/api/")))
    }
}
