use crate::api::ApiClient;
use crate::config::EnvConfig;
use crate::models::AccountInfo;
use crate::storage::{load_demo_mode, load_user_from_storage, save_demo_mode};
use leptos::prelude::*;

#[derive(Clone)]
pub(crate) struct AppState {
    pub config: StoredValue<EnvConfig>,
    pub api_client: RwSignal<ApiClient>,
    pub current_user: RwSignal<Option<AccountInfo>>,

    /// List pages serve illustrative rows instead of calling the backend.
    /// Starts from the stored toggle, else `window.ENV.DEMO_MODE`.
    pub demo_mode: RwSignal<bool>,
}

impl AppState {
    pub fn new(config: EnvConfig) -> Self {
        let api_client = ApiClient::load_from_storage(&config.api_url);
        let demo_mode = load_demo_mode().unwrap_or(config.demo_mode);

        Self {
            api_client: RwSignal::new(api_client),
            current_user: RwSignal::new(load_user_from_storage()),
            demo_mode: RwSignal::new(demo_mode),
            config: StoredValue::new(config),
        }
    }

    pub fn set_demo_mode(&self, on: bool) {
        tracing::info!(demo_mode = on, "demo mode toggled");
        save_demo_mode(on);
        self.demo_mode.set(on);
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
