use crate::models::AccountInfo;

pub(crate) const TOKEN_KEY: &str = "admin_dashboard_token";
pub(crate) const USER_KEY: &str = "admin_dashboard_user";
pub(crate) const DEMO_MODE_KEY: &str = "admin_dashboard_demo_mode";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.trim().is_empty())
}

pub(crate) fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Forgets the credential and the cached account.
pub(crate) fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

pub(crate) fn save_user_to_storage(user: &AccountInfo) {
    if let Ok(json) = serde_json::to_string(user) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

pub(crate) fn load_user_from_storage() -> Option<AccountInfo> {
    let json = local_storage()?.get_item(USER_KEY).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

/// `None` when the user never touched the toggle.
pub(crate) fn load_demo_mode() -> Option<bool> {
    let v = local_storage()?.get_item(DEMO_MODE_KEY).ok().flatten()?;
    Some(v == "1" || v == "true")
}

pub(crate) fn save_demo_mode(on: bool) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(DEMO_MODE_KEY, if on { "1" } else { "0" });
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_token_roundtrip_and_clear() {
        clear_session();
        assert!(load_token().is_none());

        save_token("t1");
        assert_eq!(load_token().as_deref(), Some("t1"));

        clear_session();
        assert!(load_token().is_none());
    }

    #[wasm_bindgen_test]
    fn test_user_and_demo_mode_roundtrip() {
        let user = AccountInfo {
            extra: serde_json::json!({"id": 1, "email": "ops@example.com"}),
        };
        save_user_to_storage(&user);
        assert_eq!(load_user_from_storage(), Some(user));

        save_demo_mode(true);
        assert_eq!(load_demo_mode(), Some(true));
        save_demo_mode(false);
        assert_eq!(load_demo_mode(), Some(false));
    }
}
