use web_sys::window;

/// The only value the dashboard persists in the browser
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(ACCESS_TOKEN_KEY, token).is_err() {
            log::warn!("access token could not be stored");
        }
    }
}

pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

pub fn clear_access_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
