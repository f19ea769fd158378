use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const COMPANY_ID_KEY: &str = "auth_company_id";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Get the company the signed-in user works for
pub fn get_company_id() -> Option<String> {
    get_local_storage()?.get_item(COMPANY_ID_KEY).ok()?
}
