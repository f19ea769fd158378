use leptos::prelude::*;

use super::storage;

/// Сессия, сохранённая страницей входа
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSession {
    pub company_id: String,
    pub access_token: Option<String>,
}

impl AuthSession {
    /// Restore from localStorage; missing keys give an empty session
    pub fn restore() -> Self {
        let session = Self {
            company_id: storage::get_company_id().unwrap_or_default(),
            access_token: storage::get_access_token(),
        };
        if session.company_id.is_empty() {
            log::warn!("auth: no company id in localStorage");
        }
        if session.access_token.is_none() {
            log::debug!("auth: no access token, requests go without Authorization");
        }
        session
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthSession::restore());
    children()
}

/// Hook to access the auth session
pub fn use_auth_session() -> AuthSession {
    use_context::<AuthSession>().expect("AuthProvider not found in component tree")
}
