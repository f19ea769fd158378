use crate::routes::routes::AppRoutes;
use crate::shared::notice::{NoticeHost, NoticeService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Notices are shown by pages, rendered once here.
    provide_context(NoticeService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <NoticeHost />
        </AuthProvider>
    }
}
