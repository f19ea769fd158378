use crate::domain::a025_stock::ui::list::StockListPage;
use contracts::domain::a025_stock::{StockScope, VENDOR_TRACKED_SCOPE};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

/// Разрез берётся из `:scope`; без него открываются заводские остатки
#[component]
fn StockRoute() -> impl IntoView {
    let params = use_params_map();
    let scope = Memo::new(move |_| {
        let raw = params
            .with(|p| p.get("scope"))
            .unwrap_or_else(|| VENDOR_TRACKED_SCOPE.to_string());
        StockScope::new(raw)
    });

    view! { <StockListPage scope=scope /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="page">{"Page not found"}</div> }>
                <Route
                    path=path!("/")
                    view=|| view! { <Redirect path=format!("/stocks/{}", VENDOR_TRACKED_SCOPE) /> }
                />
                <Route path=path!("/stocks/:scope") view=StockRoute />
            </Routes>
        </Router>
    }
}
