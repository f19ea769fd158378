pub mod selection;
pub mod state;
pub mod totals;
pub mod view_model;

use self::state::LoadOutcome;
use self::view_model::StockListViewModel;
use crate::domain::a025_stock::api::HttpInventoryApi;
use crate::domain::a025_stock::error::DeleteError;
use crate::domain::a025_stock::ui::details::{FormOutcome, StockFormViewModel, StockModal, Submitted};
use crate::shared::components::table_checkbox::{TableCheckbox, TableHeaderCheckbox};
use crate::shared::components::totals_line::TotalsLine;
use crate::shared::icons::icon;
use crate::shared::notice::{use_notices, Notice};
use crate::system::auth::context::use_auth_session;
use contracts::domain::a025_stock::{StockRecord, StockScope};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

/// Уведомление по результату сохранения формы
fn form_notice(outcome: &FormOutcome) -> Option<Notice> {
    match outcome {
        FormOutcome::Saved(Submitted::Created(_)) => Some(Notice::success("Stock created successfully")),
        FormOutcome::Saved(Submitted::Updated(_)) => Some(Notice::success("Stock updated successfully")),
        FormOutcome::Failed(e) => Some(Notice::error(e.to_string())),
        // ошибки полей видны в самой форме
        FormOutcome::Invalid(_) | FormOutcome::Abandoned => None,
    }
}

fn delete_notice(result: &Result<String, DeleteError>) -> Option<Notice> {
    match result {
        Ok(message) => Some(Notice::success(message.clone())),
        Err(DeleteError::NothingSelected) => None,
        Err(e) => Some(Notice::error(e.to_string())),
    }
}

/// Имя из записи, а если сервис прислал только id - из справочника формы
fn display_name(name: &str, id: &str, lookup: impl FnOnce(&str) -> Option<String>) -> String {
    if name.is_empty() {
        lookup(id).unwrap_or_else(|| id.to_string())
    } else {
        name.to_string()
    }
}

fn load_notice(outcome: &LoadOutcome) -> Option<Notice> {
    match outcome {
        LoadOutcome::Failed(e) => Some(Notice::error(e.to_string())),
        _ => None,
    }
}

/// Страница остатков одного разреза (`/stocks/:scope`)
#[component]
#[allow(non_snake_case)]
pub fn StockListPage(#[prop(into)] scope: Signal<StockScope>) -> impl IntoView {
    let session = use_auth_session();
    let notices = use_notices();
    let api = Arc::new(HttpInventoryApi::from_location());

    let vm = StockListViewModel::new(scope.get_untracked(), session.company_id.clone(), api.clone());
    let form_vm = StockFormViewModel::new(api.clone(), api);
    let state = vm.state;
    let catalog = form_vm.catalog;
    let (show_modal, set_show_modal) = signal(false);

    let fetch = {
        let vm = vm.clone();
        move || {
            let vm = vm.clone();
            spawn_local(async move {
                if let Some(notice) = load_notice(&vm.load().await) {
                    notices.show(notice);
                }
            });
        }
    };

    // первая загрузка и смена разреза по маршруту
    Effect::new({
        let vm = vm.clone();
        let form_vm = form_vm.clone();
        let fetch = fetch.clone();
        let company_id = session.company_id.clone();
        move |previous: Option<StockScope>| {
            let current = scope.get();
            if previous.as_ref().is_some_and(|p| p != &current) {
                // незавершённое сохранение старого разреза станет Abandoned
                set_show_modal.set(false);
                form_vm.open(None);
                vm.switch_scope(current.clone(), company_id.clone());
            }
            fetch();
            current
        }
    });

    // справочники нужны и для имён в строках, и для формы
    {
        let form_vm = form_vm.clone();
        let company_id = session.company_id.clone();
        spawn_local(async move { form_vm.load_catalog(&company_id).await });
    }

    let open_form = {
        let form_vm = form_vm.clone();
        let company_id = session.company_id.clone();
        move |record: Option<StockRecord>| {
            form_vm.open(record.as_ref());
            set_show_modal.set(true);
            let form_vm = form_vm.clone();
            let company_id = company_id.clone();
            spawn_local(async move { form_vm.load_catalog(&company_id).await });
        }
    };

    let handle_edit = {
        let open_form = open_form.clone();
        move |id: String| {
            // неизвестный id просто игнорируем
            if let Some(record) = state.with_untracked(|s| s.find(&id).cloned()) {
                open_form(Some(record));
            }
        }
    };

    let on_close = Callback::new(move |_| set_show_modal.set(false));

    let on_submit = Callback::new({
        let vm = vm.clone();
        let form_vm = form_vm.clone();
        move |_| {
            let pending = form_vm.submit(&scope.get_untracked());
            let vm = vm.clone();
            spawn_local(async move {
                let outcome = pending.await;
                let notice = form_notice(&outcome);
                if let FormOutcome::Saved(submitted) = outcome {
                    set_show_modal.try_set(false);
                    vm.accept_submitted(submitted).await;
                }
                if let Some(notice) = notice {
                    notices.show(notice);
                }
            });
        }
    });

    let delete_selected = {
        let vm = vm.clone();
        move || {
            let vm = vm.clone();
            spawn_local(async move {
                if let Some(notice) = delete_notice(&vm.bulk_delete().await) {
                    notices.show(notice);
                }
            });
        }
    };

    let toggle_row = {
        let vm = vm.clone();
        move |index: usize| vm.toggle(index)
    };

    let select_all = Callback::new({
        let vm = vm.clone();
        move |checked: bool| vm.set_all_checked(checked)
    });

    let show_vendor = move || scope.with(|s| s.requires_vendor());
    let nothing_selected = Signal::derive(move || state.with(|s| s.selection.selected_count() == 0));
    let is_loading = move || state.with(|s| s.is_loading());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    {icon("inventory")}
                    <h1 class="header__title">{move || scope.with(|s| s.display_heading())}</h1>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click={
                            let open_form = open_form.clone();
                            move |_| open_form(None)
                        }
                    >
                        {icon("plus")}
                        {"Add new stock"}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click={
                            let fetch = fetch.clone();
                            move |_| fetch()
                        }
                        disabled=Signal::derive(is_loading)
                    >
                        {icon("refresh")}
                        {"Refresh"}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| delete_selected()
                        disabled=nothing_selected
                    >
                        {icon("delete")}
                        {move || format!("Delete ({})", state.with(|s| s.selection.selected_count()))}
                    </Button>
                </div>
            </div>

            <Show when=is_loading>
                <div class="page__loading">
                    <Spinner />
                </div>
            </Show>

            {move || state.with(|s| s.last_error.clone()).map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <TableHeaderCheckbox
                                all_checked=Signal::derive(move || state.with(|s| {
                                    !s.items.is_empty() && s.selection.all_selected(&s.items)
                                }))
                                on_change=select_all
                                disabled=Signal::derive(move || state.with(|s| s.selection.is_empty()))
                            />
                            <Show when=show_vendor>
                                <th class="table__header-cell">{"Vendor"}</th>
                            </Show>
                            <th class="table__header-cell">{"Product"}</th>
                            <th class="table__header-cell table__header-cell--number">{"Quantity (kg)"}</th>
                            <th class="table__header-cell table__header-cell--number">{"Price (kg)"}</th>
                            <th class="table__header-cell table__header-cell--number">{"Total"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let with_vendor = show_vendor();
                            let catalog = catalog.get();
                            state.with(|s| {
                                s.items.iter().enumerate().map(|(index, row)| {
                                    let id = row.id.clone();
                                    let id_for_check = id.clone();
                                    let handle_edit = handle_edit.clone();
                                    let toggle_row = toggle_row.clone();
                                    let is_selected = s.selection.is_checked(&id);
                                    let vendor = row
                                        .vendor
                                        .as_ref()
                                        .map(|v| display_name(&v.name, &v.id, |id| catalog.vendor_name(id).map(str::to_string)))
                                        .unwrap_or_default();
                                    let product = display_name(&row.product.name, &row.product.id, |id| {
                                        catalog.product_name(id).map(str::to_string)
                                    });
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--selected=is_selected
                                            on:click=move |_| handle_edit(id.clone())
                                        >
                                            <TableCheckbox
                                                checked=Signal::derive(move || state.with(|s| s.selection.is_checked(&id_for_check)))
                                                on_toggle=Callback::new(move |_| toggle_row(index))
                                            />
                                            {with_vendor.then(|| view! { <td class="table__cell">{vendor}</td> })}
                                            <td class="table__cell">{product}</td>
                                            <td class="table__cell table__cell--number">{format!("{:.2}", row.quantity)}</td>
                                            <td class="table__cell table__cell--number">{format!("{:.2}", row.price)}</td>
                                            <td class="table__cell table__cell--number">{format!("{:.2}", row.line_total())}</td>
                                        </tr>
                                    }
                                }).collect_view()
                            })
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || state.with(|s| s.is_loaded && s.items.is_empty())>
                <div class="page__empty">{"No stocks yet"}</div>
            </Show>

            <Show when=move || state.with(|s| !s.totals().is_empty())>
                <div class="totals">
                    <TotalsLine
                        label="Stocks total price"
                        value=Signal::derive(move || state.with(|s| s.totals().price_label()))
                    />
                    <TotalsLine
                        label="Stocks total quantity (kg)"
                        value=Signal::derive(move || state.with(|s| s.totals().quantity_label()))
                    />
                </div>
            </Show>

            <Show when=move || show_modal.get()>
                <StockModal
                    vm=form_vm.clone()
                    scope=scope.get_untracked()
                    on_close=on_close
                    on_submit=on_submit
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a025_stock::error::{FetchError, SubmitError};
    use crate::domain::a025_stock::testing::record;
    use crate::shared::notice::NoticeLevel;

    #[test]
    fn saved_form_reports_operation() {
        let created = FormOutcome::Saved(Submitted::Created(record("1", "FactoryStock", 1.0, 1.0)));
        let updated = FormOutcome::Saved(Submitted::Updated(record("1", "FactoryStock", 1.0, 1.0)));
        assert_eq!(form_notice(&created).map(|n| n.text), Some("Stock created successfully".to_string()));
        assert_eq!(form_notice(&updated).map(|n| n.text), Some("Stock updated successfully".to_string()));
    }

    #[test]
    fn abandoned_and_invalid_forms_stay_quiet() {
        assert!(form_notice(&FormOutcome::Abandoned).is_none());
        assert!(form_notice(&FormOutcome::Invalid(Vec::new())).is_none());
        let failed = form_notice(&FormOutcome::Failed(SubmitError::Network("offline".into())));
        assert_eq!(failed.map(|n| n.level), Some(NoticeLevel::Error));
    }

    #[test]
    fn delete_notice_shows_server_message() {
        let ok = delete_notice(&Ok("2 stocks deleted".to_string()));
        assert_eq!(ok.map(|n| (n.level, n.text)), Some((NoticeLevel::Success, "2 stocks deleted".to_string())));
        assert!(delete_notice(&Err(DeleteError::NothingSelected)).is_none());
    }

    #[test]
    fn missing_name_falls_back_to_catalog_then_id() {
        assert_eq!(display_name("Cotton", "p1", |_| None), "Cotton");
        assert_eq!(display_name("", "p1", |_| Some("Wool".to_string())), "Wool");
        assert_eq!(display_name("", "p1", |_| None), "p1");
    }

    #[test]
    fn only_failed_loads_are_reported() {
        assert!(load_notice(&LoadOutcome::Stale).is_none());
        assert!(load_notice(&LoadOutcome::Applied { count: 3 }).is_none());
        let failed = load_notice(&LoadOutcome::Failed(FetchError::Network("down".into())));
        assert_eq!(failed.map(|n| n.level), Some(NoticeLevel::Error));
    }
}
