use super::model::{Price, Quantity, INPUT_STEP};
use super::view_model::StockFormViewModel;
use crate::domain::a025_stock::error::FormField;
use crate::shared::modal::Modal;
use contracts::domain::a025_stock::StockScope;
use leptos::prelude::*;
use thaw::*;

fn field_error(vm: &StockFormViewModel, field: FormField) -> Option<String> {
    vm.errors
        .get()
        .into_iter()
        .find(|e| e.field == field)
        .map(|e| e.message)
}

/// Модальная форма создания/редактирования остатка
#[component]
pub fn StockModal(
    vm: StockFormViewModel,
    scope: StockScope,
    on_close: Callback<()>,
    /// Нажата кнопка Create/Update
    on_submit: Callback<()>,
) -> impl IntoView {
    let vm_clone = vm.clone();
    let show_vendor = scope.requires_vendor();

    let title = Signal::derive({
        let vm = vm_clone.clone();
        move || {
            if vm.is_edit_mode()() {
                "Edit a Stock".to_string()
            } else {
                "Create a Stock".to_string()
            }
        }
    });

    let footer: ChildrenFn = {
        let vm = vm_clone.clone();
        std::sync::Arc::new(move || {
            let vm_label = vm.clone();
            let submitting = vm.submitting;
            view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_submit.run(())
                    disabled=Signal::derive(move || submitting.get())
                >
                    {move || if vm_label.is_edit_mode()() { "Update" } else { "Create" }}
                </Button>
            }
            .into_any()
        })
    };

    view! {
        <Modal title=title on_close=on_close footer=footer>
            <div class="details-form">
                {show_vendor.then(|| {
                    let vm = vm_clone.clone();
                    let vm_value = vm_clone.clone();
                    let vm_input = vm_clone.clone();
                    let vm_error = vm_clone.clone();
                    view! {
                        <div class="form-group">
                            <label for=FormField::Vendor.name()>{"Vendor"}</label>
                            <select
                                id=FormField::Vendor.name()
                                prop:value=move || vm_value.form.with(|f| f.session().vendor_id.clone())
                                on:change=move |ev| vm_input.set_vendor(event_target_value(&ev))
                            >
                                <option value="">{"Select a vendor"}</option>
                                {move || vm.catalog.with(|c| {
                                    c.vendors
                                        .iter()
                                        .map(|v| view! { <option value=v.id.clone()>{v.name.clone()}</option> })
                                        .collect_view()
                                })}
                            </select>
                            {move || field_error(&vm_error, FormField::Vendor)
                                .map(|e| view! { <div class="form-error">{e}</div> })}
                        </div>
                    }
                })}

                <div class="form-group">
                    <label for=FormField::Product.name()>{"Product"}</label>
                    <select
                        id=FormField::Product.name()
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.with(|f| f.session().product_id.clone())
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_product(event_target_value(&ev))
                        }
                    >
                        <option value="">{"Select a product"}</option>
                        {
                            let vm = vm_clone.clone();
                            move || vm.catalog.with(|c| {
                                c.products
                                    .iter()
                                    .map(|p| view! { <option value=p.id.clone()>{p.name.clone()}</option> })
                                    .collect_view()
                            })
                        }
                    </select>
                    {
                        let vm = vm_clone.clone();
                        move || field_error(&vm, FormField::Product)
                            .map(|e| view! { <div class="form-error">{e}</div> })
                    }
                </div>

                <div class="form-group">
                    <label for="quantity">{"Quantity (kg)"}</label>
                    <input
                        type="number"
                        id="quantity"
                        min=Quantity::MIN.to_string()
                        max=Quantity::MAX.to_string()
                        step=INPUT_STEP.to_string()
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.with(|f| f.session().quantity.value().to_string())
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_quantity_input(&event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="price">{"Price (kg)"}</label>
                    <input
                        type="number"
                        id="price"
                        min=Price::MIN.to_string()
                        max=Price::MAX.to_string()
                        step=INPUT_STEP.to_string()
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.with(|f| f.session().price.value().to_string())
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_price_input(&event_target_value(&ev))
                        }
                    />
                </div>
            </div>
        </Modal>
    }
}
