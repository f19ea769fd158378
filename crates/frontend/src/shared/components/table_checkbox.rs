use leptos::prelude::*;

/// Чекбокс строки таблицы
///
/// Рендерит <td>; клик по чекбоксу не открывает строку (stop_propagation).
///
/// # Пример использования
/// ```text
/// <TableCheckbox
///     checked=Signal::derive(move || state.with(|s| s.selection.is_checked(&id)))
///     on_toggle=Callback::new(move |_| vm.toggle(index))
/// />
/// ```
#[component]
pub fn TableCheckbox(
    /// Состояние чекбокса
    #[prop(into)]
    checked: Signal<bool>,
    /// Вызывается при каждом клике
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |_| on_toggle.run(())
            />
        </td>
    }
}

/// Чекбокс «выбрать все» в заголовке таблицы
#[component]
pub fn TableHeaderCheckbox(
    /// Отмечены все строки
    #[prop(into)]
    all_checked: Signal<bool>,
    /// true = выбрать все, false = снять все
    on_change: Callback<bool>,
    #[prop(into, optional)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=all_checked
                prop:disabled=disabled
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </th>
    }
}
