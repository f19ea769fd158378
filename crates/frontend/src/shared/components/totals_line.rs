use leptos::prelude::*;

/// Строка итога под таблицей: «Подпись: значение»
///
/// # Пример использования
/// ```text
/// <TotalsLine
///     label="Stocks total price"
///     value=Signal::derive(move || state.with(|s| s.totals().price_label()))
/// />
/// ```
#[component]
pub fn TotalsLine(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="totals__line">
            <h3 class="totals__label">{format!("{}: ", label)}</h3>
            <span class="totals__value">{move || value.get()}</span>
        </div>
    }
}
