use leptos::prelude::*;
use thaw::*;

/// Чекбокс выбора строки
///
/// Клик по чекбоксу не всплывает до строки (stop_propagation).
#[component]
pub fn TableCellCheckbox(
    item_id: u64,

    #[prop(into)] checked: Signal<bool>,

    /// Called with the row id on every change
    on_toggle: Callback<u64>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |_| on_toggle.run(item_id)
            />
        </TableCell>
    }
}
