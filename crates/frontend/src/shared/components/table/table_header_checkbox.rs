//! Чекбокс в заголовке таблицы для выбора всех строк страницы
//!
//! # Примеры
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     state=Signal::derive(move || CheckboxState::from_counts(selected_on_page, rows))
//!     on_change=Callback::new(move |_| toggle_page())
//! >
//!     <button>"…"</button>
//! </TableHeaderCheckbox>
//! ```

use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckboxState {
    /// State for `selected` of `total` rows being checked.
    pub fn from_counts(selected: usize, total: usize) -> Self {
        if total == 0 || selected == 0 {
            CheckboxState::Unchecked
        } else if selected >= total {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    }
}

/// Header cell with a tri-state checkbox and optional extra controls
/// (rendered after the checkbox).
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)] state: Signal<CheckboxState>,

    /// Called on click with the new checked value
    on_change: Callback<bool>,

    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only, no attribute for it
    Effect::new(move |_| {
        let indeterminate = matches!(state.get(), CheckboxState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <div class="table__header-checkbox">
                <input
                    node_ref=checkbox_ref
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=move || matches!(state.get(), CheckboxState::Checked)
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                />
                {children.map(|c| c())}
            </div>
        </TableHeaderCell>
    }
}
