use super::selection::parse_select_count;
use leptos::prelude::*;
use thaw::*;

/// Dropdown under the header checkbox: "check the first N records".
#[component]
pub fn SelectCountOverlay(
    #[prop(into)] is_busy: Signal<bool>,

    /// Called with the parsed count
    on_submit: Callback<usize>,
) -> impl IntoView {
    let count = RwSignal::new(String::from("0"));

    view! {
        <div class="select-count-overlay">
            <Input
                input_type=InputType::Number
                value=count
                placeholder="Enter number"
                attr:style="width: 100%;"
            />
            <Button
                appearance=ButtonAppearance::Primary
                disabled=is_busy
                on_click=move |_| on_submit.run(parse_select_count(&count.get_untracked()))
                attr:style="width: 100%;"
            >
                {move || if is_busy.get() { "Selecting…" } else { "Check this" }}
            </Button>
        </div>
    }
}
