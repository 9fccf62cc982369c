use crate::domain::a001_artwork::ui::list::ArtworksTable;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <main class="page page--centered">
                <ArtworksTable />
            </main>
        </ThemeProvider>
    }
}
