pub mod paging;
pub mod select_count;
pub mod selection;
mod state;

use crate::domain::a001_artwork::api::{collect_first_ids, fetch_artworks};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{CheckboxState, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::shared::theme::{use_theme, ThemeToggle};
use artworks_contracts::catalog::ArtworkDto;
use leptos::prelude::*;
use paging::{page_window, PAGE_SIZE_OPTIONS};
use select_count::SelectCountOverlay;
use selection::{create_selection, persist_selection};
use state::create_state;
use thaw::*;

/// Display values of one table row
#[derive(Debug, Clone, PartialEq)]
struct ArtworkRow {
    id: u64,
    title: String,
    artist: String,
    origin: String,
}

impl From<&ArtworkDto> for ArtworkRow {
    fn from(art: &ArtworkDto) -> Self {
        Self {
            id: art.id,
            title: art.title_or_default(),
            artist: art.artist_or_default(),
            origin: art.origin_or_default(),
        }
    }
}

#[component]
fn ArtworksHeader(
    #[prop(into)] total_count: Signal<u64>,
    #[prop(into)] selected_count: Signal<usize>,
    #[prop(into)] is_loading: Signal<bool>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon("image")}
                <h1 class="page__title">"Artworks"</h1>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    <span>{move || total_count.get().to_string()}</span>
                </Badge>
                <span class="text-muted">
                    {move || format!("{} selected", selected_count.get())}
                </span>
            </div>

            <div class="page__header-right">
                <ThemeToggle />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_refresh.run(())
                    disabled=is_loading
                >
                    {icon("refresh")}
                    {move || if is_loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn ArtworksTable() -> impl IntoView {
    let theme = use_theme();
    let state = create_state();
    let selected = create_selection();

    let (items, set_items) = signal(Vec::<ArtworkDto>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (show_dropdown, set_show_dropdown) = signal(false);
    let (is_selecting, set_is_selecting) = signal(false);

    let page_ids = Memo::new(move |_| items.with(|rows| rows.iter().map(|a| a.id).collect::<Vec<_>>()));

    let load = move || {
        set_is_loading.set(true);
        let (page, rows) = state.with_untracked(|s| (s.page, s.rows));

        leptos::task::spawn_local(async move {
            match fetch_artworks(page, rows).await {
                Ok(resp) => {
                    log::debug!(
                        "Loaded page {} ({} rows, total {})",
                        page,
                        resp.data.len(),
                        resp.pagination.total
                    );
                    state.update(|s| s.apply_response(resp.pagination.total));
                    set_items.set(resp.data);
                }
                Err(e) => {
                    // previous rows stay on screen
                    log::error!("Error fetching artworks: {}", e);
                }
            }
            set_is_loading.set(false);
        });
    };

    // Initial load (once)
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load();
        }
    });

    let go_to_page = move |page: u32| {
        if state.with_untracked(|s| s.page) == page {
            return;
        }
        state.update(|s| s.go_to(page));
        load();
    };

    let change_page_size = move |rows: u32| {
        state.update(|s| s.set_rows(rows));
        load();
    };

    let update_selection = move |f: &dyn Fn(&mut selection::SelectedIds)| {
        selected.update(|sel| f(sel));
        selected.with_untracked(persist_selection);
    };

    let toggle_row = move |id: u64| update_selection(&|sel| sel.toggle(id));

    let toggle_page = move |_checked: bool| {
        let ids = page_ids.get_untracked();
        update_selection(&|sel| sel.toggle_page(&ids));
    };

    let select_first_n = move |needed: usize| {
        let (rows, total) = state.with_untracked(|s| (s.rows, s.total_records));
        set_is_selecting.set(true);

        leptos::task::spawn_local(async move {
            match collect_first_ids(needed, rows, total).await {
                Ok(ids) => {
                    log::debug!("Selected first {} of {} requested", ids.len(), needed);
                    update_selection(&|sel| sel.replace(ids.clone()));
                    set_show_dropdown.set(false);
                }
                Err(e) => log::error!("Error selecting artworks: {}", e),
            }
            set_is_selecting.set(false);
        });
    };

    let header_state = Signal::derive(move || {
        let ids = page_ids.get();
        selected.with(|sel| {
            let checked = ids.iter().filter(|&&id| sel.contains(id)).count();
            CheckboxState::from_counts(checked, ids.len())
        })
    });

    view! {
        <div class=move || theme.theme.get().css_class()>
            <ArtworksHeader
                total_count=Signal::derive(move || state.get().total_records)
                selected_count=Signal::derive(move || selected.with(|s| s.len()))
                is_loading=is_loading
                on_refresh=Callback::new(move |_| load())
            />

            <div class="page-content artworks-table__body">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                state=header_state
                                on_change=Callback::new(toggle_page)
                            >
                                <button
                                    class="artworks-table__dropdown-toggle"
                                    class:artworks-table__dropdown-toggle--open=move || show_dropdown.get()
                                    title="Select a number of rows"
                                    on:click=move |_| set_show_dropdown.update(|v| *v = !*v)
                                >
                                    {icon("chevron-down")}
                                </button>
                            </TableHeaderCheckbox>
                            <TableHeaderCell resizable=false min_width=80.0>"ID"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=240.0>"Title"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=200.0>"Artist"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=140.0>"Origin"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        {move || {
                            let data = items.get();
                            if data.is_empty() {
                                let text = if is_loading.get() { "Loading…" } else { "No data" };
                                return vec![view! {
                                    <TableRow>
                                        <TableCell attr:colspan="5">
                                            <TableCellLayout>
                                                <span class="text-muted">{text}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }.into_any()];
                            }

                            data.into_iter()
                                .map(|art| {
                                    let ArtworkRow { id, title, artist, origin } = ArtworkRow::from(&art);
                                    let is_selected = Signal::derive(move || selected.with(|s| s.contains(id)));
                                    view! {
                                        <TableRow class:table__row--selected=move || is_selected.get()>
                                            <TableCellCheckbox
                                                item_id=id
                                                checked=is_selected
                                                on_toggle=Callback::new(toggle_row)
                                            />
                                            <TableCell><TableCellLayout>{id.to_string()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{title}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{artist}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{origin}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                    .into_any()
                                })
                                .collect::<Vec<_>>()
                        }}
                    </TableBody>
                </Table>

                <Show when=move || show_dropdown.get()>
                    <SelectCountOverlay
                        is_busy=is_selecting
                        on_submit=Callback::new(select_first_n)
                    />
                </Show>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.get().page)
                total_pages=Signal::derive(move || state.get().total_pages)
                visible_pages=Signal::derive(move || state.with(|s| page_window(s.page, s.total_pages)))
                page_size=Signal::derive(move || state.get().rows)
                on_page_change=Callback::new(go_to_page)
                on_page_size_change=Callback::new(change_page_size)
                page_size_options=PAGE_SIZE_OPTIONS.to_vec()
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_values_with_fallbacks() {
        let art = ArtworkDto {
            id: 129884,
            title: Some("Starry Night and the Astronauts".to_string()),
            artist_display: None,
            place_of_origin: Some(String::new()),
        };
        let row = ArtworkRow::from(&art);
        assert_eq!(row.id, 129884);
        assert_eq!(row.title, "Starry Night and the Astronauts");
        assert_eq!(row.artist, "N/A");
        assert_eq!(row.origin, "Unknown");
    }
}
