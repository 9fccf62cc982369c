//! Visual variants of the artworks table.
//!
//! The widget ships in two looks that share all behaviour: a bordered,
//! shadowed card and a flat plain table. The choice is persisted in
//! localStorage and exposed through context.

use crate::shared::icons::icon;
use crate::shared::storage::{load_raw, save_raw};
use leptos::prelude::*;
use web_sys::window;

/// Available table themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TableTheme {
    #[default]
    Card,
    Plain,
}

impl TableTheme {
    /// Theme name as stored in localStorage and used in CSS modifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableTheme::Card => "card",
            TableTheme::Plain => "plain",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TableTheme::Card => "Card",
            TableTheme::Plain => "Plain",
        }
    }

    /// BEM modifier class for the widget root.
    pub fn css_class(&self) -> String {
        format!("artworks-table artworks-table--{}", self.as_str())
    }

    /// Parse theme from string, unknown values fall back to the default.
    pub fn parse(s: &str) -> Self {
        match s {
            "plain" => TableTheme::Plain,
            _ => TableTheme::Card,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            TableTheme::Card => TableTheme::Plain,
            TableTheme::Plain => TableTheme::Card,
        }
    }
}

const THEME_STORAGE_KEY: &str = "artworks-theme";

fn load_theme_from_storage() -> TableTheme {
    load_raw(THEME_STORAGE_KEY)
        .map(|s| TableTheme::parse(&s))
        .unwrap_or_default()
}

/// Set data-theme on body for page-level styling hooks.
fn apply_theme(theme: TableTheme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<TableTheme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: TableTheme) {
        self.theme.set(theme);
        save_raw(THEME_STORAGE_KEY, theme.as_str());
        apply_theme(theme);
    }

    pub fn cycle_theme(&self) {
        let next = self.theme.get_untracked().next();
        self.set_theme(next);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
        .expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Button that switches to the other table theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="button button--ghost button--small"
            on:click=move |_| ctx.cycle_theme()
            title="Switch table style"
        >
            {icon("palette")}
            {move || format!(" {}", ctx.theme.get().display_name())}
        </button>
    }
}
