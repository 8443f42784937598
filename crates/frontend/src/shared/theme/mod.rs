//! Light/dark colour scheme.
//!
//! The app shell provides a [`ThemeContext`] seeded from
//! `DashboardConfig::theme`; pages read it through [`use_theme`]. The active
//! mode is mirrored to the `data-theme` attribute of `<body>` so stylesheets
//! can key off it.

use crate::shared::icons::icon;
use contracts::shared::config::ThemeMode;
use leptos::prelude::*;
use web_sys::window;

/// Set `data-theme` on the document body
fn apply_theme(mode: ThemeMode) {
    let Some(body) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };

    if let Err(e) = body.set_attribute("data-theme", mode.as_str()) {
        log::error!("Failed to apply theme {}: {:?}", mode.as_str(), e);
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current colour scheme.
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn new(initial: ThemeMode) -> Self {
        let mode = RwSignal::new(initial);

        Effect::new(move |_| apply_theme(mode.get()));

        Self { mode }
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
    }

    pub fn toggle(&self) {
        self.mode.update(|m| *m = m.toggled());
    }

    pub fn is_dark(&self) -> bool {
        self.mode.get() == ThemeMode::Dark
    }
}

/// Theme context of the surrounding app shell.
///
/// Falls back to a detached dark context when rendered outside the shell.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| {
        log::error!("ThemeContext not found, using default theme");
        ThemeContext::new(ThemeMode::default())
    })
}

/// Light/dark switch for the top header
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header__icon-btn theme-toggle"
            on:click=move |_| ctx.toggle()
            title=move || if ctx.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
        >
            {move || if ctx.is_dark() { icon("sun") } else { icon("moon") }}
        </button>
    }
}
