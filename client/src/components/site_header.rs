//! Fixed site header: brand, section navigation, theme toggle and résumé link.

use leptos::prelude::*;

use crate::content::{BRAND, RESUME_FILE_NAME, RESUME_PATH, Section};
use crate::state::ui::UiState;
use crate::util::{dom, theme_storage};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let compact = Memo::new(move |_| ui.with(UiState::header_compact));
    let theme = Memo::new(move |_| ui.with(|s| s.theme));

    let on_toggle_theme = move |_| {
        ui.update(|s| s.theme = theme_storage::toggle(s.theme));
    };

    view! {
        <header class=move || if compact.get() { "site-header site-header--compact" } else { "site-header" }>
            <div class="site-header__inner">
                <a href="#" class="site-header__brand">{BRAND}</a>
                <nav class="site-header__nav">
                    {Section::NAV
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    type="button"
                                    class="site-header__link"
                                    on:click=move |_| dom::scroll_to_section(section.id())
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="site-header__actions">
                    <button
                        type="button"
                        class="theme-toggle"
                        aria-label=move || theme.get().toggle_label()
                        on:click=on_toggle_theme
                    >
                        {move || if theme.get().is_dark() { "☀" } else { "☾" }}
                    </button>
                    <a class="resume-button" href=RESUME_PATH download=RESUME_FILE_NAME>
                        "Resume"
                    </a>
                </div>
            </div>
        </header>
    }
}
