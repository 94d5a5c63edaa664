use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dom;

/// Floating "back to top" button, shown once the page is scrolled past 300px.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let visible = Memo::new(move |_| ui.with(UiState::show_scroll_top));

    view! {
        <Show when=move || visible.get()>
            <button
                type="button"
                class="scroll-top"
                aria-label="Scroll to top"
                on:click=move |_| dom::scroll_to_top()
            >
                <span class="scroll-top__icon" aria-hidden="true">"⌃"</span>
                <span class="scroll-top__tooltip">"Back to top"</span>
            </button>
        </Show>
    }
}
