//! Full-screen loading overlay with a progress bar.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen(progress: ReadSignal<u8>) -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__content">
                <h1>"Portfolio"</h1>
                <div class="progress loading-screen__bar">
                    <div class="progress__bar" style:width=move || format!("{}%", progress.get())></div>
                </div>
                <p>{move || format!("Loading experience... {}%", progress.get())}</p>
            </div>
        </div>
    }
}
