//! Embedded location map. Switches to a static image if the embed fails.

use leptos::prelude::*;

use crate::content::{MAP_CAPTION, MAP_EMBED_URL, MAP_FALLBACK_IMAGE};

#[component]
pub fn MapSection() -> impl IntoView {
    let embed_failed = RwSignal::new(false);

    view! {
        <div class="map-section">
            <Show
                when=move || embed_failed.get()
                fallback=move || {
                    view! {
                        <iframe
                            class="map-section__frame"
                            title="Location map"
                            src={MAP_EMBED_URL}
                            {leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                            referrerpolicy="no-referrer-when-downgrade"
                            allowfullscreen=true
                            on:error=move |_| embed_failed.set(true)
                        ></iframe>
                    }
                }
            >
                <img class="map-section__fallback" src=MAP_FALLBACK_IMAGE alt="Fallback Map"/>
            </Show>
            <div class="map-section__overlay">
                <div class="map-section__caption">
                    <p>{MAP_CAPTION}</p>
                </div>
            </div>
        </div>
    }
}
