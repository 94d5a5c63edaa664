//! Landing hero with the rotating word slide.
//!
//! The 3D sphere of the original design is a CSS gradient orb here.

use leptos::prelude::*;

use crate::content::HERO_WORDS;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="hero__backdrop" aria-hidden="true"></div>
            <div class="hero__layout">
                <div class="hero__text">
                    <h1>
                        "Shaping"
                        <span class="hero__slide">
                            <span class="hero__slide-track">
                                {HERO_WORDS
                                    .iter()
                                    .map(|word| {
                                        view! {
                                            <span class="hero__word">
                                                <img src=word.icon alt="" class="hero__word-icon"/>
                                                <span>{word.text}</span>
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </span>
                        </span>
                    </h1>
                    <h1>"into Real Projects"</h1>
                    <h1>"that Deliver Results"</h1>
                </div>
                <figure class="hero__visual" aria-hidden="true">
                    <div class="hero__sphere"></div>
                </figure>
            </div>
        </section>
    }
}
