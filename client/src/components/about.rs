//! About section with core-skill bars.

use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{ABOUT_PARAGRAPHS, CORE_SKILLS, OWNER_NAME, PROFILE_IMAGE, Section};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="page-section page-section--muted">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"About Me"</h2>
                </Reveal>
                <div class="about__grid">
                    <Reveal>
                        <div class="about__copy">
                            {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        </div>
                        <div class="about__skills">
                            <h3>"Core Skills"</h3>
                            {CORE_SKILLS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div class="core-skill">
                                            <div class="core-skill__label">
                                                <span>{skill.name}</span>
                                                <span>{format!("{}%", skill.percent)}</span>
                                            </div>
                                            <div class="progress">
                                                <div
                                                    class="progress__bar"
                                                    style:width=format!("{}%", skill.percent)
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                    <Reveal>
                        <div class="about__portrait">
                            <img src=PROFILE_IMAGE alt=OWNER_NAME/>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
