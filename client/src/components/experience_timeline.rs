//! Professional experience timeline.
//!
//! Entries alternate sides (even indices on the left) and are numbered from
//! 1. The center line fills as the timeline scrolls through the viewport.

use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{EXPERIENCES, Experience, Section};
#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;
use crate::state::ui::TimelineSide;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="page-section">
            <Reveal class="container">
                <h2 class="section-title">"Professional Experience"</h2>
                <p class="section-subtitle">"My journey as a developer and the companies I've worked with."</p>
                <ExperienceTimeline/>
            </Reveal>
        </section>
    }
}

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let fill = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        let ui = expect_context::<RwSignal<UiState>>();
        Effect::new(move || {
            ui.track();
            let Some(el) = container_ref.get() else {
                return;
            };
            if let Some((top, height, viewport_height)) = crate::util::dom::viewport_rect(&el) {
                fill.set(crate::state::ui::timeline_progress(top, height, viewport_height));
            }
        });
    }

    view! {
        <div class="timeline" node_ref=container_ref>
            <div class="timeline__line" aria-hidden="true">
                <div class="timeline__progress" style:height=move || format!("{:.1}%", fill.get() * 100.0)></div>
            </div>
            <ol class="timeline__items">
                {EXPERIENCES
                    .iter()
                    .enumerate()
                    .map(|(index, experience)| view! { <TimelineItem experience=experience index=index/> })
                    .collect_view()}
            </ol>
        </div>
    }
}

#[component]
fn TimelineItem(experience: &'static Experience, index: usize) -> impl IntoView {
    let side = TimelineSide::for_index(index);

    view! {
        <li class=side.class() style:transition-delay=format!("{}ms", index * 200)>
            <div class="timeline-item__content">
                <div class="card">
                    <div class="timeline-item__heading">
                        <img src=experience.logo alt=experience.company class="timeline-item__logo"/>
                        <div>
                            <h3>{experience.company}</h3>
                            <p class="muted">{experience.position}</p>
                        </div>
                    </div>
                    <span class="badge badge--muted">{experience.period}</span>
                    <p>{experience.description}</p>
                    <h4>"Key Achievements:"</h4>
                    <ul class="timeline-item__achievements">
                        {experience.achievements.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
            <div class="timeline-item__marker">
                <span>{index + 1}</span>
            </div>
            <div class="timeline-item__spacer"></div>
        </li>
    }
}
