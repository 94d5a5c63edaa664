//! Technical skills with `Frontend | Backend | Tools` tabs.

use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{Section, Skill, SkillCategory};
use crate::state::ui::years_label;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let active = RwSignal::new(SkillCategory::default());

    view! {
        <section id=Section::Skills.id() class="page-section page-section--muted">
            <Reveal class="container">
                <h2 class="section-title">"Technical Skills"</h2>
                <p class="section-subtitle">"My technical toolkit and areas of expertise."</p>
                <div class="tabs" role="tablist">
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    type="button"
                                    role="tab"
                                    class=move || {
                                        if active.get() == category { "tabs__trigger tabs__trigger--active" } else { "tabs__trigger" }
                                    }
                                    aria-selected=move || (active.get() == category).to_string()
                                    on:click=move |_| active.set(category)
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="skills__grid" role="tabpanel">
                    {move || {
                        active
                            .get()
                            .skills()
                            .iter()
                            .enumerate()
                            .map(|(index, skill)| view! { <SkillCard skill=skill index=index/> })
                            .collect_view()
                    }}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn SkillCard(skill: &'static Skill, index: usize) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <div
            class="skill-card"
            style:animation-delay=format!("{}ms", index * 100)
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <div class="skill-card__icon">{skill.icon}</div>
            <h3>{skill.name}</h3>
            <p class="skill-card__level">{skill.level}</p>
            <span class="badge">{years_label(skill.years)}</span>
            <Show when=move || hovered.get()>
                <div class="skill-card__underline"></div>
            </Show>
        </div>
    }
}
