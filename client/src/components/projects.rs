//! Featured projects grid.

use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{PROJECTS, Project, Section};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="page-section">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"Featured Projects"</h2>
                </Reveal>
                <Reveal>
                    <p class="section-subtitle">
                        "A selection of my recent work, showcasing my skills and expertise in frontend web development."
                    </p>
                </Reveal>
                <div class="projects__grid">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <Reveal>
                                    <ProjectCard project=project/>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <div class="project-card__image">
                <img src=project.image alt=project.title loading="lazy"/>
            </div>
            <div class="project-card__body">
                <h3>{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <ul class="project-card__tags">
                    {project.tags.iter().map(|tag| view! { <li class="badge">{*tag}</li> }).collect_view()}
                </ul>
                <div class="project-card__links">
                    <a href=project.demo_url target="_blank" rel="noopener noreferrer">
                        "Live Demo"
                    </a>
                    <a href=project.source_url target="_blank" rel="noopener noreferrer">
                        "Code"
                    </a>
                </div>
            </div>
        </article>
    }
}
