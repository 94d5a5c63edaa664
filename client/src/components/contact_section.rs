//! "Get In Touch" section: contact details, social links, map and form.

use leptos::prelude::*;

use super::contact_form::ContactFormPanel;
use super::map_section::MapSection;
use super::reveal::Reveal;
use crate::content::{CONTACT_EMAIL, LOCATION, SOCIAL_LINKS, Section};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="page-section page-section--muted">
            <Reveal class="container">
                <h2 class="section-title">"Get In Touch"</h2>
                <p class="section-subtitle">
                    "Have a project in mind or want to discuss opportunities? I'd love to hear from you."
                </p>
                <div class="contact__grid">
                    <div class="contact__details">
                        <h3>"Contact Information"</h3>
                        <div class="contact__item">
                            <span class="contact__icon" aria-hidden="true">"📍"</span>
                            <div>
                                <p class="contact__label">"Location"</p>
                                <p class="muted">{LOCATION}</p>
                            </div>
                        </div>
                        <div class="contact__item">
                            <span class="contact__icon" aria-hidden="true">"✉"</span>
                            <div>
                                <p class="contact__label">"Email"</p>
                                <p class="muted">
                                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                                </p>
                            </div>
                        </div>
                        <h3>"Connect"</h3>
                        <div class="contact__social">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            class="contact__social-link"
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <MapSection/>
                    </div>
                    <ContactFormPanel/>
                </div>
            </Reveal>
        </section>
    }
}
