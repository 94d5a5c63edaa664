//! The single portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes every section and owns the page-level browser wiring: the
//! loading overlay timers, the window scroll listener feeding `UiState`, and
//! applying the saved theme once hydrated.

use leptos::prelude::*;

use crate::components::{
    about::AboutSection, contact_section::ContactSection, experience_timeline::ExperienceSection,
    hero::Hero, loading_screen::LoadingScreen, projects::ProjectsSection,
    scroll_to_top::ScrollToTop, site_footer::SiteFooter, site_header::SiteHeader,
    skills_section::SkillsSection,
};
use crate::state::ui::UiState;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let loading = RwSignal::new(true);
    let (progress, set_progress) = signal(0_u8);

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::future::TimeoutFuture;

        use crate::state::ui::{LOADING_DURATION_MS, LOADING_TICK_MS, next_loading_progress};
        use crate::util::{dom, theme_storage};

        Effect::new(move || {
            let theme = theme_storage::read_preference();
            theme_storage::apply(theme);
            ui.update(|s| {
                s.theme = theme;
                s.scroll_y = dom::scroll_y();
            });
        });

        let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
            ui.update(|s| s.scroll_y = dom::scroll_y());
        });
        on_cleanup(move || scroll_handle.remove());

        leptos::task::spawn_local(async move {
            TimeoutFuture::new(LOADING_DURATION_MS).await;
            loading.try_set(false);
        });

        leptos::task::spawn_local(async move {
            while progress.try_get_untracked().is_some_and(|p| p < 100) {
                TimeoutFuture::new(LOADING_TICK_MS).await;
                if set_progress.try_update(|p| *p = next_loading_progress(*p)).is_none() {
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ui, set_progress);
    }

    view! {
        <Show when=move || loading.get()>
            <LoadingScreen progress=progress/>
        </Show>
        <div class="page">
            <SiteHeader/>
            <main>
                <Hero/>
                <AboutSection/>
                <ProjectsSection/>
                <SkillsSection/>
                <ExperienceSection/>
                <ContactSection/>
            </main>
            <SiteFooter/>
            <ScrollToTop/>
        </div>
    }
}
