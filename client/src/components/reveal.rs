//! Fade-in wrapper that reveals its children once, the first time at least
//! 20% of it is visible.

use leptos::prelude::*;

#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if revealed.get_untracked() {
            return;
        }
        if let Some(el) = node_ref.get() {
            crate::util::dom::observe_reveal(&el, revealed);
        }
    });

    view! {
        <div node_ref=node_ref class=move || reveal_class(&class, revealed.get())>
            {children()}
        </div>
    }
}

fn reveal_class(extra: &str, revealed: bool) -> String {
    let state = if revealed { "reveal reveal--visible" } else { "reveal" };
    if extra.is_empty() { state.to_owned() } else { format!("{state} {extra}") }
}
