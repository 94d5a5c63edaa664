use leptos::prelude::*;

use crate::content::OWNER_NAME;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container site-footer__inner">
                <p>{format!("© 2025 {OWNER_NAME}. All rights reserved.")}</p>
                <div class="site-footer__links">
                    <a href="#">"Privacy Policy"</a>
                    <a href="#">"Terms of Service"</a>
                </div>
            </div>
        </footer>
    }
}
