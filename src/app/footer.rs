use leptos::prelude::*;

use crate::content::{copyright_year, Owner};

#[component]
pub fn Footer(owner: &'static Owner) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <a href="#" class="footer-logo">
                        <span class="logo-icon logo-icon-small">{owner.initials.as_str()}</span>
                        {owner.handle.as_str()}
                    </a>
                    <p class="footer-text">"Designed & Built with 💙 using Rust and Leptos"</p>
                    <p class="footer-copyright">
                        {format!("© {} {}. All rights reserved.", copyright_year(), owner.name)}
                    </p>
                </div>
            </div>
        </footer>
    }
}
