use leptos::{html, prelude::*};

use crate::content::About;
use crate::reveal::{reveal_class, stagger_style};

use super::effects::use_reveal;

#[component]
pub fn AboutSection(about: &'static About) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let seen = use_reveal(section_ref);

    view! {
        <section id="about" class="section about-section" node_ref=section_ref>
            <div class="container">
                <div
                    class=move || reveal_class("fade-up about-header", seen.get())
                    style=stagger_style(0.6, 0.0, 0.0, 0)
                >
                    <span class="section-label">"About Me"</span>
                    <h2 class="section-title">
                        "Passionate About " <span class="italic accent">"Innovation"</span>
                    </h2>
                    <p class="section-subtitle">
                        "Building tomorrow's technology today with precision and creativity"
                    </p>
                </div>

                <div class="about-content">
                    <div
                        class=move || reveal_class("fade-right about-text", seen.get())
                        style=stagger_style(0.6, 0.2, 0.0, 0)
                    >
                        <div class="glass-card">
                            <div class="about-icon-wrapper">"</>"</div>
                            <h3>{about.heading.as_str()}</h3>
                            {about
                                .paragraphs
                                .iter()
                                .map(|para| view! { <p>{para.as_str()}</p> })
                                .collect_view()}
                            <div class="about-tags">
                                {about
                                    .tags
                                    .iter()
                                    .map(|tag| view! { <span class="tag">{tag.as_str()}</span> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div
                        class=move || reveal_class("fade-left about-stats", seen.get())
                        style=stagger_style(0.6, 0.3, 0.0, 0)
                    >
                        <div class="stats-grid">
                            {about
                                .stats
                                .iter()
                                .enumerate()
                                .map(|(i, stat)| {
                                    view! {
                                        <div
                                            class=move || {
                                                reveal_class("fade-up stat-card glass-card", seen.get())
                                            }
                                            style=stagger_style(0.4, 0.4, 0.1, i)
                                        >
                                            <span class="stat-number">{stat.number.as_str()}</span>
                                            <span class="stat-label">{stat.label.as_str()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
