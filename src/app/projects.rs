use leptos::{html, prelude::*};

use crate::content::Project;
use crate::reveal::{reveal_class, stagger_style};

use super::effects::use_reveal;

const PREVIEW_DOTS: usize = 12;

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let seen = use_reveal(section_ref);

    view! {
        <section id="projects" class="section projects-section" node_ref=section_ref>
            <div class="container">
                <div
                    class=move || reveal_class("fade-up projects-header", seen.get())
                    style=stagger_style(0.6, 0.0, 0.0, 0)
                >
                    <span class="section-label">"Portfolio"</span>
                    <h2 class="section-title">
                        "Featured " <span class="italic accent">"Projects"</span>
                    </h2>
                    <p class="section-subtitle">
                        "Showcase of my cybersecurity and software engineering work"
                    </p>
                </div>

                <div class="projects-grid">
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <div
                                    class=move || reveal_class("fade-up-far project-card", seen.get())
                                    style=stagger_style(0.6, 0.0, 0.1, i)
                                >
                                    <ProjectCard project />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="floating-icons" aria-hidden="true">
                <div class="floating-icon icon-1">"🛡"</div>
                <div class="floating-icon icon-2">"◈"</div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let accent = format!("color: {};", project.accent);
    view! {
        <div class="project-preview" style=format!("background: {};", project.gradient)>
            <div class="project-brand">
                <span class="brand-logo" style=accent.clone()>
                    {project.logo.as_str()}
                </span>
                <span class="brand-name" style=accent>
                    {project.name.as_str()}
                </span>
            </div>
            <div class="project-dots">
                {(0..PREVIEW_DOTS)
                    .map(|i| {
                        let delay = i as f32 * 0.1;
                        view! { <div class="dot" style=format!("animation-delay: {delay:.1}s;") /> }
                    })
                    .collect_view()}
            </div>
            <div class="project-preview-overlay">
                <a
                    href=project.url.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="preview-btn"
                >
                    <span>"Visit Site"</span>
                    " ↗"
                </a>
            </div>
        </div>

        <div class="project-info">
            <h3 class="project-name">{project.name.as_str()}</h3>
            <p class="project-description">{project.description.as_str()}</p>
            <div class="project-tags">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="project-tag">{tag.as_str()}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
