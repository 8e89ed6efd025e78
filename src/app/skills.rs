use leptos::{html, prelude::*};

use crate::content::SkillGroup;
use crate::reveal::{reveal_class, stagger_style};

use super::effects::use_reveal;

#[component]
pub fn SkillsSection(skills: &'static [SkillGroup]) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let seen = use_reveal(section_ref);

    view! {
        <section id="skills" class="section skills-section" node_ref=section_ref>
            <div class="container">
                <div
                    class=move || reveal_class("fade-up skills-header", seen.get())
                    style=stagger_style(0.6, 0.0, 0.0, 0)
                >
                    <span class="section-label">"Expertise"</span>
                    <h2 class="section-title">
                        "Technical " <span class="italic accent">"Skills"</span>
                    </h2>
                    <p class="section-subtitle">
                        "A comprehensive toolkit for building exceptional software"
                    </p>
                </div>

                <div class="skills-grid">
                    {skills
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <div
                                    class=move || reveal_class("fade-up skill-card glass-card", seen.get())
                                    style=stagger_style(0.5, 0.0, 0.1, i)
                                >
                                    <div class="skill-icon">{skill.icon.as_str()}</div>
                                    <h3 class="skill-title">{skill.name.as_str()}</h3>
                                    <ul class="skill-list">
                                        {skill
                                            .items
                                            .iter()
                                            .enumerate()
                                            .map(|(j, item)| {
                                                view! {
                                                    <li
                                                        class=move || reveal_class("fade-right", seen.get())
                                                        style=stagger_style(0.3, 0.3, 0.05, j)
                                                    >
                                                        <span class="skill-bullet" />
                                                        {item.as_str()}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
